use crate::model::{
    BacterialInputs, FluronaInputs, HospitalCapacity, IcuCapacity, Level, Scenario,
};
use crate::policy::EffectiveConfig;

pub const EPSILON: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// temp 15, humidity 60, flu 100, covid 150, Moderate/Moderate, vax 40/50, Adequate.
pub fn flurona_example() -> FluronaInputs {
    FluronaInputs {
        temperature_c: 15.0,
        humidity_pct: 60.0,
        flu_incidence: 100.0,
        covid_incidence: 150.0,
        population_density: Level::Moderate,
        mobility: Level::Moderate,
        flu_vaccination_pct: 40.0,
        covid_vaccination_pct: 50.0,
        hospital_capacity: HospitalCapacity::Adequate,
    }
}

/// temp 25, humidity 60, antibiotics High, ICU Overloaded, animal contact Low.
pub fn bacterial_example() -> BacterialInputs {
    BacterialInputs {
        temperature_c: 25.0,
        humidity_pct: 60.0,
        antibiotic_usage: Level::High,
        icu_capacity: IcuCapacity::Overloaded,
        animal_contact: Level::Low,
    }
}

pub fn scenario(flurona: Option<FluronaInputs>, bacterial: Option<BacterialInputs>) -> Scenario {
    Scenario {
        name: "test".to_string(),
        flurona,
        bacterial,
    }
}

pub fn config() -> EffectiveConfig {
    EffectiveConfig {
        preset: "test".to_string(),
        ..EffectiveConfig::default()
    }
}
