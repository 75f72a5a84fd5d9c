use onehealth_domain::{BacterialInputs, FluronaInputs, HospitalCapacity, IcuCapacity, Level};

/// Preset scenarios are starting points, not calibrated data.
///
/// Keep these small and readable. Anything specific belongs in the scenario file.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub flurona: FluronaInputs,
    pub bacterial: BacterialInputs,
}

pub fn preset(name: &str) -> Option<Preset> {
    match name {
        "baseline" => Some(baseline()),
        "winter-surge" => Some(winter_surge()),
        "intensive-farming" => Some(intensive_farming()),
        _ => None,
    }
}

pub fn all_presets() -> Vec<Preset> {
    vec![baseline(), winter_surge(), intensive_farming()]
}

fn baseline() -> Preset {
    // The calculator's initial input values.
    Preset {
        name: "baseline",
        description: "initial calculator values",
        flurona: FluronaInputs::default(),
        bacterial: BacterialInputs::default(),
    }
}

fn winter_surge() -> Preset {
    Preset {
        name: "winter-surge",
        description: "cold, humid season with high respiratory incidence and a strained hospital",
        flurona: FluronaInputs {
            temperature_c: 2.0,
            humidity_pct: 80.0,
            flu_incidence: 600.0,
            covid_incidence: 900.0,
            population_density: Level::High,
            mobility: Level::Moderate,
            flu_vaccination_pct: 30.0,
            covid_vaccination_pct: 40.0,
            hospital_capacity: HospitalCapacity::Strained,
        },
        bacterial: BacterialInputs::default(),
    }
}

fn intensive_farming() -> Preset {
    Preset {
        name: "intensive-farming",
        description: "warm region with heavy antibiotic use and close animal contact",
        flurona: FluronaInputs::default(),
        bacterial: BacterialInputs {
            temperature_c: 30.0,
            humidity_pct: 70.0,
            antibiotic_usage: Level::High,
            icu_capacity: IcuCapacity::Limited,
            animal_contact: Level::High,
        },
    }
}
