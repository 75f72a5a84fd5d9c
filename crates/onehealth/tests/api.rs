use onehealth::{
    EffectiveConfig, FluronaInputs, HospitalCapacity, InvalidInput, Level, ModelToggles,
    RiskLevel, Scenario, evaluate, try_compute_flurona_risk,
};

fn crowded_winter() -> FluronaInputs {
    FluronaInputs {
        temperature_c: 0.0,
        humidity_pct: 90.0,
        flu_incidence: 1000.0,
        covid_incidence: 2000.0,
        population_density: Level::High,
        mobility: Level::High,
        flu_vaccination_pct: 0.0,
        covid_vaccination_pct: 0.0,
        hospital_capacity: HospitalCapacity::Overwhelmed,
    }
}

#[test]
fn saturated_flurona_scenario_is_high_everywhere() {
    let result = try_compute_flurona_risk(&crowded_winter()).expect("valid inputs");
    assert_eq!(result.flu_risk.value, 1.0);
    assert!(result.flu_risk_uncapped > 1.0);
    assert_eq!(result.coinfection_risk.value, 1.0);
    assert_eq!(result.hospital_burden.value, 3.0);
    assert_eq!(result.hospital_burden.level, RiskLevel::High);
}

#[test]
fn rejects_out_of_range_incidence() {
    let inputs = FluronaInputs {
        covid_incidence: 2500.0,
        ..FluronaInputs::default()
    };
    let err = try_compute_flurona_risk(&inputs).expect_err("out of range");
    assert!(matches!(
        err,
        InvalidInput::OutOfRange {
            field: "covid_incidence",
            ..
        }
    ));
}

#[test]
fn rejects_nan() {
    let inputs = FluronaInputs {
        humidity_pct: f64::NAN,
        ..FluronaInputs::default()
    };
    assert_eq!(
        try_compute_flurona_risk(&inputs),
        Err(InvalidInput::NotFinite {
            field: "humidity_pct"
        })
    );
}

#[test]
fn evaluate_with_everything_disabled_is_low() {
    let scenario = Scenario {
        name: "off".to_string(),
        flurona: Some(crowded_winter()),
        bacterial: None,
    };
    let cfg = EffectiveConfig {
        models: ModelToggles {
            flurona: false,
            bacterial: false,
        },
        alert_on: Some(RiskLevel::Moderate),
        ..EffectiveConfig::default()
    };
    let report = evaluate(&scenario, &cfg);
    assert_eq!(report.verdict, RiskLevel::Low);
    assert!(report.assessments.is_empty());
    assert!(!report.data.alert);
}
