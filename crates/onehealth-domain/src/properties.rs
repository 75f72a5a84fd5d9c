//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - score bounds for every valid input
//! - the reachable ICU amplification set
//! - monotonicity of the influenza score
//! - scenario evaluation determinism

use crate::bacterial::compute_bacterial_risk;
use crate::engine::evaluate;
use crate::flurona::compute_flurona_risk;
use crate::label::label;
use crate::model::{
    BacterialInputs, FluronaInputs, HospitalCapacity, IcuCapacity, Level, Scenario,
};
use crate::policy::EffectiveConfig;
use onehealth_types::RiskLevel;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_level() -> impl Strategy<Value = Level> {
    prop_oneof![Just(Level::Low), Just(Level::Moderate), Just(Level::High)]
}

fn arb_hospital() -> impl Strategy<Value = HospitalCapacity> {
    prop_oneof![
        Just(HospitalCapacity::Adequate),
        Just(HospitalCapacity::Strained),
        Just(HospitalCapacity::Overwhelmed),
    ]
}

fn arb_icu() -> impl Strategy<Value = IcuCapacity> {
    prop_oneof![
        Just(IcuCapacity::Adequate),
        Just(IcuCapacity::Limited),
        Just(IcuCapacity::Overloaded),
    ]
}

/// Flurona inputs inside the accepted ranges (bounds included).
fn arb_flurona() -> impl Strategy<Value = FluronaInputs> {
    (
        -10.0f64..=45.0,
        0.0f64..=100.0,
        0.0f64..=1000.0,
        0.0f64..=2000.0,
        arb_level(),
        arb_level(),
        0.0f64..=100.0,
        0.0f64..=100.0,
        arb_hospital(),
    )
        .prop_map(
            |(
                temperature_c,
                humidity_pct,
                flu_incidence,
                covid_incidence,
                population_density,
                mobility,
                flu_vaccination_pct,
                covid_vaccination_pct,
                hospital_capacity,
            )| FluronaInputs {
                temperature_c,
                humidity_pct,
                flu_incidence,
                covid_incidence,
                population_density,
                mobility,
                flu_vaccination_pct,
                covid_vaccination_pct,
                hospital_capacity,
            },
        )
}

fn arb_bacterial() -> impl Strategy<Value = BacterialInputs> {
    (0.0f64..=45.0, 0.0f64..=100.0, arb_level(), arb_icu(), arb_level()).prop_map(
        |(temperature_c, humidity_pct, antibiotic_usage, icu_capacity, animal_contact)| {
            BacterialInputs {
                temperature_c,
                humidity_pct,
                antibiotic_usage,
                icu_capacity,
                animal_contact,
            }
        },
    )
}

fn in_unit_interval(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn generated_inputs_pass_validation(f in arb_flurona(), b in arb_bacterial()) {
        prop_assert!(f.validate().is_ok());
        prop_assert!(b.validate().is_ok());
    }

    #[test]
    fn flurona_scores_stay_in_unit_interval(inputs in arb_flurona()) {
        let r = compute_flurona_risk(&inputs);
        prop_assert!(in_unit_interval(r.flu_risk.value));
        prop_assert!(in_unit_interval(r.covid_risk.value));
        prop_assert!(in_unit_interval(r.coinfection_risk.value));
        prop_assert!(r.hospital_burden.value >= 0.0);
        prop_assert!(r.hospital_burden.value <= 3.0);
    }

    #[test]
    fn bacterial_scores_stay_in_unit_interval(inputs in arb_bacterial()) {
        let r = compute_bacterial_risk(&inputs);
        prop_assert!(in_unit_interval(r.amr_risk.value));
        prop_assert!(in_unit_interval(r.zoonotic_risk.value));
        prop_assert!(r.amr_risk_uncapped <= 1.75 + 1e-12);
    }

    #[test]
    fn icu_amplification_is_in_reachable_set(inputs in arb_bacterial()) {
        let factor = compute_bacterial_risk(&inputs).icu_amplification.factor;
        prop_assert!([0u8, 1, 2, 4].contains(&factor), "factor {}", factor);
    }

    #[test]
    fn levels_agree_with_label_values(f in arb_flurona(), b in arb_bacterial()) {
        let fr = compute_flurona_risk(&f);
        for score in [fr.flu_risk, fr.covid_risk, fr.coinfection_risk, fr.hospital_burden] {
            prop_assert_eq!(score.level, label(score.label_value));
        }
        prop_assert_eq!(fr.hospital_burden.label_value, fr.hospital_burden.value / 2.0);

        let br = compute_bacterial_risk(&b);
        prop_assert_eq!(br.amr_risk.level, label(br.amr_risk.value));
        prop_assert_eq!(br.zoonotic_risk.level, label(br.zoonotic_risk.value));
        prop_assert_eq!(
            br.icu_amplification.level,
            label(f64::from(br.icu_amplification.factor) / 4.0)
        );
    }

    #[test]
    fn capping_does_not_change_the_level(inputs in arb_flurona()) {
        let r = compute_flurona_risk(&inputs);
        prop_assert_eq!(r.flu_risk.level, label(r.flu_risk_uncapped));
        prop_assert_eq!(r.covid_risk.level, label(r.covid_risk_uncapped));
    }

    #[test]
    fn more_flu_cases_never_lower_flu_risk(
        inputs in arb_flurona(),
        a in 0.0f64..=1000.0,
        b in 0.0f64..=1000.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let low = compute_flurona_risk(&FluronaInputs { flu_incidence: lo, ..inputs });
        let high = compute_flurona_risk(&FluronaInputs { flu_incidence: hi, ..inputs });
        prop_assert!(high.flu_risk.value >= low.flu_risk.value);
        prop_assert!(high.flu_risk_uncapped >= low.flu_risk_uncapped);
    }

    #[test]
    fn more_flu_vaccination_never_raises_flu_risk(
        inputs in arb_flurona(),
        a in 0.0f64..=100.0,
        b in 0.0f64..=100.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let low_vax = compute_flurona_risk(&FluronaInputs { flu_vaccination_pct: lo, ..inputs });
        let high_vax = compute_flurona_risk(&FluronaInputs { flu_vaccination_pct: hi, ..inputs });
        prop_assert!(high_vax.flu_risk.value <= low_vax.flu_risk.value);
        prop_assert!(high_vax.flu_risk_uncapped <= low_vax.flu_risk_uncapped);
    }

    #[test]
    fn label_is_monotone(a in -1.0f64..4.0, b in -1.0f64..4.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(label(lo) <= label(hi));
    }

    #[test]
    fn evaluation_is_deterministic(f in arb_flurona(), b in arb_bacterial()) {
        let scenario = Scenario {
            name: "prop".to_string(),
            flurona: Some(f),
            bacterial: Some(b),
        };
        let cfg = EffectiveConfig::default();
        let first = evaluate(&scenario, &cfg);
        let second = evaluate(&scenario, &cfg);
        prop_assert_eq!(&first.assessments, &second.assessments);
        prop_assert_eq!(&first.data, &second.data);
        let highest = first.assessments.iter().map(|a| a.level).max();
        prop_assert_eq!(Some(first.verdict), highest);
        prop_assert!(first.verdict >= RiskLevel::Low);
    }
}
