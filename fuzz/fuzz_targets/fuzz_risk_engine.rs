//! Fuzz target for the risk models.
//!
//! Goal: `try_compute_*` should **never panic**, including on NaN, infinities and out-of-range
//! numbers, and accepted inputs must produce scores inside their documented bounds.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_risk_engine
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use onehealth_domain::{
    BacterialInputs, FluronaInputs, HospitalCapacity, IcuCapacity, Level,
    try_compute_bacterial_risk, try_compute_flurona_risk,
};

/// Raw numbers plus category selectors (reduced modulo 3).
#[derive(Arbitrary, Debug)]
struct EngineInput {
    temperature_c: f64,
    humidity_pct: f64,
    flu_incidence: f64,
    covid_incidence: f64,
    flu_vaccination_pct: f64,
    covid_vaccination_pct: f64,
    categories: [u8; 6],
}

fn level(b: u8) -> Level {
    Level::ALL[usize::from(b % 3)]
}

fuzz_target!(|input: EngineInput| {
    let [pop, mobility, hospital, abx, icu, animal] = input.categories;

    let flurona = FluronaInputs {
        temperature_c: input.temperature_c,
        humidity_pct: input.humidity_pct,
        flu_incidence: input.flu_incidence,
        covid_incidence: input.covid_incidence,
        population_density: level(pop),
        mobility: level(mobility),
        flu_vaccination_pct: input.flu_vaccination_pct,
        covid_vaccination_pct: input.covid_vaccination_pct,
        hospital_capacity: HospitalCapacity::ALL[usize::from(hospital % 3)],
    };
    if let Ok(r) = try_compute_flurona_risk(&flurona) {
        assert!((0.0..=1.0).contains(&r.flu_risk.value));
        assert!((0.0..=1.0).contains(&r.covid_risk.value));
        assert!((0.0..=1.0).contains(&r.coinfection_risk.value));
        assert!((0.0..=3.0).contains(&r.hospital_burden.value));
    }

    let bacterial = BacterialInputs {
        temperature_c: input.temperature_c,
        humidity_pct: input.humidity_pct,
        antibiotic_usage: level(abx),
        icu_capacity: IcuCapacity::ALL[usize::from(icu % 3)],
        animal_contact: level(animal),
    };
    if let Ok(r) = try_compute_bacterial_risk(&bacterial) {
        assert!((0.0..=1.0).contains(&r.amr_risk.value));
        assert!((0.0..=1.0).contains(&r.zoonotic_risk.value));
        assert!([0, 1, 2, 4].contains(&r.icu_amplification.factor));
    }
});
