//! Fuzz target for scenario parsing and resolution.
//!
//! Goal: parsing and resolving a scenario should **never panic** on any input.
//! It may return errors, but panics are unacceptable. Whatever resolves must evaluate cleanly.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_scenario_config
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use onehealth_settings::Overrides;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cfg) = onehealth_settings::parse_scenario_toml(text) else {
        return;
    };
    let Ok(resolved) = onehealth_settings::resolve_config(cfg, Overrides::default()) else {
        return;
    };

    // Resolution validates, so the scenario must pass validation again.
    assert!(resolved.scenario.validate().is_ok());
    let report = onehealth_domain::evaluate(&resolved.scenario, &resolved.effective);
    assert_eq!(report.data.assessments_total as usize, report.assessments.len());
});
