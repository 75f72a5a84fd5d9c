//! Scenario parsing and preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves scenarios provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{
    BacterialConfig, FluronaConfig, ModelsConfig, SCHEMA_SCENARIO_V1, ScenarioConfigV1,
};
pub use presets::{Preset, all_presets};
pub use resolve::{Overrides, ResolvedConfig, parse_risk_level};

/// Parse `onehealth.toml` (or equivalent) into a typed model.
pub fn parse_scenario_toml(input: &str) -> anyhow::Result<ScenarioConfigV1> {
    let cfg: ScenarioConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the scenario and engine config (preset + file + overrides), validating every input.
pub fn resolve_config(
    cfg: ScenarioConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
