use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_SCENARIO_V1: &str = "onehealth.scenario.v1";

/// `onehealth.toml` schema v1.
///
/// Top-level keys are permissive so forward-compat is easy. The model sections are strict:
/// a misspelled input key would otherwise fall back to the preset value unnoticed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScenarioConfigV1 {
    /// Optional schema string for tooling (`onehealth.scenario.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Scenario name carried into the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Preset supplying every input not set below.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Alert when the verdict reaches `low`, `moderate` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<ModelsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flurona: Option<FluronaConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bacterial: Option<BacterialConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModelsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flurona: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bacterial: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FluronaConfig {
    /// Degrees Celsius, -10..45.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    /// Percent, 0..100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity_pct: Option<f64>,
    /// Cases per 100k, 0..1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flu_incidence: Option<f64>,
    /// Cases per 100k, 0..2000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub covid_incidence: Option<f64>,
    /// `low`, `moderate` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_density: Option<String>,
    /// `low`, `moderate` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility: Option<String>,
    /// Percent, 0..100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flu_vaccination_pct: Option<f64>,
    /// Percent, 0..100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub covid_vaccination_pct: Option<f64>,
    /// `adequate`, `strained` or `overwhelmed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_capacity: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BacterialConfig {
    /// Degrees Celsius, 0..45.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    /// Percent, 0..100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity_pct: Option<f64>,
    /// `low`, `moderate` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antibiotic_usage: Option<String>,
    /// `adequate`, `limited` or `overloaded`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icu_capacity: Option<String>,
    /// `low`, `moderate` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal_contact: Option<String>,
}
