use crate::model::{BacterialConfig, FluronaConfig, SCHEMA_SCENARIO_V1, ScenarioConfigV1};
use crate::presets;
use anyhow::Context;
use onehealth_domain::policy::{EffectiveConfig, ModelToggles};
use onehealth_domain::{BacterialInputs, FluronaInputs, InvalidInput, Scenario};
use onehealth_types::RiskLevel;
use std::str::FromStr;

/// Command-line overrides. They win over the scenario file, which wins over the preset.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub preset: Option<String>,
    pub alert_on: Option<String>,
    /// Replaces the file's `[models]` section entirely when set.
    pub models: Option<ModelToggles>,
    pub flurona: FluronaConfig,
    pub bacterial: BacterialConfig,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub scenario: Scenario,
}

pub fn resolve_config(
    cfg: ScenarioConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_SCENARIO_V1
    {
        anyhow::bail!("unsupported scenario schema: {schema} (expected {SCHEMA_SCENARIO_V1})");
    }

    let preset_name = overrides
        .preset
        .clone()
        .or(cfg.preset.clone())
        .unwrap_or_else(|| "baseline".to_string());

    let Some(preset) = presets::preset(&preset_name) else {
        let known: Vec<&str> = presets::all_presets().iter().map(|p| p.name).collect();
        anyhow::bail!(
            "unknown preset: {preset_name} (expected one of {})",
            known.join("|")
        );
    };

    // Model toggles
    let models = match overrides.models {
        Some(m) => m,
        None => {
            let file = cfg.models.clone().unwrap_or_default();
            ModelToggles {
                flurona: file.flurona.unwrap_or(true),
                bacterial: file.bacterial.unwrap_or(true),
            }
        }
    };

    // alert threshold
    let alert_on = match overrides.alert_on.as_deref().or(cfg.alert_on.as_deref()) {
        Some(s) => Some(parse_risk_level(s).context("invalid alert_on")?),
        None => None,
    };

    // inputs: preset, then file section, then overrides
    let flurona = if models.flurona {
        let mut inputs = preset.flurona;
        if let Some(section) = &cfg.flurona {
            inputs = apply_flurona(inputs, section)?;
        }
        inputs = apply_flurona(inputs, &overrides.flurona)?;
        inputs.validate().context("invalid flurona inputs")?;
        Some(inputs)
    } else {
        None
    };

    let bacterial = if models.bacterial {
        let mut inputs = preset.bacterial;
        if let Some(section) = &cfg.bacterial {
            inputs = apply_bacterial(inputs, section)?;
        }
        inputs = apply_bacterial(inputs, &overrides.bacterial)?;
        inputs.validate().context("invalid bacterial inputs")?;
        Some(inputs)
    } else {
        None
    };

    let name = overrides
        .name
        .or(cfg.name)
        .unwrap_or_else(|| "scenario".to_string());

    Ok(ResolvedConfig {
        effective: EffectiveConfig {
            preset: preset.name.to_string(),
            models,
            alert_on,
        },
        scenario: Scenario {
            name,
            flurona,
            bacterial,
        },
    })
}

fn apply_flurona(mut inputs: FluronaInputs, c: &FluronaConfig) -> anyhow::Result<FluronaInputs> {
    if let Some(v) = c.temperature_c {
        inputs.temperature_c = v;
    }
    if let Some(v) = c.humidity_pct {
        inputs.humidity_pct = v;
    }
    if let Some(v) = c.flu_incidence {
        inputs.flu_incidence = v;
    }
    if let Some(v) = c.covid_incidence {
        inputs.covid_incidence = v;
    }
    if let Some(v) = c.population_density.as_deref() {
        inputs.population_density = parse_category("flurona.population_density", v)?;
    }
    if let Some(v) = c.mobility.as_deref() {
        inputs.mobility = parse_category("flurona.mobility", v)?;
    }
    if let Some(v) = c.flu_vaccination_pct {
        inputs.flu_vaccination_pct = v;
    }
    if let Some(v) = c.covid_vaccination_pct {
        inputs.covid_vaccination_pct = v;
    }
    if let Some(v) = c.hospital_capacity.as_deref() {
        inputs.hospital_capacity = parse_category("flurona.hospital_capacity", v)?;
    }
    Ok(inputs)
}

fn apply_bacterial(
    mut inputs: BacterialInputs,
    c: &BacterialConfig,
) -> anyhow::Result<BacterialInputs> {
    if let Some(v) = c.temperature_c {
        inputs.temperature_c = v;
    }
    if let Some(v) = c.humidity_pct {
        inputs.humidity_pct = v;
    }
    if let Some(v) = c.antibiotic_usage.as_deref() {
        inputs.antibiotic_usage = parse_category("bacterial.antibiotic_usage", v)?;
    }
    if let Some(v) = c.icu_capacity.as_deref() {
        inputs.icu_capacity = parse_category("bacterial.icu_capacity", v)?;
    }
    if let Some(v) = c.animal_contact.as_deref() {
        inputs.animal_contact = parse_category("bacterial.animal_contact", v)?;
    }
    Ok(inputs)
}

fn parse_category<T>(key: &str, v: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = InvalidInput>,
{
    v.parse::<T>().with_context(|| format!("invalid {key}"))
}

pub fn parse_risk_level(v: &str) -> anyhow::Result<RiskLevel> {
    match v.trim().to_ascii_lowercase().as_str() {
        "low" => Ok(RiskLevel::Low),
        "moderate" => Ok(RiskLevel::Moderate),
        "high" => Ok(RiskLevel::High),
        other => anyhow::bail!("unknown risk level: {other} (expected low|moderate|high)"),
    }
}
