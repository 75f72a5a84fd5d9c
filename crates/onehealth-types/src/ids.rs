//! Stable identifiers for models and metrics.
//!
//! `model_id` is a bare name. `metric_id` is `<model_id>.<snake_case_metric>`.

// Models
pub const MODEL_FLURONA: &str = "flurona";
pub const MODEL_BACTERIAL: &str = "bacterial";

// Metrics: flurona
pub const METRIC_FLU_RISK: &str = "flurona.flu_risk";
pub const METRIC_COVID_RISK: &str = "flurona.covid_risk";
pub const METRIC_COINFECTION_RISK: &str = "flurona.coinfection_risk";
pub const METRIC_HOSPITAL_BURDEN: &str = "flurona.hospital_burden";

// Metrics: bacterial
pub const METRIC_AMR_RISK: &str = "bacterial.amr_risk";
pub const METRIC_ICU_AMPLIFICATION: &str = "bacterial.icu_amplification";
pub const METRIC_ZOONOTIC_RISK: &str = "bacterial.zoonotic_risk";

/// Shown under every rendered report.
pub const DISCLAIMER: &str = "Research & policy-support tool only. Not for clinical diagnosis.";
