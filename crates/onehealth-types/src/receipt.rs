use crate::RiskLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for onehealth reports.
pub const SCHEMA_REPORT_V1: &str = "onehealth.report.v1";

/// One labeled score produced by a model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Assessment {
    pub model_id: String,
    pub metric_id: String,
    pub level: RiskLevel,

    /// Score as computed by the model.
    pub value: f64,

    /// Value the level was looked up from. Differs from `value` for metrics
    /// that are rescaled before labeling (hospital burden, ICU amplification).
    pub label_value: f64,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Metric-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LevelCounts {
    pub low: u32,
    pub moderate: u32,
    pub high: u32,
}

impl LevelCounts {
    pub fn from_assessments(assessments: &[Assessment]) -> Self {
        let mut counts = LevelCounts::default();
        for a in assessments {
            match a.level {
                RiskLevel::Low => counts.low += 1,
                RiskLevel::Moderate => counts.moderate += 1,
                RiskLevel::High => counts.high += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Onehealth-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct OneHealthData {
    pub scenario: String,
    pub preset: String,

    pub models_evaluated: Vec<String>,
    pub assessments_total: u32,
    pub level_counts: LevelCounts,

    /// Threshold configured by the user; `alert` is set when the verdict reaches it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_on: Option<RiskLevel>,
    pub alert: bool,

    /// SHA-256 over the canonical rendering of the validated inputs.
    pub input_fingerprint: String,
}

/// A generic receipt/envelope.
///
/// Keeping this generic allows the summary payload to evolve while the outer shape stays stable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = OneHealthData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    /// Highest level across all assessments (`low` when nothing was assessed).
    pub verdict: RiskLevel,
    pub assessments: Vec<Assessment>,
    pub data: TData,
}

pub type OneHealthReport = ReportEnvelope<OneHealthData>;
