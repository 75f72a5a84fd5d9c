use anyhow::Context;
use onehealth_render::{
    RenderableAssessment, RenderableData, RenderableLevel, RenderableReport, RenderableValue,
};
use onehealth_types::{
    Assessment, OneHealthReport, RiskLevel, SCHEMA_REPORT_V1, ids, lookup_explanation,
};

pub fn parse_report_json(text: &str) -> anyhow::Result<OneHealthReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse onehealth report")
}

pub fn serialize_report(report: &OneHealthReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn to_renderable(report: &OneHealthReport) -> RenderableReport {
    RenderableReport {
        verdict: renderable_level(report.verdict),
        assessments: report.assessments.iter().map(renderable_assessment).collect(),
        data: RenderableData {
            scenario: report.data.scenario.clone(),
            preset: report.data.preset.clone(),
            low: report.data.level_counts.low,
            moderate: report.data.level_counts.moderate,
            high: report.data.level_counts.high,
            alert_on: report.data.alert_on.map(renderable_level),
            alert: report.data.alert,
            input_fingerprint: report.data.input_fingerprint.clone(),
        },
    }
}

fn renderable_level(level: RiskLevel) -> RenderableLevel {
    match level {
        RiskLevel::Low => RenderableLevel::Low,
        RiskLevel::Moderate => RenderableLevel::Moderate,
        RiskLevel::High => RenderableLevel::High,
    }
}

fn renderable_assessment(a: &Assessment) -> RenderableAssessment {
    let value = if a.metric_id == ids::METRIC_ICU_AMPLIFICATION {
        RenderableValue::Count(a.value.max(0.0) as u32)
    } else {
        RenderableValue::Score(a.value)
    };

    RenderableAssessment {
        model: title_or_id(&a.model_id),
        metric_id: a.metric_id.clone(),
        name: title_or_id(&a.metric_id),
        level: renderable_level(a.level),
        value,
        help: a.help.clone(),
    }
}

/// Display name from the explain registry; reports from newer versions may carry unknown ids.
fn title_or_id(id: &str) -> String {
    lookup_explanation(id)
        .map(|exp| exp.title.to_string())
        .unwrap_or_else(|| id.to_string())
}
