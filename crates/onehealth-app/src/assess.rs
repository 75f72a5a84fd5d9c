//! The `assess` use case: resolve the scenario, run the models and produce a report.

use anyhow::Context;
use onehealth_settings::{Overrides, ResolvedConfig};
use onehealth_types::{OneHealthReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;

/// Input for the assess use case.
#[derive(Clone, Debug)]
pub struct AssessInput<'a> {
    /// Scenario file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the assess use case.
#[derive(Clone, Debug)]
pub struct AssessOutput {
    /// The generated report.
    pub report: OneHealthReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the assess use case: parse the scenario, resolve it against its preset, evaluate, report.
pub fn run_assess(input: AssessInput<'_>) -> anyhow::Result<AssessOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse scenario (empty is allowed, the preset applies).
    let cfg = if input.config_text.trim().is_empty() {
        onehealth_settings::ScenarioConfigV1::default()
    } else {
        onehealth_settings::parse_scenario_toml(input.config_text).context("parse scenario")?
    };

    let resolved = onehealth_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve scenario")?;

    tracing::debug!(
        preset = %resolved.effective.preset,
        flurona = resolved.scenario.flurona.is_some(),
        bacterial = resolved.scenario.bacterial.is_some(),
        "evaluating scenario"
    );

    let onehealth_domain::report::DomainReport {
        verdict,
        assessments,
        data,
    } = onehealth_domain::evaluate(&resolved.scenario, &resolved.effective);

    for a in &assessments {
        tracing::debug!(metric = %a.metric_id, level = %a.level, value = a.value, "assessed");
    }
    tracing::info!(
        scenario = %data.scenario,
        verdict = %verdict,
        alert = data.alert,
        fingerprint = %data.input_fingerprint,
        "assessment complete"
    );

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "onehealth".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        assessments,
        data,
    };

    Ok(AssessOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map a report to an exit code: 2 when the configured alert threshold was reached, else 0.
pub fn alert_exit_code(report: &OneHealthReport) -> i32 {
    if report.data.alert { 2 } else { 0 }
}
