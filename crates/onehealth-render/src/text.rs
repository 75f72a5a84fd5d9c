use crate::RenderableReport;
use onehealth_types::ids::DISCLAIMER;

/// Render the terminal summary printed by the CLI.
///
/// One line per metric, `<name>: <LEVEL> (<value>)`, grouped under the model it belongs to.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Scenario: {} (preset: {})\n",
        report.data.scenario, report.data.preset
    ));

    for (model, items) in report.groups() {
        out.push_str(&format!("\n{}\n", model));
        for a in items {
            out.push_str(&format!(
                "  {}: {} ({})\n",
                a.name,
                a.level.as_str(),
                a.value
            ));
        }
    }

    if report.assessments.is_empty() {
        out.push_str("\nNo models evaluated.\n");
    }

    out.push_str(&format!("\nOverall: {}\n", report.verdict.as_str()));
    if let Some(threshold) = report.data.alert_on
        && report.data.alert
    {
        out.push_str(&format!("ALERT: verdict reached {}\n", threshold.as_str()));
    }

    out.push_str(&format!("\n{}\n", DISCLAIMER));
    out
}
