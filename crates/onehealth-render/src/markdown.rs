use crate::RenderableReport;
use onehealth_types::ids::DISCLAIMER;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# One Health risk report\n\n");
    out.push_str(&format!(
        "- Scenario: **{}** (preset `{}`)\n- Verdict: **{}**\n- Assessments: {} (low {} / moderate {} / high {})\n",
        report.data.scenario,
        report.data.preset,
        report.verdict.as_str(),
        report.assessments.len(),
        report.data.low,
        report.data.moderate,
        report.data.high,
    ));

    if let Some(threshold) = report.data.alert_on {
        let state = if report.data.alert {
            "reached"
        } else {
            "not reached"
        };
        out.push_str(&format!(
            "- Alert: **{}** (threshold `{}`)\n",
            state,
            threshold.as_str()
        ));
    }
    out.push_str(&format!(
        "- Input fingerprint: `{}`\n\n",
        report.data.input_fingerprint
    ));

    if report.assessments.is_empty() {
        out.push_str("No models evaluated.\n\n");
    }

    for (model, items) in report.groups() {
        out.push_str(&format!("## {}\n\n", model));
        out.push_str("| Metric | Level | Value |\n|---|---|---|\n");
        for a in &items {
            out.push_str(&format!(
                "| {} (`{}`) | {} | {} |\n",
                a.name,
                a.metric_id,
                a.level.as_str(),
                a.value
            ));
        }
        out.push('\n');

        let mut any_help = false;
        for a in &items {
            if let Some(help) = &a.help {
                out.push_str(&format!("- `{}` help: {}\n", a.metric_id, help));
                any_help = true;
            }
        }
        if any_help {
            out.push('\n');
        }
    }

    out.push_str(&format!("> {}\n", DISCLAIMER));
    out
}
