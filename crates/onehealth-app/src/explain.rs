//! The `explain` use case: look up model/metric documentation.

use onehealth_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available model and metric ids.
    NotFound {
        identifier: String,
        available_model_ids: &'static [&'static str],
        available_metric_ids: &'static [&'static str],
    },
}

/// Look up an explanation for a model_id or metric_id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_model_ids: explain::all_model_ids(),
            available_metric_ids: explain::all_metric_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Formula\n");
    out.push_str("-------\n");
    out.push_str(exp.formula);
    out.push_str("\n\n");
    out.push_str("Labeling\n");
    out.push_str("--------\n");
    out.push_str(exp.labeling);
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    model_ids: &[&'static str],
    metric_ids: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown model_id or metric_id: {}\n\n", identifier));
    out.push_str("Available model_ids:\n");
    for id in model_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable metric_ids:\n");
    for id in metric_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}
