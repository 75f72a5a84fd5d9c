//! Shared test utilities for the onehealth workspace.
//!
//! This crate exists because `xtask` needs these helpers at runtime (not behind
//! `#[cfg(test)]`), so a `#[cfg(test)]` module inside `onehealth-types` would not suffice.

use serde_json::{Map, Value};

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` only when the root object
///    looks like a report envelope (`schema`, `tool`, `verdict`, `assessments`). Assessment
///    `data` payloads are left alone even if they carry similar keys.
///
/// 2. **Recursive**: `started_at` and `finished_at` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("assessments");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

/// Project a report onto the fields fixture expectations pin down.
///
/// Scores are rendered as strings with four decimals so expectations do not depend on the
/// last bits of floating-point arithmetic.
///
/// ```json
/// {
///   "verdict": "high",
///   "alert": false,
///   "models_evaluated": ["flurona", "bacterial"],
///   "level_counts": { "low": 3, "moderate": 2, "high": 2 },
///   "metrics": { "flurona.flu_risk": { "level": "moderate", "value": "0.5000" } }
/// }
/// ```
pub fn summarize_report(report: &Value) -> Value {
    let mut metrics = Map::new();
    if let Some(assessments) = report.get("assessments").and_then(Value::as_array) {
        for a in assessments {
            let Some(metric_id) = a.get("metric_id").and_then(Value::as_str) else {
                continue;
            };
            let mut entry = Map::new();
            entry.insert(
                "level".to_string(),
                a.get("level").cloned().unwrap_or(Value::Null),
            );
            let value = a
                .get("value")
                .and_then(Value::as_f64)
                .map(|v| Value::String(format!("{v:.4}")))
                .unwrap_or(Value::Null);
            entry.insert("value".to_string(), value);
            metrics.insert(metric_id.to_string(), Value::Object(entry));
        }
    }

    let data = report.get("data");
    let field = |key: &str| {
        data.and_then(|d| d.get(key))
            .cloned()
            .unwrap_or(Value::Null)
    };

    let mut out = Map::new();
    out.insert(
        "verdict".to_string(),
        report.get("verdict").cloned().unwrap_or(Value::Null),
    );
    out.insert("alert".to_string(), field("alert"));
    out.insert("models_evaluated".to_string(), field("models_evaluated"));
    out.insert("level_counts".to_string(), field("level_counts"));
    out.insert("metrics".to_string(), Value::Object(metrics));
    Value::Object(out)
}
