//! Use case orchestration for onehealth.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod assess;
mod explain;
mod render;
mod report;

pub use assess::{AssessInput, AssessOutput, alert_exit_code, run_assess};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, render_text};
pub use report::{parse_report_json, serialize_report, to_renderable};
