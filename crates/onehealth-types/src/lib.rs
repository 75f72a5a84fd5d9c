//! Stable DTOs and IDs used across the onehealth workspace.
//!
//! This crate is intentionally boring:
//! - the qualitative risk level scale
//! - data types for the emitted report
//! - stable string IDs for models and metrics
//! - explain registry for the formulas behind each metric

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod level;
pub mod receipt;

pub use explain::{Explanation, lookup_explanation};
pub use level::RiskLevel;
pub use receipt::{
    Assessment, LevelCounts, OneHealthData, OneHealthReport, ReportEnvelope, SCHEMA_REPORT_V1,
    ToolMeta,
};
