use thiserror::Error;

/// Rejected model input.
///
/// The engine itself never produces this: `compute_*` assume validated input. It comes from
/// [`crate::validate`] and from parsing category names.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown {category} '{value}' (expected {expected})")]
    UnknownCategory {
        category: &'static str,
        value: String,
        expected: &'static str,
    },
}
