use onehealth_types::RiskLevel;

/// Scores at or above this are MODERATE.
pub const MODERATE_THRESHOLD: f64 = 0.30;
/// Scores at or above this are HIGH.
pub const HIGH_THRESHOLD: f64 = 0.60;

/// Map a score onto LOW / MODERATE / HIGH. Total over `f64`.
pub fn label(score: f64) -> RiskLevel {
    if score < MODERATE_THRESHOLD {
        RiskLevel::Low
    } else if score < HIGH_THRESHOLD {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// A score together with the value its level was looked up from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiskScore {
    pub value: f64,
    pub label_value: f64,
    pub level: RiskLevel,
}

impl RiskScore {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label_value: value,
            level: label(value),
        }
    }

    /// Label `value / divisor` while keeping `value` as reported.
    pub fn rescaled(value: f64, divisor: f64) -> Self {
        let label_value = value / divisor;
        Self {
            value,
            label_value,
            level: label(label_value),
        }
    }
}
