//! Bacterial / antimicrobial-resistance model.

use crate::error::InvalidInput;
use crate::label::{RiskScore, label};
use crate::model::{BacterialInputs, Ordinal};
use onehealth_types::RiskLevel;

/// ICU amplification is labeled on a quarter of its value.
pub const ICU_AMPLIFICATION_LABEL_DIVISOR: f64 = 4.0;

/// Product of antibiotic-usage and ICU-capacity ordinals. Always one of `{0, 1, 2, 4}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IcuAmplification {
    pub factor: u8,
    pub level: RiskLevel,
}

impl IcuAmplification {
    pub fn new(factor: u8) -> Self {
        let label_value = f64::from(factor) / ICU_AMPLIFICATION_LABEL_DIVISOR;
        Self {
            factor,
            level: label(label_value),
        }
    }

    pub fn label_value(&self) -> f64 {
        f64::from(self.factor) / ICU_AMPLIFICATION_LABEL_DIVISOR
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BacterialResult {
    pub amr_risk: RiskScore,
    pub icu_amplification: IcuAmplification,
    pub zoonotic_risk: RiskScore,

    /// Weighted sum before the cap; reaches 1.75 at most.
    pub amr_risk_uncapped: f64,
}

/// Score a validated set of inputs.
pub fn compute_bacterial_risk(inputs: &BacterialInputs) -> BacterialResult {
    let abx = inputs.antibiotic_usage.weight();
    let icu = inputs.icu_capacity.weight();
    let animal = inputs.animal_contact.weight();
    let heat = inputs.temperature_c / 45.0;
    let humidity = inputs.humidity_pct / 100.0;

    let amr = 0.30 * abx + 0.25 * icu + 0.20 * animal + 0.15 * heat + 0.10 * humidity;
    let zoonotic = (animal * heat * humidity).min(1.0);
    let factor = inputs.antibiotic_usage.ordinal() * inputs.icu_capacity.ordinal();

    BacterialResult {
        amr_risk: RiskScore::new(amr.min(1.0)),
        icu_amplification: IcuAmplification::new(factor),
        zoonotic_risk: RiskScore::new(zoonotic),
        amr_risk_uncapped: amr,
    }
}

pub fn try_compute_bacterial_risk(
    inputs: &BacterialInputs,
) -> Result<BacterialResult, InvalidInput> {
    inputs.validate()?;
    Ok(compute_bacterial_risk(inputs))
}
