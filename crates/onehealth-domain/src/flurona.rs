//! Influenza / COVID-19 coinfection model.

use crate::error::InvalidInput;
use crate::label::RiskScore;
use crate::model::{FluronaInputs, Ordinal};

/// Hospital burden is labeled on half its value.
pub const HOSPITAL_BURDEN_LABEL_DIVISOR: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluronaResult {
    /// Capped at 1.0 for display; see `flu_risk_uncapped`.
    pub flu_risk: RiskScore,
    /// Capped at 1.0 for display; see `covid_risk_uncapped`.
    pub covid_risk: RiskScore,
    pub coinfection_risk: RiskScore,
    /// Not capped. Labeled on `value / 2`.
    pub hospital_burden: RiskScore,

    pub flu_risk_uncapped: f64,
    pub covid_risk_uncapped: f64,
}

/// Score a validated set of inputs.
///
/// Out-of-range inputs are a caller error: the result is computed but meaningless.
/// Use [`try_compute_flurona_risk`] for unchecked input.
pub fn compute_flurona_risk(inputs: &FluronaInputs) -> FluronaResult {
    let pop = inputs.population_density.weight();
    let mobility = inputs.mobility.weight();
    let hospital = inputs.hospital_capacity.weight();

    let flu = 0.30 * (inputs.flu_incidence / 1000.0)
        + 0.25 * (1.0 - inputs.flu_vaccination_pct / 100.0)
        + 0.20 * (inputs.humidity_pct / 100.0)
        + 0.15 * (1.0 - inputs.temperature_c / 45.0)
        + 0.10 * pop;

    let covid = 0.30 * (inputs.covid_incidence / 2000.0)
        + 0.25 * (1.0 - inputs.covid_vaccination_pct / 100.0)
        + 0.20 * mobility
        + 0.15 * pop
        + 0.10 * hospital;

    // The product uses the uncapped individual risks; only the product is capped.
    let coinfection = (flu * covid * (1.0 + 0.3 * flu)).min(1.0);
    let hospital_burden = coinfection * (1.0 + hospital);

    FluronaResult {
        flu_risk: RiskScore::new(flu.min(1.0)),
        covid_risk: RiskScore::new(covid.min(1.0)),
        coinfection_risk: RiskScore::new(coinfection),
        hospital_burden: RiskScore::rescaled(hospital_burden, HOSPITAL_BURDEN_LABEL_DIVISOR),
        flu_risk_uncapped: flu,
        covid_risk_uncapped: covid,
    }
}

pub fn try_compute_flurona_risk(inputs: &FluronaInputs) -> Result<FluronaResult, InvalidInput> {
    inputs.validate()?;
    Ok(compute_flurona_risk(inputs))
}
