//! Range checks for free-form numeric input.
//!
//! The ranges are closed intervals and mirror the bounds of the original input controls.

use crate::error::InvalidInput;
use crate::model::{BacterialInputs, FluronaInputs, Scenario};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const FLURONA_TEMPERATURE_C: Range = Range::new(-10.0, 45.0);
pub const BACTERIAL_TEMPERATURE_C: Range = Range::new(0.0, 45.0);
pub const HUMIDITY_PCT: Range = Range::new(0.0, 100.0);
pub const FLU_INCIDENCE: Range = Range::new(0.0, 1000.0);
pub const COVID_INCIDENCE: Range = Range::new(0.0, 2000.0);
pub const VACCINATION_PCT: Range = Range::new(0.0, 100.0);

pub fn check_range(field: &'static str, value: f64, range: Range) -> Result<(), InvalidInput> {
    if !value.is_finite() {
        return Err(InvalidInput::NotFinite { field });
    }
    if !range.contains(value) {
        return Err(InvalidInput::OutOfRange {
            field,
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

impl FluronaInputs {
    /// Reports the first field (in declaration order) that is out of range.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_range("temperature_c", self.temperature_c, FLURONA_TEMPERATURE_C)?;
        check_range("humidity_pct", self.humidity_pct, HUMIDITY_PCT)?;
        check_range("flu_incidence", self.flu_incidence, FLU_INCIDENCE)?;
        check_range("covid_incidence", self.covid_incidence, COVID_INCIDENCE)?;
        check_range(
            "flu_vaccination_pct",
            self.flu_vaccination_pct,
            VACCINATION_PCT,
        )?;
        check_range(
            "covid_vaccination_pct",
            self.covid_vaccination_pct,
            VACCINATION_PCT,
        )?;
        Ok(())
    }
}

impl BacterialInputs {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_range("temperature_c", self.temperature_c, BACTERIAL_TEMPERATURE_C)?;
        check_range("humidity_pct", self.humidity_pct, HUMIDITY_PCT)?;
        Ok(())
    }
}

impl Scenario {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if let Some(f) = &self.flurona {
            f.validate()?;
        }
        if let Some(b) = &self.bacterial {
            b.validate()?;
        }
        Ok(())
    }
}
