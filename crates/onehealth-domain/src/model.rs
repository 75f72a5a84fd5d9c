use crate::error::InvalidInput;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maps a three-level category onto its weight in the formulas.
///
/// The mapping is fixed and total: every variant has exactly one ordinal in `{0, 1, 2}`.
pub trait Ordinal: Copy {
    fn ordinal(self) -> u8;

    fn weight(self) -> f64 {
        f64::from(self.ordinal())
    }
}

/// Low / Moderate / High severity.
///
/// Used for population density, mobility, antibiotic usage and animal contact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Low,
    Moderate,
    High,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HospitalCapacity {
    #[default]
    Adequate,
    Strained,
    Overwhelmed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IcuCapacity {
    #[default]
    Adequate,
    Limited,
    Overloaded,
}

impl Ordinal for Level {
    fn ordinal(self) -> u8 {
        match self {
            Level::Low => 0,
            Level::Moderate => 1,
            Level::High => 2,
        }
    }
}

impl Ordinal for HospitalCapacity {
    fn ordinal(self) -> u8 {
        match self {
            HospitalCapacity::Adequate => 0,
            HospitalCapacity::Strained => 1,
            HospitalCapacity::Overwhelmed => 2,
        }
    }
}

impl Ordinal for IcuCapacity {
    fn ordinal(self) -> u8 {
        match self {
            IcuCapacity::Adequate => 0,
            IcuCapacity::Limited => 1,
            IcuCapacity::Overloaded => 2,
        }
    }
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Moderate, Level::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Moderate => "Moderate",
            Level::High => "High",
        }
    }
}

impl HospitalCapacity {
    pub const ALL: [HospitalCapacity; 3] = [
        HospitalCapacity::Adequate,
        HospitalCapacity::Strained,
        HospitalCapacity::Overwhelmed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HospitalCapacity::Adequate => "Adequate",
            HospitalCapacity::Strained => "Strained",
            HospitalCapacity::Overwhelmed => "Overwhelmed",
        }
    }
}

impl IcuCapacity {
    pub const ALL: [IcuCapacity; 3] = [
        IcuCapacity::Adequate,
        IcuCapacity::Limited,
        IcuCapacity::Overloaded,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IcuCapacity::Adequate => "Adequate",
            IcuCapacity::Limited => "Limited",
            IcuCapacity::Overloaded => "Overloaded",
        }
    }
}

// Category names are matched case-insensitively so both the display form ("Moderate") and
// the config form ("moderate") are accepted.

impl FromStr for Level {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Level::Low),
            "moderate" => Ok(Level::Moderate),
            "high" => Ok(Level::High),
            _ => Err(InvalidInput::UnknownCategory {
                category: "level",
                value: s.to_string(),
                expected: "low|moderate|high",
            }),
        }
    }
}

impl FromStr for HospitalCapacity {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adequate" => Ok(HospitalCapacity::Adequate),
            "strained" => Ok(HospitalCapacity::Strained),
            "overwhelmed" => Ok(HospitalCapacity::Overwhelmed),
            _ => Err(InvalidInput::UnknownCategory {
                category: "hospital capacity",
                value: s.to_string(),
                expected: "adequate|strained|overwhelmed",
            }),
        }
    }
}

impl FromStr for IcuCapacity {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adequate" => Ok(IcuCapacity::Adequate),
            "limited" => Ok(IcuCapacity::Limited),
            "overloaded" => Ok(IcuCapacity::Overloaded),
            _ => Err(InvalidInput::UnknownCategory {
                category: "ICU capacity",
                value: s.to_string(),
                expected: "adequate|limited|overloaded",
            }),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HospitalCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for IcuCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs of the Flurona (influenza + COVID-19) model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluronaInputs {
    /// Degrees Celsius, `[-10, 45]`.
    pub temperature_c: f64,
    /// Relative humidity in percent, `[0, 100]`.
    pub humidity_pct: f64,
    /// Influenza cases per 100k, `[0, 1000]`.
    pub flu_incidence: f64,
    /// COVID-19 cases per 100k, `[0, 2000]`.
    pub covid_incidence: f64,
    pub population_density: Level,
    pub mobility: Level,
    /// Percent, `[0, 100]`.
    pub flu_vaccination_pct: f64,
    /// Percent, `[0, 100]`.
    pub covid_vaccination_pct: f64,
    pub hospital_capacity: HospitalCapacity,
}

impl Default for FluronaInputs {
    fn default() -> Self {
        Self {
            temperature_c: 15.0,
            humidity_pct: 60.0,
            flu_incidence: 100.0,
            covid_incidence: 150.0,
            population_density: Level::Low,
            mobility: Level::Low,
            flu_vaccination_pct: 40.0,
            covid_vaccination_pct: 50.0,
            hospital_capacity: HospitalCapacity::Adequate,
        }
    }
}

/// Inputs of the bacterial / AMR model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BacterialInputs {
    /// Degrees Celsius, `[0, 45]`.
    pub temperature_c: f64,
    /// Relative humidity in percent, `[0, 100]`.
    pub humidity_pct: f64,
    pub antibiotic_usage: Level,
    pub icu_capacity: IcuCapacity,
    pub animal_contact: Level,
}

impl Default for BacterialInputs {
    fn default() -> Self {
        Self {
            temperature_c: 25.0,
            humidity_pct: 60.0,
            antibiotic_usage: Level::Low,
            icu_capacity: IcuCapacity::Adequate,
            animal_contact: Level::Low,
        }
    }
}

/// A named set of inputs for one evaluation. The two models are uncoupled; a missing model is
/// simply not evaluated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub flurona: Option<FluronaInputs>,
    pub bacterial: Option<BacterialInputs>,
}
