//! Pure risk evaluation (no IO).
//!
//! Input: validated model inputs, constructed elsewhere.
//! Output: scores + levels, and for whole scenarios assessments + verdict + summary data.

#![forbid(unsafe_code)]

pub mod bacterial;
pub mod error;
pub mod flurona;
pub mod label;
pub mod model;
pub mod policy;
pub mod report;
pub mod validate;

mod engine;
mod fingerprint;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use bacterial::{
    BacterialResult, IcuAmplification, compute_bacterial_risk, try_compute_bacterial_risk,
};
pub use engine::evaluate;
pub use error::InvalidInput;
pub use fingerprint::fingerprint_for_scenario;
pub use flurona::{FluronaResult, compute_flurona_risk, try_compute_flurona_risk};
pub use label::{RiskScore, label};
pub use model::{
    BacterialInputs, FluronaInputs, HospitalCapacity, IcuCapacity, Level, Ordinal, Scenario,
};
