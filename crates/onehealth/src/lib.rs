//! One Health risk engine.
//!
//! Two pure entry points score a single set of inputs:
//!
//! ```
//! use onehealth::{BacterialInputs, IcuCapacity, Level, RiskLevel, compute_bacterial_risk};
//!
//! let inputs = BacterialInputs {
//!     antibiotic_usage: Level::High,
//!     icu_capacity: IcuCapacity::Overloaded,
//!     ..BacterialInputs::default()
//! };
//! let result = compute_bacterial_risk(&inputs);
//! assert_eq!(result.icu_amplification.factor, 4);
//! assert_eq!(result.amr_risk.level, RiskLevel::High);
//! ```
//!
//! `try_compute_*` validate ranges first; [`evaluate`] scores a whole [`Scenario`].

#![forbid(unsafe_code)]

pub use onehealth_domain::policy::{EffectiveConfig, ModelToggles};
pub use onehealth_domain::report::DomainReport;
pub use onehealth_domain::{
    BacterialInputs, BacterialResult, FluronaInputs, FluronaResult, HospitalCapacity,
    IcuAmplification, IcuCapacity, InvalidInput, Level, Ordinal, RiskScore, Scenario,
    compute_bacterial_risk, compute_flurona_risk, evaluate, label, try_compute_bacterial_risk,
    try_compute_flurona_risk,
};
pub use onehealth_types::RiskLevel;
