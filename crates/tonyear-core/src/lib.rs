//! Ton-year accounting for temporary carbon storage
//!
//! This crate provides the numeric engine used to compare temporary storage (or delayed
//! emission) of CO2 against a baseline atmospheric trajectory:
//!
//! - [`irf`]: atmospheric impulse-response curves from published parameter sets
//! - [`discount`]: geometric discounting of trajectories
//! - [`accounting`]: the Moura-Costa, IPCC and Lashof ton-year methods
//!
//! Everything here is pure computation over in-memory sequences.

pub mod accounting;
pub mod discount;
pub mod errors;
pub mod irf;
pub mod parameters;
pub mod utils;

/// Numeric type used throughout the crate
pub type FloatValue = f64;

/// A sequence of values indexed by integer year
pub type Trajectory = Vec<FloatValue>;

pub use accounting::{
    compute, compute_with, AccountingMethod, AccountingParameters, AccountingResult,
};
pub use discount::discount;
pub use errors::{TonYearError, TonYearResult};
pub use irf::{generate_irf, ImpulseResponseCurve};
pub use parameters::{IrfCurve, ParameterSet};
