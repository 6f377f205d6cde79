//! Ton-year accounting toolkit
//!
//! Re-exports the numeric engine from [`tonyear_core`] and adds the I/O around it:
//! TOML run configuration, the printed benefit report and JSON result files.

pub mod config;
pub mod errors;
pub mod output;
pub mod report;

pub use errors::{RunError, RunResult};
pub use tonyear_core::{
    compute, compute_with, discount, generate_irf, AccountingMethod, AccountingParameters,
    AccountingResult, FloatValue, ImpulseResponseCurve, IrfCurve, TonYearError, Trajectory,
};
