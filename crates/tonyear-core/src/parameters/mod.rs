//! Published parameter sets
//!
//! Atmospheric impulse-response parameters from the carbon-cycle literature. The tables are
//! compile-time constants and never change after definition.

mod irf_curves;

pub use irf_curves::{IrfCurve, ParameterSet, IPCC_2000, IPCC_2007, JOOS_2013};
