//! Numeric helpers shared by the accounting methods.

pub mod integrate;
