//! Utility modules shared across the pipeline
//!
//! - Units: temperature/wind normalization
//! - Lookup: first-match-wins breakpoint tables

pub mod units;
pub mod lookup;

pub use units::{normalize_units, NormalizedConditions};
pub use lookup::{first_match, Bound, BreakpointTable};
