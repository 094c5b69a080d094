//! Comfort Environment Index (CEI)
//!
//! Turns one weather + air quality observation into a 0-100 comfort score,
//! four sub-scores (thermal, air, UV, pressure) and a comfort level.
//!
//! The scoring core is pure and deterministic: no I/O, no shared state, the
//! same input always gives the same output. Modules:
//! - `data`: input sample and unit selector
//! - `climate`: latitude/month climate context
//! - `weights`: condition-dependent sub-score weights
//! - `metrics/`: the four sub-scorers plus the weather condition penalty
//! - `level`: six-tier comfort classification
//! - `profile`: tunable threshold tables
//! - `scorer`: pipeline coordinator and entry points
//!
//! Known looseness in the input contract: only temperature and wind speed
//! honor the unit selector, latitude sign is ignored, and months outside 1-12
//! get no seasonal adjustment.

pub mod error;
pub mod utils;
pub mod data;
pub mod climate;
pub mod weights;
pub mod metrics;
pub mod level;
pub mod profile;
pub mod scorer;

// Re-export commonly used types
pub use error::{CeiError, ProfileError};
pub use data::{UnitSystem, WeatherSample, DEFAULT_WEATHER_CODE};
pub use climate::{ClimateContext, ClimateZone, Season};
pub use weights::WeightSet;
pub use level::ComfortLevel;
pub use profile::ScoringProfile;
pub use scorer::{compute_cei, CeiBreakdown, CeiRequest, CeiResult, CeiScorer, ComponentScores};
