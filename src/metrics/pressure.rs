//! Barometric Pressure
//!
//! Scores the deviation from standard sea-level pressure. Small deviations
//! are scored in steps; past the last step the score decays linearly down to
//! a floor.

use crate::profile::PressureScale;
use crate::utils::lookup::first_match;
use tracing::trace;

/// Calculate the pressure sub-score
///
/// Default scale: deviation <=5 → 100, <=10 → 90, <=15 → 80, <=20 → 70,
/// <=25 → 60, beyond that `max(40, 100 - 2 × deviation)`.
pub fn calculate_pressure(pressure_hpa: f64, scale: &PressureScale) -> f64 {
    let deviation = (pressure_hpa - scale.reference_hpa).abs();
    let tail = (100.0 - deviation * scale.decay_per_hpa).max(scale.floor);
    let score = first_match(&scale.steps, deviation, tail);
    trace!("pressure deviation {:.2} hPa -> {}", deviation, score);
    score
}
