//! UV exposure sub-score: a plain step function on the UV index, no interpolation.

use crate::utils::lookup::BreakpointTable;

/// Score the UV index against the profile's step table
///
/// Default steps: <=2 → 100, <=5 → 85, <=7 → 70, <=10 → 55, else 40.
pub fn calculate_uv(uv_index: f64, steps: &BreakpointTable) -> f64 {
    steps.score(uv_index)
}
