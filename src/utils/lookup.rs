//! Breakpoint Lookup
//!
//! One first-match-wins scan shared by the pollutant tables, the UV and
//! pressure step tables, and the weather condition penalty table. Tables are
//! ordered `(bound, score)` pairs; the first bound that admits the key decides
//! the score, and a key no bound admits falls through to the table's fallback.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Something that can decide whether a lookup key falls inside it
pub trait Bound<K> {
    fn admits(&self, key: K) -> bool;
}

/// Numeric upper bounds are inclusive: `key <= bound`
impl Bound<f64> for f64 {
    fn admits(&self, key: f64) -> bool {
        key <= *self
    }
}

/// First-match-wins lookup over an ordered table
///
/// # Arguments
/// * `table` - Ordered `(bound, score)` pairs, scanned front to back
/// * `key` - Value being classified
/// * `fallback` - Score when no bound admits the key
///
/// # Example
/// ```
/// use comfort_index_rust::utils::lookup::first_match;
///
/// let table = [(5.0, 100.0), (15.0, 80.0)];
/// assert_eq!(first_match(&table, 5.0, 10.0), 100.0);
/// assert_eq!(first_match(&table, 12.0, 10.0), 80.0);
/// assert_eq!(first_match(&table, 99.0, 10.0), 10.0);
/// ```
pub fn first_match<K: Copy, B: Bound<K>>(table: &[(B, f64)], key: K, fallback: f64) -> f64 {
    table
        .iter()
        .find(|(bound, _)| bound.admits(key))
        .map_or(fallback, |(_, score)| *score)
}

/// Ascending upper-bound table with a floor score
///
/// Serialized as `{"breakpoints": [[bound, score], ...], "floor": f64}` so
/// scoring profiles can be edited as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTable {
    pub breakpoints: Vec<(f64, f64)>,
    pub floor: f64,
}

impl BreakpointTable {
    pub fn new(breakpoints: &[(f64, f64)], floor: f64) -> Self {
        Self {
            breakpoints: breakpoints.to_vec(),
            floor,
        }
    }

    /// Score for `value`: first bound with `value <= bound`, else the floor
    pub fn score(&self, value: f64) -> f64 {
        let score = first_match(&self.breakpoints, value, self.floor);
        trace!("breakpoint lookup: {} -> {}", value, score);
        score
    }

    /// Bounds are finite and strictly ascending, and there is at least one
    pub fn is_well_formed(&self) -> bool {
        !self.breakpoints.is_empty()
            && self.breakpoints.iter().all(|(b, s)| b.is_finite() && s.is_finite())
            && self.breakpoints.windows(2).all(|w| w[0].0 < w[1].0)
    }
}
