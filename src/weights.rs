//! Dynamic Weighting
//!
//! Shifts emphasis between the four sub-scores according to current
//! conditions: temperature extremes and strong wind raise the thermal weight,
//! heavy PM2.5 raises the air weight, and a very high UV index raises the UV
//! weight. Weights are floored and normalized to sum to 1.

use serde::{Deserialize, Serialize};

/// Minimum weight before normalization
const WEIGHT_FLOOR: f64 = 0.05;

/// Normalized weights for the four sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSet {
    pub heat: f64,
    pub air: f64,
    pub uv: f64,
    pub press: f64,
}

impl WeightSet {
    pub fn sum(&self) -> f64 {
        self.heat + self.air + self.uv + self.press
    }

    /// Weighted sum of the four sub-scores, in heat/air/uv/press order
    pub fn apply(&self, heat: f64, air: f64, uv: f64, press: f64) -> f64 {
        self.heat * heat + self.air * air + self.uv * uv + self.press * press
    }
}

/// Compute condition-dependent weights
///
/// # Arguments
/// * `temp_c` - Air temperature (°C)
/// * `pm2_5` - PM2.5 concentration (µg/m³)
/// * `uv_index` - UV index
/// * `wind_ms` - Wind speed (m/s)
///
/// # Returns
/// Positive weights summing to 1.0
pub fn calculate_weights(temp_c: f64, pm2_5: f64, uv_index: f64, wind_ms: f64) -> WeightSet {
    let mut heat = if temp_c > 30.0 {
        0.5
    } else if temp_c < 15.0 {
        0.6
    } else {
        0.4
    };

    if wind_ms > 8.0 {
        heat += 0.05;
    }
    if wind_ms > 12.0 {
        heat += 0.05;
    }

    let air = if pm2_5 > 35.0 { 0.5 } else { 0.4 };
    let uv = if uv_index > 8.0 { 0.2 } else { 0.1 };
    let press = 0.1;

    let [heat, air, uv, press] = [heat, air, uv, press].map(|w: f64| w.max(WEIGHT_FLOOR));
    let total = heat + air + uv + press;

    WeightSet {
        heat: heat / total,
        air: air / total,
        uv: uv / total,
        press: press / total,
    }
}
