//! Unit Normalization
//!
//! Converts temperature and wind speed into °C and m/s. No other quantity is
//! unit-converted: pressure, humidity, UV and pollutants are taken to be in
//! their canonical units regardless of the selector.

use crate::data::UnitSystem;
use serde::{Deserialize, Serialize};

/// mph per m/s
const MPH_PER_MS: f64 = 2.237;

/// Kelvin offset of 0 °C
const KELVIN_OFFSET: f64 = 273.15;

/// Temperature and wind speed in canonical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedConditions {
    pub temp_c: f64,
    pub wind_ms: f64,
}

/// Normalize temperature to °C and wind speed to m/s
///
/// # Arguments
/// * `temperature` - °C (metric), °F (imperial) or K (standard)
/// * `wind_speed` - m/s (metric, standard) or mph (imperial)
/// * `units` - Unit system the two values are expressed in
pub fn normalize_units(temperature: f64, wind_speed: f64, units: UnitSystem) -> NormalizedConditions {
    match units {
        UnitSystem::Metric => NormalizedConditions {
            temp_c: temperature,
            wind_ms: wind_speed,
        },
        UnitSystem::Imperial => NormalizedConditions {
            temp_c: (temperature - 32.0) * 5.0 / 9.0,
            wind_ms: wind_speed / MPH_PER_MS,
        },
        UnitSystem::Standard => NormalizedConditions {
            temp_c: temperature - KELVIN_OFFSET,
            wind_ms: wind_speed,
        },
    }
}
