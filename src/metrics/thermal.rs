//! Thermal Perception
//!
//! Scores how the air feels rather than what the thermometer says. Warm air
//! (>= 20 °C) is judged by the heat index; cooler air by wind chill, which only
//! kicks in below 10 °C with a noticeable breeze. The perceived temperature is
//! compared against the zone's comfort temperature and blended with humidity,
//! wind, and heat-stress terms, then the weather condition penalty is taken off.
//!
//! **Score composition** (before penalty):
//!   - 30% temperature comfort: distance of perceived temperature from comfort
//!   - 30% humidity comfort: distance from 50% RH
//!   - 20% wind comfort: calm up to 3 m/s
//!   - 20% heat-stress comfort: always driven by the heat index
//!
//! The final score is clamped to [10, 100].

use super::weather_condition::weather_penalty;
use serde::{Deserialize, Serialize};

/// Below this the heat index is not applicable (°C)
const HEAT_INDEX_MIN_TEMP: f64 = 20.0;

/// Wind chill applies below this temperature (°C) ...
const WIND_CHILL_MAX_TEMP: f64 = 10.0;

/// ... and above this wind speed (m/s)
const WIND_CHILL_MIN_WIND: f64 = 1.3;

const THERMAL_FLOOR: f64 = 10.0;
const THERMAL_CEILING: f64 = 100.0;

// Heat index polynomial (Celsius form of the Steadman/Rothfusz regression)
const HI_C1: f64 = -8.78469475556;
const HI_C2: f64 = 1.61139411;
const HI_C3: f64 = 2.33854883889;
const HI_C4: f64 = -0.14611605;
const HI_C5: f64 = -0.012308094;
const HI_C6: f64 = -0.0164248277778;
const HI_C7: f64 = 0.002211732;
const HI_C8: f64 = 0.00072546;
const HI_C9: f64 = -0.000003582;

/// Which perceived-temperature model produced the effective temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalModel {
    /// Temperature >= 20 °C
    HeatIndex,
    /// Temperature < 10 °C and wind > 1.3 m/s
    WindChill,
    /// Neither applies, air temperature used as-is
    AirTemperature,
}

/// Thermal sub-score and the intermediate values behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalResult {
    /// Clamped thermal sub-score (10-100)
    pub score: f64,
    pub heat_index: f64,
    pub wind_chill: f64,
    pub effective_temp: f64,
    pub model: ThermalModel,
    pub weather_penalty: f64,
    pub temp_comfort: f64,
    pub humidity_comfort: f64,
    pub wind_comfort: f64,
    pub heat_comfort: f64,
}

/// Heat index (°C) from air temperature (°C) and relative humidity (%)
///
/// Returns the air temperature unchanged below 20 °C.
pub fn heat_index(temp_c: f64, humidity: f64) -> f64 {
    if temp_c < HEAT_INDEX_MIN_TEMP {
        return temp_c;
    }

    let t = temp_c;
    let rh = humidity;
    HI_C1
        + HI_C2 * t
        + HI_C3 * rh
        + HI_C4 * t * rh
        + HI_C5 * t * t
        + HI_C6 * rh * rh
        + HI_C7 * t * t * rh
        + HI_C8 * t * rh * rh
        + HI_C9 * t * t * rh * rh
}

/// Wind chill (°C) from air temperature (°C) and wind speed (m/s)
///
/// Returns the air temperature unchanged unless it is below 10 °C and wind
/// exceeds 1.3 m/s. The guard also keeps the fractional power away from
/// non-positive wind speeds.
pub fn wind_chill(temp_c: f64, wind_ms: f64) -> f64 {
    if !wind_chill_applies(temp_c, wind_ms) {
        return temp_c;
    }

    let wind_kmh = wind_ms * 3.6;
    let wind_term = libm::pow(wind_kmh, 0.16);
    13.12 + 0.6215 * temp_c - 11.37 * wind_term + 0.3965 * temp_c * wind_term
}

fn wind_chill_applies(temp_c: f64, wind_ms: f64) -> bool {
    temp_c < WIND_CHILL_MAX_TEMP && wind_ms > WIND_CHILL_MIN_WIND
}

/// Linear comfort decay: 100 at zero deviation, losing `slope` per unit, never below `100 - max_loss`
fn deviation_comfort(deviation: f64, slope: f64, max_loss: f64) -> f64 {
    100.0 - (deviation.abs() * slope).min(max_loss)
}

/// Comfort of a quantity that is fine up to `threshold` and degrades past it, floored at 20
fn excess_comfort(value: f64, threshold: f64) -> f64 {
    if value <= threshold {
        100.0
    } else {
        (100.0 - (value - threshold) * 10.0).max(20.0)
    }
}

/// Calculate the thermal sub-score
///
/// # Arguments
/// * `temp_c` - Air temperature (°C)
/// * `humidity` - Relative humidity (%)
/// * `wind_ms` - Wind speed (m/s)
/// * `comfort_temperature` - Zone/season baseline (°C)
/// * `weather_code` - Weather condition code
pub fn calculate_thermal(
    temp_c: f64,
    humidity: f64,
    wind_ms: f64,
    comfort_temperature: f64,
    weather_code: i32,
) -> ThermalResult {
    let hi = heat_index(temp_c, humidity);
    let wc = wind_chill(temp_c, wind_ms);

    let (effective_temp, model) = if temp_c >= HEAT_INDEX_MIN_TEMP {
        (hi, ThermalModel::HeatIndex)
    } else if wind_chill_applies(temp_c, wind_ms) {
        (wc, ThermalModel::WindChill)
    } else {
        (temp_c, ThermalModel::AirTemperature)
    };

    let temp_comfort = deviation_comfort(effective_temp - comfort_temperature, 4.0, 90.0);
    let humidity_comfort = deviation_comfort(humidity - 50.0, 1.6, 80.0);
    let wind_comfort = excess_comfort(wind_ms, 3.0);
    // Heat stress is judged on the heat index even when wind chill set the effective temperature
    let heat_comfort = excess_comfort(hi, 27.0);

    let penalty = weather_penalty(weather_code);
    let blended = 0.3 * temp_comfort + 0.3 * humidity_comfort + 0.2 * wind_comfort + 0.2 * heat_comfort;

    ThermalResult {
        score: (blended - penalty).clamp(THERMAL_FLOOR, THERMAL_CEILING),
        heat_index: hi,
        wind_chill: wc,
        effective_temp,
        model,
        weather_penalty: penalty,
        temp_comfort,
        humidity_comfort,
        wind_comfort,
        heat_comfort,
    }
}
