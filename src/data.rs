//! Input Records
//!
//! Holds the weather/air-quality sample consumed by the scorer and the unit
//! selector that says how its temperature and wind speed are expressed.
//!
//! Only temperature and wind speed are unit-dependent. Pressure (hPa),
//! humidity (%), UV index and pollutant concentrations (µg/m³) are read as-is
//! whatever the selector says.

use crate::error::CeiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Weather condition code assumed when neither the caller nor the sample supply one (clear sky)
pub const DEFAULT_WEATHER_CODE: i32 = 800;

/// Unit system of the incoming temperature and wind speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// °C and m/s
    Metric,
    /// °F and mph
    Imperial,
    /// K and m/s
    Standard,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
            UnitSystem::Standard => "standard",
        }
    }
}

impl FromStr for UnitSystem {
    type Err = CeiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            "standard" => Ok(UnitSystem::Standard),
            other => Err(CeiError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation of weather and air quality
///
/// Immutable for the duration of a computation. Field names match the JSON
/// record accepted by [`WeatherSample::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Air temperature, unit per [`UnitSystem`]
    pub temp: f64,
    /// Relative humidity (0-100)
    pub humidity: f64,
    /// Wind speed, unit per [`UnitSystem`]
    pub wind_speed: f64,
    /// Sea-level pressure (hPa)
    pub pressure: f64,
    /// UV index (>= 0)
    pub uvi: f64,
    /// PM2.5 (µg/m³)
    pub pm2_5: f64,
    /// PM10 (µg/m³)
    pub pm10: f64,
    /// Ozone (µg/m³)
    pub o3: f64,
    /// Carbon monoxide (µg/m³, converted to mg/m³ for scoring)
    pub co: f64,
    /// Nitrogen dioxide (µg/m³)
    pub no2: f64,
    /// Sulphur dioxide (µg/m³)
    pub so2: f64,
    /// Weather condition code, used only when the caller passes none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_id: Option<i32>,
}

/// Required numeric fields, in validation order
pub const REQUIRED_FIELDS: [&str; 11] = [
    "temp",
    "humidity",
    "wind_speed",
    "pressure",
    "uvi",
    "pm2_5",
    "pm10",
    "o3",
    "co",
    "no2",
    "so2",
];

impl WeatherSample {
    /// Build a sample from a loosely-typed JSON record
    ///
    /// Fails fast on the first required field (in [`REQUIRED_FIELDS`] order)
    /// that is absent or not a JSON number. `weather_id` may be written as an
    /// integer or a whole-valued float (`781.0`); anything else is ignored.
    ///
    /// # Errors
    /// `CeiError::MissingField` naming the offending field
    pub fn from_json(record: &Value) -> Result<Self, CeiError> {
        let field = |name: &'static str| -> Result<f64, CeiError> {
            record
                .get(name)
                .and_then(Value::as_f64)
                .ok_or(CeiError::MissingField(name))
        };

        let temp = field("temp")?;
        let humidity = field("humidity")?;
        let wind_speed = field("wind_speed")?;
        let pressure = field("pressure")?;
        let uvi = field("uvi")?;
        let pm2_5 = field("pm2_5")?;
        let pm10 = field("pm10")?;
        let o3 = field("o3")?;
        let co = field("co")?;
        let no2 = field("no2")?;
        let so2 = field("so2")?;

        let weather_id = record
            .get("weather_id")
            .and_then(Value::as_f64)
            .and_then(whole_code);

        Ok(Self {
            temp,
            humidity,
            wind_speed,
            pressure,
            uvi,
            pm2_5,
            pm10,
            o3,
            co,
            no2,
            so2,
            weather_id,
        })
    }

    /// Explicit code wins, then the sample's own code, then clear sky
    pub fn resolve_weather_code(&self, explicit: Option<i32>) -> i32 {
        explicit
            .or(self.weather_id)
            .unwrap_or(DEFAULT_WEATHER_CODE)
    }
}

/// Integer value of a finite, whole-valued number within `i32` range
fn whole_code(value: f64) -> Option<i32> {
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    (value.is_finite() && value.fract() == 0.0 && in_range).then(|| value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "temp": 6.0, "humidity": 46, "wind_speed": 9.85, "pressure": 1036,
            "uvi": 1.4, "pm2_5": 3, "pm10": 6, "o3": 50, "co": 150, "no2": 12, "so2": 5
        })
    }

    #[test]
    fn test_unit_system_parsing() {
        assert_eq!("metric".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!("imperial".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert_eq!("standard".parse::<UnitSystem>(), Ok(UnitSystem::Standard));
        assert_eq!(
            "Metric".parse::<UnitSystem>(),
            Err(CeiError::InvalidUnit("Metric".to_string()))
        );
        assert_eq!(UnitSystem::Imperial.to_string(), "imperial");
    }

    #[test]
    fn test_from_json_accepts_integers_and_floats() {
        let sample = WeatherSample::from_json(&record()).unwrap();
        assert_eq!(sample.humidity, 46.0);
        assert_eq!(sample.wind_speed, 9.85);
        assert_eq!(sample.weather_id, None);
    }

    #[test]
    fn test_from_json_missing_field() {
        let mut rec = record();
        rec.as_object_mut().unwrap().remove("pressure");
        assert_eq!(
            WeatherSample::from_json(&rec),
            Err(CeiError::MissingField("pressure"))
        );
    }

    #[test]
    fn test_from_json_non_numeric_field() {
        let mut rec = record();
        rec["so2"] = json!("5");
        assert_eq!(
            WeatherSample::from_json(&rec),
            Err(CeiError::MissingField("so2"))
        );
    }

    #[test]
    fn test_from_json_reports_first_missing_field() {
        let rec = json!({ "temp": 20.0 });
        assert_eq!(
            WeatherSample::from_json(&rec),
            Err(CeiError::MissingField("humidity"))
        );
    }

    #[test]
    fn test_weather_code_resolution() {
        let mut rec = record();
        let sample = WeatherSample::from_json(&rec).unwrap();
        assert_eq!(sample.resolve_weather_code(None), DEFAULT_WEATHER_CODE);
        assert_eq!(sample.resolve_weather_code(Some(500)), 500);

        rec["weather_id"] = json!(803);
        let sample = WeatherSample::from_json(&rec).unwrap();
        assert_eq!(sample.resolve_weather_code(None), 803);
        assert_eq!(sample.resolve_weather_code(Some(211)), 211);
    }

    #[test]
    fn test_weather_id_accepts_whole_floats() {
        let mut rec = record();
        rec["weather_id"] = json!(781.0);
        let sample = WeatherSample::from_json(&rec).unwrap();
        assert_eq!(sample.weather_id, Some(781));
        assert_eq!(sample.resolve_weather_code(None), 781);
    }

    #[test]
    fn test_weather_id_ignores_fractional_and_non_numeric() {
        for bad in [json!(781.5), json!("781"), json!(null), json!(1e12)] {
            let mut rec = record();
            rec["weather_id"] = bad.clone();
            let sample = WeatherSample::from_json(&rec).unwrap();
            assert_eq!(sample.weather_id, None, "weather_id {}", bad);
        }
    }
}
