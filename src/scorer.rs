//! CEI Scorer - Main coordinator for comfort scoring
//!
//! Runs the full pipeline for one sample:
//!   1. Normalize temperature and wind to °C and m/s
//!   2. Resolve climate context (zone, season) and dynamic weights
//!   3. Score thermal, air, UV and pressure independently
//!   4. Weighted sum × seasonal factor, clamped to [0, 100]
//!   5. Classify the level, then round for reporting
//!
//! Aggregation always works on unrounded sub-scores; rounding only happens
//! when the result is assembled. Every call is independent, so batches are
//! scored in parallel with Rayon.

use crate::climate::ClimateContext;
use crate::data::{UnitSystem, WeatherSample};
use crate::error::CeiError;
use crate::level::ComfortLevel;
use crate::metrics::*;
use crate::profile::ScoringProfile;
use crate::utils::units::{normalize_units, NormalizedConditions};
use crate::weights::{calculate_weights, WeightSet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::debug;

/// Rounded sub-scores as reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub heat_score: u8,
    pub air_score: u8,
    pub uv_score: u8,
    pub press_score: u8,
}

/// CEI result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CeiResult {
    /// Rounded comfort index (0-100)
    pub cei: u8,
    pub level: ComfortLevel,
    pub components: ComponentScores,
}

/// Every intermediate value behind a [`CeiResult`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CeiBreakdown {
    pub units: UnitSystem,
    pub conditions: NormalizedConditions,
    pub climate: ClimateContext,
    pub weights: WeightSet,
    pub weather_code: i32,
    pub weather_category: WeatherCategory,
    pub thermal: ThermalResult,
    pub air_quality: AirQualityResult,
    pub uv_score: f64,
    pub pressure_score: f64,
    /// Weighted sum before the seasonal factor
    pub weighted_score: f64,
    /// After the seasonal factor, clamped to [0, 100]
    pub adjusted_score: f64,
    pub result: CeiResult,
}

/// One loosely-typed scoring request, as accepted over JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CeiRequest {
    pub unit: String,
    pub sample: Value,
    pub latitude: f64,
    pub month: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_id: Option<i32>,
}

impl CeiRequest {
    /// Parse one request or an array of requests
    ///
    /// Each array element is parsed on its own, so a malformed element does
    /// not take the rest of the array down with it.
    pub fn parse_many(value: Value) -> Vec<Result<CeiRequest, serde_json::Error>> {
        match value {
            Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
            single => vec![serde_json::from_value(single)],
        }
    }
}

/// Main CEI scorer
#[derive(Debug, Clone, Default)]
pub struct CeiScorer {
    profile: ScoringProfile,
}

fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

impl CeiScorer {
    /// Scorer using the default threshold tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer using custom threshold tables
    pub fn with_profile(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Score a validated sample
    ///
    /// # Arguments
    /// * `units` - How `sample.temp` and `sample.wind_speed` are expressed
    /// * `sample` - Weather and air quality observation
    /// * `latitude` - Degrees, sign ignored, not range-checked
    /// * `month` - 1-12; anything else gets no seasonal adjustment
    /// * `weather_code` - Overrides `sample.weather_id`; clear sky if both absent
    pub fn score(
        &self,
        units: UnitSystem,
        sample: &WeatherSample,
        latitude: f64,
        month: i32,
        weather_code: Option<i32>,
    ) -> CeiResult {
        self.score_detailed(units, sample, latitude, month, weather_code)
            .result
    }

    /// Score a validated sample and keep every intermediate value
    pub fn score_detailed(
        &self,
        units: UnitSystem,
        sample: &WeatherSample,
        latitude: f64,
        month: i32,
        weather_code: Option<i32>,
    ) -> CeiBreakdown {
        let conditions = normalize_units(sample.temp, sample.wind_speed, units);
        let climate = ClimateContext::resolve(latitude, month);
        let weights = calculate_weights(conditions.temp_c, sample.pm2_5, sample.uvi, conditions.wind_ms);
        debug!(?units, ?conditions, ?climate, ?weights, "resolved scoring context");

        let weather_code = sample.resolve_weather_code(weather_code);
        let thermal = calculate_thermal(
            conditions.temp_c,
            sample.humidity,
            conditions.wind_ms,
            climate.comfort_temperature,
            weather_code,
        );
        let air_quality = calculate_air_quality(sample, &self.profile.air_quality);
        let uv_score = calculate_uv(sample.uvi, &self.profile.uv);
        let pressure_score = calculate_pressure(sample.pressure, &self.profile.pressure);
        debug!(
            heat = thermal.score,
            air = air_quality.score,
            uv = uv_score,
            press = pressure_score,
            model = ?thermal.model,
            governing = ?air_quality.governing,
            "component scores"
        );

        let weighted_score = weights.apply(thermal.score, air_quality.score, uv_score, pressure_score);
        let adjusted_score = (weighted_score * climate.seasonal_factor).clamp(0.0, 100.0);
        let level = ComfortLevel::classify(adjusted_score);

        let result = CeiResult {
            cei: round_score(adjusted_score),
            level,
            components: ComponentScores {
                heat_score: round_score(thermal.score),
                air_score: round_score(air_quality.score),
                uv_score: round_score(uv_score),
                press_score: round_score(pressure_score),
            },
        };
        debug!(weighted_score, adjusted_score, cei = result.cei, level = level.label(), "aggregated");

        CeiBreakdown {
            units,
            conditions,
            climate,
            weights,
            weather_code,
            weather_category: WeatherCategory::from_code(weather_code),
            thermal,
            air_quality,
            uv_score,
            pressure_score,
            weighted_score,
            adjusted_score,
            result,
        }
    }

    /// Validate loosely-typed input, then score it
    ///
    /// The unit selector is checked first, then the sample fields in order.
    ///
    /// # Errors
    /// `CeiError::InvalidUnit` or `CeiError::MissingField`; no partial result
    pub fn score_json(
        &self,
        unit: &str,
        record: &Value,
        latitude: f64,
        month: i32,
        weather_code: Option<i32>,
    ) -> Result<CeiResult, CeiError> {
        let units: UnitSystem = unit.parse()?;
        let sample = WeatherSample::from_json(record)?;
        Ok(self.score(units, &sample, latitude, month, weather_code))
    }

    /// Score many requests in parallel
    ///
    /// Output order matches input order; each request succeeds or fails on its own.
    pub fn score_batch(&self, requests: &[CeiRequest]) -> Vec<Result<CeiResult, CeiError>> {
        debug!(requests = requests.len(), "scoring batch");
        requests
            .par_iter()
            .map(|req| self.score_json(&req.unit, &req.sample, req.latitude, req.month, req.weather_id))
            .collect()
    }
}

/// Compute the comfort index with the default tables
///
/// # Example
/// ```
/// use comfort_index_rust::{compute_cei, ComfortLevel};
/// use serde_json::json;
///
/// let sample = json!({
///     "temp": 22.0, "humidity": 50, "wind_speed": 2.0, "pressure": 1013,
///     "uvi": 1.0, "pm2_5": 3, "pm10": 6, "o3": 50, "co": 150, "no2": 8, "so2": 5
/// });
/// let result = compute_cei("metric", &sample, 45.0, 4, None).unwrap();
/// assert_eq!(result.level, ComfortLevel::Excellent);
/// ```
pub fn compute_cei(
    unit: &str,
    record: &Value,
    latitude: f64,
    month: i32,
    weather_code: Option<i32>,
) -> Result<CeiResult, CeiError> {
    default_scorer().score_json(unit, record, latitude, month, weather_code)
}

/// Shared scorer over the default profile, built on first use
fn default_scorer() -> &'static CeiScorer {
    static DEFAULT_SCORER: OnceLock<CeiScorer> = OnceLock::new();
    DEFAULT_SCORER.get_or_init(CeiScorer::new)
}
