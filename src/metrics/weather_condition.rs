//! Weather Condition Penalty
//!
//! Maps a weather condition code (OpenWeatherMap-style grouping) to a
//! discomfort penalty in [0, 25] subtracted from the thermal sub-score.
//!
//! Within each group, specific codes are listed before the group's catch-all
//! range; the shared first-match lookup takes care of precedence. Codes that
//! fall in no group carry no penalty.

use crate::utils::lookup::{first_match, Bound};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Matcher for one row of the penalty table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeRule {
    /// Any of these exact codes
    AnyOf(&'static [i32]),
    /// Inclusive range
    Range(i32, i32),
}

impl Bound<i32> for CodeRule {
    fn admits(&self, code: i32) -> bool {
        match *self {
            CodeRule::AnyOf(codes) => codes.contains(&code),
            CodeRule::Range(lo, hi) => (lo..=hi).contains(&code),
        }
    }
}

/// Largest penalty any documented code carries (781, tornado)
pub const MAX_WEATHER_PENALTY: f64 = 25.0;

const NO_PENALTY: f64 = 0.0;

/// Ordered penalty table
pub const WEATHER_PENALTIES: &[(CodeRule, f64)] = &[
    // Thunderstorm
    (CodeRule::AnyOf(&[212, 221, 232]), 20.0),
    (CodeRule::Range(200, 299), 15.0),
    // Drizzle
    (CodeRule::Range(300, 399), 6.0),
    // Rain
    (CodeRule::AnyOf(&[511]), 20.0),
    (CodeRule::AnyOf(&[500, 520]), 8.0),
    (CodeRule::AnyOf(&[502, 503, 504, 522]), 16.0),
    (CodeRule::AnyOf(&[501, 521, 531]), 12.0),
    (CodeRule::Range(500, 599), 12.0),
    // Snow
    (CodeRule::AnyOf(&[600, 615, 620]), 12.0),
    (CodeRule::AnyOf(&[601, 612, 621]), 16.0),
    (CodeRule::Range(600, 699), 20.0),
    // Atmosphere
    (CodeRule::AnyOf(&[781]), MAX_WEATHER_PENALTY),
    (CodeRule::AnyOf(&[701, 711, 721, 741]), 10.0),
    (CodeRule::AnyOf(&[731, 751, 761, 762, 771]), 18.0),
    (CodeRule::Range(700, 799), 12.0),
    // Clear
    (CodeRule::AnyOf(&[800]), NO_PENALTY),
    // Clouds
    (CodeRule::AnyOf(&[801]), 1.0),
    (CodeRule::AnyOf(&[802]), 2.0),
    (CodeRule::AnyOf(&[803]), 4.0),
    (CodeRule::AnyOf(&[804]), 6.0),
];

/// Penalty for a weather condition code (0 for unrecognized codes)
pub fn weather_penalty(code: i32) -> f64 {
    let penalty = first_match(WEATHER_PENALTIES, code, NO_PENALTY);
    trace!("weather code {} -> penalty {}", code, penalty);
    penalty
}

/// Condition group a code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
    Unknown,
}

impl WeatherCategory {
    pub fn from_code(code: i32) -> Self {
        match code {
            200..=299 => WeatherCategory::Thunderstorm,
            300..=399 => WeatherCategory::Drizzle,
            500..=599 => WeatherCategory::Rain,
            600..=699 => WeatherCategory::Snow,
            700..=799 => WeatherCategory::Atmosphere,
            800 => WeatherCategory::Clear,
            801..=804 => WeatherCategory::Clouds,
            _ => WeatherCategory::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WeatherCategory::Thunderstorm => "Thunderstorm",
            WeatherCategory::Drizzle => "Drizzle",
            WeatherCategory::Rain => "Rain",
            WeatherCategory::Snow => "Snow",
            WeatherCategory::Atmosphere => "Atmosphere",
            WeatherCategory::Clear => "Clear",
            WeatherCategory::Clouds => "Clouds",
            WeatherCategory::Unknown => "Unknown",
        }
    }
}
