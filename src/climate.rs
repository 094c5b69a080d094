//! Climate Context
//!
//! Coarse latitude-based climate zones and month-based seasons. The zone is
//! classified once and feeds both the seasonal factor and the baseline comfort
//! temperature.
//!
//! Latitude sign is ignored, so both hemispheres are treated alike, and month
//! semantics are northern-hemisphere (June-August is summer). Neither latitude
//! nor month is range-checked: a month outside 1-12 simply gets no seasonal
//! adjustment.

use serde::{Deserialize, Serialize};

/// |latitude| below this is tropical
const TROPIC_LATITUDE: f64 = 23.5;

/// |latitude| above this is polar
const POLAR_CIRCLE_LATITUDE: f64 = 66.5;

/// Latitude band climate zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateZone {
    /// |lat| < 23.5
    Tropical,
    /// 23.5 <= |lat| <= 66.5
    Temperate,
    /// |lat| > 66.5
    Polar,
}

impl ClimateZone {
    /// Classify a latitude in degrees (sign ignored)
    pub fn from_latitude(latitude: f64) -> Self {
        let magnitude = latitude.abs();
        if magnitude < TROPIC_LATITUDE {
            ClimateZone::Tropical
        } else if magnitude > POLAR_CIRCLE_LATITUDE {
            ClimateZone::Polar
        } else {
            ClimateZone::Temperate
        }
    }

    /// Baseline comfort temperature (°C) before seasonal adjustment
    pub fn base_comfort_temperature(&self) -> f64 {
        match self {
            ClimateZone::Tropical => 25.0,
            ClimateZone::Temperate => 22.0,
            ClimateZone::Polar => 20.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClimateZone::Tropical => "Tropical",
            ClimateZone::Temperate => "Temperate",
            ClimateZone::Polar => "Polar",
        }
    }
}

/// Season implied by the month number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// June, July, August
    Summer,
    /// December, January, February
    Winter,
    /// Every other month, including out-of-range values
    Other,
}

impl Season {
    pub fn from_month(month: i32) -> Self {
        match month {
            6..=8 => Season::Summer,
            12 | 1 | 2 => Season::Winter,
            _ => Season::Other,
        }
    }

    /// Shift applied to the zone's baseline comfort temperature (°C)
    pub fn comfort_offset(&self) -> f64 {
        match self {
            Season::Summer => 1.0,
            Season::Winter => -1.0,
            Season::Other => 0.0,
        }
    }
}

/// Zone, season and the values derived from them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateContext {
    pub zone: ClimateZone,
    pub season: Season,
    /// Multiplier applied to the aggregate score
    pub seasonal_factor: f64,
    /// Baseline comfort temperature (°C)
    pub comfort_temperature: f64,
}

impl ClimateContext {
    pub fn resolve(latitude: f64, month: i32) -> Self {
        let zone = ClimateZone::from_latitude(latitude);
        let season = Season::from_month(month);

        Self {
            zone,
            season,
            seasonal_factor: seasonal_factor(zone, season),
            comfort_temperature: zone.base_comfort_temperature() + season.comfort_offset(),
        }
    }
}

/// Tropical summers score higher and polar summers lower; winters the reverse.
/// Temperate zones are never adjusted.
pub fn seasonal_factor(zone: ClimateZone, season: Season) -> f64 {
    match (zone, season) {
        (ClimateZone::Tropical, Season::Summer) | (ClimateZone::Polar, Season::Winter) => 1.1,
        (ClimateZone::Tropical, Season::Winter) | (ClimateZone::Polar, Season::Summer) => 0.9,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zone_thresholds() {
        assert_eq!(ClimateZone::from_latitude(0.0), ClimateZone::Tropical);
        assert_eq!(ClimateZone::from_latitude(23.49), ClimateZone::Tropical);
        assert_eq!(ClimateZone::from_latitude(23.5), ClimateZone::Temperate);
        assert_eq!(ClimateZone::from_latitude(66.5), ClimateZone::Temperate);
        assert_eq!(ClimateZone::from_latitude(66.51), ClimateZone::Polar);
    }

    #[test]
    fn test_hemisphere_is_ignored() {
        assert_eq!(ClimateZone::from_latitude(-40.0), ClimateZone::from_latitude(40.0));
        assert_eq!(ClimateZone::from_latitude(-80.0), ClimateZone::Polar);
        assert_eq!(ClimateContext::resolve(-10.0, 7), ClimateContext::resolve(10.0, 7));
    }

    #[test]
    fn test_out_of_range_latitude_is_processed() {
        assert_eq!(ClimateZone::from_latitude(120.0), ClimateZone::Polar);
    }

    #[test]
    fn test_seasons() {
        assert_eq!(Season::from_month(7), Season::Summer);
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(4), Season::Other);
        assert_eq!(Season::from_month(0), Season::Other);
        assert_eq!(Season::from_month(13), Season::Other);
        assert_eq!(Season::from_month(-1), Season::Other);
    }

    #[test]
    fn test_seasonal_factor_table() {
        let cases = [
            (10.0, 7, 1.1),
            (10.0, 1, 0.9),
            (10.0, 4, 1.0),
            (75.0, 7, 0.9),
            (75.0, 1, 1.1),
            (45.0, 7, 1.0),
            (45.0, 1, 1.0),
        ];
        for (lat, month, expected) in cases {
            assert_relative_eq!(ClimateContext::resolve(lat, month).seasonal_factor, expected);
        }
    }

    #[test]
    fn test_comfort_temperature() {
        assert_relative_eq!(ClimateContext::resolve(10.0, 7).comfort_temperature, 26.0);
        assert_relative_eq!(ClimateContext::resolve(22.3, 1).comfort_temperature, 24.0);
        assert_relative_eq!(ClimateContext::resolve(45.0, 4).comfort_temperature, 22.0);
        // Seasonal shift applies to every zone, temperate included
        assert_relative_eq!(ClimateContext::resolve(45.0, 1).comfort_temperature, 21.0);
        assert_relative_eq!(ClimateContext::resolve(80.0, 8).comfort_temperature, 21.0);
    }
}
