//! Scoring Profile
//!
//! Threshold tables for the air quality, UV and pressure sub-scores. The
//! default profile is the documented heuristic; a profile can also be loaded
//! from JSON to score against a different standard without touching code.
//!
//! Thermal coefficients, climate thresholds, weights and weather penalties are
//! not part of the profile.

use crate::error::ProfileError;
use crate::utils::lookup::BreakpointTable;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Score given to any concentration above a pollutant's last breakpoint
pub const POLLUTANT_FLOOR: f64 = 10.0;

const PM2_5_BREAKPOINTS: [(f64, f64); 5] =
    [(5.0, 100.0), (15.0, 80.0), (25.0, 60.0), (35.0, 40.0), (50.0, 20.0)];
const PM10_BREAKPOINTS: [(f64, f64); 5] =
    [(15.0, 100.0), (45.0, 80.0), (60.0, 60.0), (90.0, 40.0), (120.0, 20.0)];
const O3_BREAKPOINTS: [(f64, f64); 5] =
    [(60.0, 100.0), (100.0, 80.0), (130.0, 60.0), (160.0, 40.0), (200.0, 20.0)];
/// mg/m³
const CO_BREAKPOINTS: [(f64, f64); 5] =
    [(1.0, 100.0), (4.0, 80.0), (7.0, 60.0), (10.0, 40.0), (15.0, 20.0)];
const NO2_BREAKPOINTS: [(f64, f64); 5] =
    [(10.0, 100.0), (25.0, 80.0), (40.0, 60.0), (60.0, 40.0), (80.0, 20.0)];
const SO2_BREAKPOINTS: [(f64, f64); 5] =
    [(20.0, 100.0), (40.0, 80.0), (60.0, 60.0), (80.0, 40.0), (100.0, 20.0)];

const UV_STEPS: [(f64, f64); 4] = [(2.0, 100.0), (5.0, 85.0), (7.0, 70.0), (10.0, 55.0)];
const UV_FLOOR: f64 = 40.0;

/// Standard sea-level pressure (hPa)
pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;

/// Keyed on |pressure - reference| in hPa
const PRESSURE_STEPS: [(f64, f64); 5] =
    [(5.0, 100.0), (10.0, 90.0), (15.0, 80.0), (20.0, 70.0), (25.0, 60.0)];

/// Per-pollutant breakpoint tables
///
/// `co` is keyed in mg/m³; the scorer converts the µg/m³ sample value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityTables {
    pub pm2_5: BreakpointTable,
    pub pm10: BreakpointTable,
    pub o3: BreakpointTable,
    pub co: BreakpointTable,
    pub no2: BreakpointTable,
    pub so2: BreakpointTable,
}

impl Default for AirQualityTables {
    fn default() -> Self {
        Self {
            pm2_5: BreakpointTable::new(&PM2_5_BREAKPOINTS, POLLUTANT_FLOOR),
            pm10: BreakpointTable::new(&PM10_BREAKPOINTS, POLLUTANT_FLOOR),
            o3: BreakpointTable::new(&O3_BREAKPOINTS, POLLUTANT_FLOOR),
            co: BreakpointTable::new(&CO_BREAKPOINTS, POLLUTANT_FLOOR),
            no2: BreakpointTable::new(&NO2_BREAKPOINTS, POLLUTANT_FLOOR),
            so2: BreakpointTable::new(&SO2_BREAKPOINTS, POLLUTANT_FLOOR),
        }
    }
}

/// Pressure steps plus the linear tail used past the last step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureScale {
    pub reference_hpa: f64,
    /// `(max deviation, score)` pairs
    pub steps: Vec<(f64, f64)>,
    /// Points lost per hPa of deviation past the last step
    pub decay_per_hpa: f64,
    /// Lowest score the tail can reach
    pub floor: f64,
}

impl Default for PressureScale {
    fn default() -> Self {
        Self {
            reference_hpa: STANDARD_PRESSURE_HPA,
            steps: PRESSURE_STEPS.to_vec(),
            decay_per_hpa: 2.0,
            floor: 40.0,
        }
    }
}

/// Complete set of tunable tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringProfile {
    pub air_quality: AirQualityTables,
    pub uv: BreakpointTable,
    pub pressure: PressureScale,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            air_quality: AirQualityTables::default(),
            uv: BreakpointTable::new(&UV_STEPS, UV_FLOOR),
            pressure: PressureScale::default(),
        }
    }
}

impl ScoringProfile {
    /// Load and validate a profile from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring profile: {:?}", path))?;

        let profile: ScoringProfile = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse scoring profile JSON")?;

        profile
            .validate()
            .with_context(|| format!("Invalid scoring profile: {:?}", path))?;

        Ok(profile)
    }

    /// Every table must be non-empty with finite, strictly ascending bounds
    pub fn validate(&self) -> Result<(), ProfileError> {
        let air = &self.air_quality;
        let tables: [(&'static str, &BreakpointTable); 7] = [
            ("air_quality.pm2_5", &air.pm2_5),
            ("air_quality.pm10", &air.pm10),
            ("air_quality.o3", &air.o3),
            ("air_quality.co", &air.co),
            ("air_quality.no2", &air.no2),
            ("air_quality.so2", &air.so2),
            ("uv", &self.uv),
        ];

        for (name, table) in tables {
            check_table(name, table)?;
        }

        let pressure = BreakpointTable::new(&self.pressure.steps, self.pressure.floor);
        check_table("pressure.steps", &pressure)?;
        if !(self.pressure.reference_hpa.is_finite() && self.pressure.decay_per_hpa.is_finite()) {
            return Err(ProfileError::NonFinite("pressure"));
        }

        Ok(())
    }
}

fn check_table(name: &'static str, table: &BreakpointTable) -> Result<(), ProfileError> {
    if table.breakpoints.is_empty() {
        return Err(ProfileError::EmptyTable(name));
    }
    if !table.is_well_formed() || !table.floor.is_finite() {
        return Err(ProfileError::UnsortedTable(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert_eq!(ScoringProfile::default().validate(), Ok(()));
    }

    #[test]
    fn test_round_trips_through_json() {
        let profile = ScoringProfile::default();
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: ScoringProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_rejects_unsorted_table() {
        let mut profile = ScoringProfile::default();
        profile.air_quality.no2.breakpoints.swap(0, 1);
        assert_eq!(
            profile.validate(),
            Err(ProfileError::UnsortedTable("air_quality.no2"))
        );
    }

    #[test]
    fn test_rejects_empty_table() {
        let mut profile = ScoringProfile::default();
        profile.uv.breakpoints.clear();
        assert_eq!(profile.validate(), Err(ProfileError::EmptyTable("uv")));
    }

    #[test]
    fn test_rejects_non_finite_pressure_parameters() {
        let mut profile = ScoringProfile::default();
        profile.pressure.decay_per_hpa = f64::NAN;
        assert_eq!(profile.validate(), Err(ProfileError::NonFinite("pressure")));

        let mut profile = ScoringProfile::default();
        profile.pressure.reference_hpa = f64::INFINITY;
        assert_eq!(profile.validate(), Err(ProfileError::NonFinite("pressure")));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = ScoringProfile::load(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read scoring profile"));
    }
}
