//! Air Quality
//!
//! Each of the six pollutants is scored on its own breakpoint table and the
//! worst one sets the air sub-score. A single bad pollutant cannot be averaged
//! away by five clean ones.
//!
//! With the default tables every score is one of {10, 20, 40, 60, 80, 100}.

use crate::data::WeatherSample;
use crate::profile::AirQualityTables;
use serde::{Deserialize, Serialize};

/// µg/m³ per mg/m³
const CO_UG_PER_MG: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    Pm2_5,
    Pm10,
    O3,
    Co,
    No2,
    So2,
}

impl Pollutant {
    pub fn all() -> &'static [Pollutant] {
        &[
            Pollutant::Pm2_5,
            Pollutant::Pm10,
            Pollutant::O3,
            Pollutant::Co,
            Pollutant::No2,
            Pollutant::So2,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pollutant::Pm2_5 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::O3 => "O₃",
            Pollutant::Co => "CO",
            Pollutant::No2 => "NO₂",
            Pollutant::So2 => "SO₂",
        }
    }
}

/// Individual pollutant scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantScores {
    pub pm2_5: f64,
    pub pm10: f64,
    pub o3: f64,
    pub co: f64,
    pub no2: f64,
    pub so2: f64,
}

impl PollutantScores {
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm2_5 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::O3 => self.o3,
            Pollutant::Co => self.co,
            Pollutant::No2 => self.no2,
            Pollutant::So2 => self.so2,
        }
    }

    /// Lowest-scoring pollutant; ties go to the earlier one in [`Pollutant::all`]
    pub fn worst(&self) -> (Pollutant, f64) {
        Pollutant::all()
            .iter()
            .map(|&p| (p, self.get(p)))
            .fold((Pollutant::Pm2_5, self.pm2_5), |worst, candidate| {
                if candidate.1 < worst.1 { candidate } else { worst }
            })
    }
}

/// Air sub-score with per-pollutant detail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQualityResult {
    /// Worst pollutant score
    pub score: f64,
    /// Pollutant that set the score
    pub governing: Pollutant,
    pub pollutants: PollutantScores,
}

/// Score a single pollutant from its sample concentration
///
/// CO arrives in µg/m³ and is converted to mg/m³ before lookup.
pub fn score_pollutant(pollutant: Pollutant, concentration: f64, tables: &AirQualityTables) -> f64 {
    match pollutant {
        Pollutant::Pm2_5 => tables.pm2_5.score(concentration),
        Pollutant::Pm10 => tables.pm10.score(concentration),
        Pollutant::O3 => tables.o3.score(concentration),
        Pollutant::Co => tables.co.score(concentration / CO_UG_PER_MG),
        Pollutant::No2 => tables.no2.score(concentration),
        Pollutant::So2 => tables.so2.score(concentration),
    }
}

/// Calculate the air quality sub-score (worst pollutant governs)
pub fn calculate_air_quality(sample: &WeatherSample, tables: &AirQualityTables) -> AirQualityResult {
    let pollutants = PollutantScores {
        pm2_5: score_pollutant(Pollutant::Pm2_5, sample.pm2_5, tables),
        pm10: score_pollutant(Pollutant::Pm10, sample.pm10, tables),
        o3: score_pollutant(Pollutant::O3, sample.o3, tables),
        co: score_pollutant(Pollutant::Co, sample.co, tables),
        no2: score_pollutant(Pollutant::No2, sample.no2, tables),
        so2: score_pollutant(Pollutant::So2, sample.so2, tables),
    };

    let (governing, score) = pollutants.worst();

    AirQualityResult {
        score,
        governing,
        pollutants,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_sample() -> WeatherSample {
        WeatherSample {
            temp: 20.0,
            humidity: 50.0,
            wind_speed: 2.0,
            pressure: 1013.0,
            uvi: 1.0,
            pm2_5: 3.0,
            pm10: 6.0,
            o3: 50.0,
            co: 150.0,
            no2: 8.0,
            so2: 5.0,
            weather_id: None,
        }
    }

    #[test]
    fn test_clean_air_scores_100() {
        let r = calculate_air_quality(&clean_sample(), &AirQualityTables::default());
        assert_eq!(r.score, 100.0);
        for &p in Pollutant::all() {
            assert_eq!(r.pollutants.get(p), 100.0);
        }
    }

    #[test]
    fn test_worst_pollutant_governs() {
        let mut sample = clean_sample();
        sample.no2 = 12.0;
        sample.o3 = 140.0;
        let r = calculate_air_quality(&sample, &AirQualityTables::default());
        assert_eq!(r.pollutants.no2, 80.0);
        assert_eq!(r.pollutants.o3, 40.0);
        assert_eq!(r.score, 40.0);
        assert_eq!(r.governing, Pollutant::O3);
    }

    #[test]
    fn test_above_all_bounds_hits_floor() {
        let mut sample = clean_sample();
        sample.pm2_5 = 60.0;
        let r = calculate_air_quality(&sample, &AirQualityTables::default());
        assert_eq!(r.score, 10.0);
        assert_eq!(r.governing, Pollutant::Pm2_5);
    }

    #[test]
    fn test_co_is_converted_to_mg() {
        let tables = AirQualityTables::default();
        assert_eq!(score_pollutant(Pollutant::Co, 1000.0, &tables), 100.0);
        assert_eq!(score_pollutant(Pollutant::Co, 1001.0, &tables), 80.0);
        assert_eq!(score_pollutant(Pollutant::Co, 15_000.0, &tables), 20.0);
        assert_eq!(score_pollutant(Pollutant::Co, 15_001.0, &tables), 10.0);
    }

    #[test]
    fn test_scores_are_monotonic_in_concentration() {
        let tables = AirQualityTables::default();
        for &p in Pollutant::all() {
            let mut previous = f64::INFINITY;
            for step in 0..=400 {
                let concentration = if p == Pollutant::Co {
                    step as f64 * 50.0
                } else {
                    step as f64 * 0.5
                };
                let score = score_pollutant(p, concentration, &tables);
                assert!(score <= previous, "{:?} rose at {}", p, concentration);
                assert!([10.0, 20.0, 40.0, 60.0, 80.0, 100.0].contains(&score));
                previous = score;
            }
        }
    }

    #[test]
    fn test_tie_goes_to_first_pollutant() {
        let scores = PollutantScores {
            pm2_5: 100.0,
            pm10: 60.0,
            o3: 100.0,
            co: 100.0,
            no2: 60.0,
            so2: 100.0,
        };
        assert_eq!(scores.worst(), (Pollutant::Pm10, 60.0));
    }
}
