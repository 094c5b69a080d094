//! Sub-score modules
//!
//! Each component of the index is scored in its own module. They share no
//! state and can be evaluated in any order.

pub mod thermal;
pub mod weather_condition;
pub mod air_quality;
pub mod uv;
pub mod pressure;

pub use thermal::{calculate_thermal, heat_index, wind_chill, ThermalModel, ThermalResult};
pub use weather_condition::{weather_penalty, WeatherCategory, MAX_WEATHER_PENALTY};
pub use air_quality::{calculate_air_quality, score_pollutant, AirQualityResult, Pollutant, PollutantScores};
pub use uv::calculate_uv;
pub use pressure::calculate_pressure;
