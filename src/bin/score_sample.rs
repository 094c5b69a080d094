//! Score weather samples from a JSON file
//!
//! Usage: cargo run --features cli --bin score_sample -- requests.json [--detailed]
//!
//! The file holds one request or an array of requests:
//!   {"unit": "metric", "latitude": 22.3, "month": 1, "weather_id": 803,
//!    "sample": {"temp": 6.0, "humidity": 46, ...}}
//!
//! `CEI_PROFILE` may point at a scoring profile JSON to replace the default
//! threshold tables.

use anyhow::{bail, Context, Result};
use comfort_index_rust::{CeiRequest, CeiScorer, ScoringProfile, UnitSystem, WeatherSample};
use serde_json::{json, Value};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comfort_index_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let detailed = args.iter().any(|a| a == "--detailed");
    let Some(path) = args.iter().find(|a| !a.starts_with("--")) else {
        bail!("usage: score_sample <requests.json> [--detailed]");
    };

    let scorer = match std::env::var("CEI_PROFILE") {
        Ok(profile_path) => {
            tracing::info!("Loading scoring profile: {}", profile_path);
            CeiScorer::with_profile(ScoringProfile::load(Path::new(&profile_path))?)
        }
        Err(_) => CeiScorer::new(),
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read requests file: {}", path))?;
    let parsed: Value = serde_json::from_str(&contents)
        .with_context(|| "Failed to parse requests JSON")?;

    let requests = CeiRequest::parse_many(parsed);
    tracing::info!("Scoring {} request(s)", requests.len());

    // Malformed elements are reported in place; the rest are scored as one batch
    let valid: Vec<CeiRequest> = if detailed {
        Vec::new()
    } else {
        requests.iter().filter_map(|r| r.as_ref().ok().cloned()).collect()
    };
    let mut scored = scorer.score_batch(&valid).into_iter();

    let outputs: Vec<Value> = requests
        .iter()
        .map(|request| match request {
            Err(err) => json!({ "error": err.to_string() }),
            Ok(req) if detailed => detailed_output(&scorer, req),
            Ok(_) => match scored.next() {
                Some(Ok(result)) => json!(result),
                Some(Err(err)) => json!({ "error": err.to_string() }),
                None => json!({ "error": "request was not scored" }),
            },
        })
        .collect();

    for output in &outputs {
        println!("{}", serde_json::to_string_pretty(output)?);
    }

    Ok(())
}

fn detailed_output(scorer: &CeiScorer, req: &CeiRequest) -> Value {
    let units: UnitSystem = match req.unit.parse() {
        Ok(units) => units,
        Err(err) => return json!({ "error": err.to_string() }),
    };
    match WeatherSample::from_json(&req.sample) {
        Ok(sample) => json!(scorer.score_detailed(units, &sample, req.latitude, req.month, req.weather_id)),
        Err(err) => json!({ "error": err.to_string() }),
    }
}
