/// Assessment configuration loader - parses floodwatch.toml
///
/// Separates the tunable thresholds of the assessment engine from code,
/// making it easy to adjust the lookback window, anomaly multiplier, or
/// event match radius without recompiling the service. All values carry
/// defaults matching the dashboard's published behavior, so the file is
/// optional.

use serde::Deserialize;
use std::fs;

/// Tunables for one flood risk assessment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Days of discharge history used to compute the statistical baseline.
    pub history_lookback_days: i64,

    /// Days of forecast considered for the peak discharge signal.
    pub forecast_peak_days: usize,

    /// Anomaly trigger: current discharge must exceed
    /// `high_water_mark * trigger_multiplier` to flag a statistical flood.
    pub trigger_multiplier: f64,

    /// Maximum distance at which a reported event counts as local.
    pub event_match_radius_km: f64,

    /// How far back the event feed query reaches.
    pub event_lookback_days: i64,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            history_lookback_days: 90,
            forecast_peak_days: 7,
            trigger_multiplier: 1.2,
            event_match_radius_km: 300.0,
            event_lookback_days: 30,
        }
    }
}

/// Loads the assessment configuration from `floodwatch.toml` in the
/// current working directory, falling back to defaults when the file
/// does not exist.
///
/// # Panics
/// Panics if the file exists but is malformed. This is intentional — a
/// half-applied configuration would silently shift classification
/// boundaries.
pub fn load_config() -> AssessmentConfig {
    load_config_from("floodwatch.toml")
}

fn load_config_from(path: &str) -> AssessmentConfig {
    match fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path, e)),
        Err(_) => AssessmentConfig::default(),
    }
}
