/// Core data types for the floodwatch assessment service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic beyond trivial accessors, no I/O, and no HTTP
/// dependencies — only types.

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Discharge series
// ---------------------------------------------------------------------------

/// One daily river discharge sample from the Open-Meteo flood API.
///
/// `discharge` is `None` when the model has no value for that day
/// (a sensor/model gap), which is distinct from a value of 0.0 m³/s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DischargePoint {
    pub date: NaiveDate,
    pub discharge: Option<f64>,
}

/// An ordered daily discharge series for a fixed date range.
///
/// Invariant: dates are contiguous and ascending, enforced by
/// `from_daily`. Values may be absent per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DischargeSeries {
    pub points: Vec<DischargePoint>,
}

impl DischargeSeries {
    /// Builds a series from parallel date/value arrays as returned by the
    /// flood API `daily` block.
    ///
    /// # Errors
    /// - `ParseError` if the arrays differ in length or the dates are not
    ///   contiguous ascending days.
    pub fn from_daily(
        dates: Vec<NaiveDate>,
        values: Vec<Option<f64>>,
    ) -> Result<Self, AssessmentError> {
        if dates.len() != values.len() {
            return Err(AssessmentError::ParseError(format!(
                "daily arrays differ in length: {} dates vs {} values",
                dates.len(),
                values.len()
            )));
        }

        for pair in dates.windows(2) {
            if pair[1] != pair[0].succ_opt().unwrap_or(pair[0]) {
                return Err(AssessmentError::ParseError(format!(
                    "daily dates are not contiguous ascending: {} followed by {}",
                    pair[0], pair[1]
                )));
            }
        }

        let points = dates
            .into_iter()
            .zip(values)
            .map(|(date, discharge)| DischargePoint { date, discharge })
            .collect();

        Ok(Self { points })
    }

    /// Today's discharge: the value of the first day in the series.
    /// `None` if the series is empty or the first day has a gap.
    pub fn current(&self) -> Option<f64> {
        self.points.first().and_then(|p| p.discharge)
    }

    /// Maximum discharge over the first `days` entries, skipping gaps.
    /// `None` if no value is present in that window.
    pub fn peak(&self, days: usize) -> Option<f64> {
        self.points
            .iter()
            .take(days)
            .filter_map(|p| p.discharge)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
    }

    /// True when no day in the series carries a value.
    pub fn has_no_values(&self) -> bool {
        self.points.iter().all(|p| p.discharge.is_none())
    }
}

// ---------------------------------------------------------------------------
// Statistical baseline
// ---------------------------------------------------------------------------

/// Robust summary statistics derived from a historical discharge series.
///
/// Computed once per series by `analysis::baseline::compute_baseline` and
/// never mutated. `high_water_mark` is the sorted value at index
/// `floor(n * 0.95)` — a direct index pick kept for compatibility with the
/// classification boundaries, not an interpolated percentile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DischargeBaseline {
    pub median: f64,
    pub high_water_mark: f64,
    pub max: f64,
    pub sample_size: usize,
}

// ---------------------------------------------------------------------------
// Event feed types
// ---------------------------------------------------------------------------

/// GDACS alert level for a reported flood event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Red,
    Orange,
    Green,
    Unknown,
}

impl AlertLevel {
    pub fn from_feed_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "red" => AlertLevel::Red,
            "orange" => AlertLevel::Orange,
            "green" => AlertLevel::Green,
            _ => AlertLevel::Unknown,
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertLevel::Red => write!(f, "red"),
            AlertLevel::Orange => write!(f, "orange"),
            AlertLevel::Green => write!(f, "green"),
            AlertLevel::Unknown => write!(f, "unknown"),
        }
    }
}

/// One officially reported flood event from the GDACS feed.
///
/// Fetched fresh per query, never cached or mutated, and discarded after
/// the assessment that used it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloodEvent {
    pub title: String,
    pub alert_level: AlertLevel,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub report_date: String, // as reported by the feed, e.g. "2024-07-20T00:00:00"
    pub report_url: String,
}

/// A confirmed match of the query location against one reported event.
/// "No match" is represented as `Option::None` by the matcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventMatch {
    pub event: FloodEvent,
    pub distance_km: f64,
}

// ---------------------------------------------------------------------------
// Auxiliary signals
// ---------------------------------------------------------------------------

/// Scalar signals feeding the composite risk score.
///
/// All values default to 0 when the archive fetch fails or the field is
/// missing — the classifier treats zero as "no contribution".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuxiliarySignals {
    /// Precipitation sum over the trailing 3 days, in mm.
    pub rainfall_72h_mm: f64,
    /// Grid cell elevation, in m.
    pub elevation_m: f64,
    /// Most recent hourly topsoil moisture sample, in m³/m³.
    pub soil_moisture: f64,
    /// Most recent hourly snow depth sample, in m.
    pub snow_depth_m: f64,
}

impl Default for AuxiliarySignals {
    fn default() -> Self {
        Self {
            rainfall_72h_mm: 0.0,
            elevation_m: 0.0,
            soil_moisture: 0.0,
            snow_depth_m: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Assessment output
// ---------------------------------------------------------------------------

/// Classified flood risk level, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// The result of one flood risk assessment. Created fresh per query and
/// immutable once produced; raw signals are carried for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloodAssessment {
    pub risk_level: RiskLevel,
    /// True only when an authoritative event report matched the location.
    pub officially_confirmed: bool,
    /// Human-readable rationale for the High-risk branches. The composite
    /// score branch carries no rationale beyond the displayed raw signals.
    pub rationale: Option<String>,
    pub current_discharge: Option<f64>,
    pub peak_discharge_7d: Option<f64>,
    pub baseline: Option<DischargeBaseline>,
    pub event_match: Option<EventMatch>,
    pub auxiliary: AuxiliarySignals,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or assessing flood data.
///
/// Only `DataUnavailable` on the forecast series is fatal to producing an
/// assessment. For optional inputs (history, events, auxiliary signals)
/// the collector degrades to neutral defaults instead of propagating.
#[derive(Debug, PartialEq)]
pub enum AssessmentError {
    /// The mandatory forecast discharge series is missing or carries no
    /// values. Callers must render an explicit "N/A" state, never a
    /// default Low-risk result.
    DataUnavailable(String),
    /// Non-2xx HTTP response from a collaborator API.
    HttpError(u16),
    /// A response body could not be deserialized or failed validation.
    ParseError(String),
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentError::DataUnavailable(msg) => write!(f, "Data unavailable: {}", msg),
            AssessmentError::HttpError(code) => write!(f, "HTTP error: {}", code),
            AssessmentError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for AssessmentError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_daily_rejects_length_mismatch() {
        let result = DischargeSeries::from_daily(
            vec![date(2024, 5, 1), date(2024, 5, 2)],
            vec![Some(10.0)],
        );
        assert!(matches!(result, Err(AssessmentError::ParseError(_))));
    }

    #[test]
    fn test_from_daily_rejects_non_contiguous_dates() {
        let result = DischargeSeries::from_daily(
            vec![date(2024, 5, 1), date(2024, 5, 3)],
            vec![Some(10.0), Some(12.0)],
        );
        assert!(matches!(result, Err(AssessmentError::ParseError(_))));
    }

    #[test]
    fn test_current_is_first_day_value() {
        let series = DischargeSeries::from_daily(
            vec![date(2024, 5, 1), date(2024, 5, 2)],
            vec![Some(25.0), Some(80.0)],
        )
        .unwrap();
        assert_eq!(series.current(), Some(25.0));
    }

    #[test]
    fn test_current_none_when_first_day_is_gap() {
        let series = DischargeSeries::from_daily(
            vec![date(2024, 5, 1), date(2024, 5, 2)],
            vec![None, Some(80.0)],
        )
        .unwrap();
        assert_eq!(series.current(), None);
    }

    #[test]
    fn test_peak_skips_gaps_and_limits_window() {
        let series = DischargeSeries::from_daily(
            (0..10).map(|i| date(2024, 5, 1 + i)).collect(),
            vec![
                Some(10.0),
                None,
                Some(42.0),
                Some(7.0),
                None,
                Some(30.0),
                Some(5.0),
                Some(999.0), // day 8, outside the 7-day window
                Some(1.0),
                Some(1.0),
            ],
        )
        .unwrap();
        assert_eq!(series.peak(7), Some(42.0));
    }

    #[test]
    fn test_peak_none_when_window_has_no_values() {
        let series = DischargeSeries::from_daily(
            vec![date(2024, 5, 1), date(2024, 5, 2)],
            vec![None, None],
        )
        .unwrap();
        assert_eq!(series.peak(7), None);
        assert!(series.has_no_values());
    }

    #[test]
    fn test_alert_level_from_feed_str() {
        assert_eq!(AlertLevel::from_feed_str("Red"), AlertLevel::Red);
        assert_eq!(AlertLevel::from_feed_str("ORANGE"), AlertLevel::Orange);
        assert_eq!(AlertLevel::from_feed_str("green"), AlertLevel::Green);
        assert_eq!(AlertLevel::from_feed_str(""), AlertLevel::Unknown);
        assert_eq!(AlertLevel::from_feed_str("purple"), AlertLevel::Unknown);
    }

    #[test]
    fn test_risk_level_display_matches_badge_text() {
        assert_eq!(RiskLevel::Low.to_string(), "Low");
        assert_eq!(RiskLevel::Moderate.to_string(), "Moderate");
        assert_eq!(RiskLevel::High.to_string(), "High");
    }
}
