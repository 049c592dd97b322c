/// Open-Meteo flood API client.
///
/// Handles URL construction and JSON response parsing for the GloFAS
/// river discharge endpoint:
///   https://flood-api.open-meteo.com/v1/flood
///
/// The same response shape serves both the forecast query (no date range,
/// defaults to today onward) and the history query (explicit start/end
/// dates). See `fixtures.rs` for annotated example payloads.

use crate::model::{AssessmentError, DischargeSeries};
use chrono::NaiveDate;
use serde::Deserialize;

const FLOOD_BASE_URL: &str = "https://flood-api.open-meteo.com/v1/flood";

// ---------------------------------------------------------------------------
// Serde structures for flood API deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct FloodResponse {
    daily: Option<FloodDaily>,
}

#[derive(Deserialize)]
struct FloodDaily {
    time: Vec<String>, // "YYYY-MM-DD"
    river_discharge: Option<Vec<Option<f64>>>,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the forecast URL for a point location. Without explicit dates
/// the API returns a daily series starting today, at least 7 days long.
pub fn build_forecast_url(lat: f64, lon: f64) -> String {
    format!(
        "{}?latitude={}&longitude={}&daily=river_discharge",
        FLOOD_BASE_URL, lat, lon
    )
}

/// Builds the history URL for a point location and inclusive date range
/// (YYYY-MM-DD).
pub fn build_history_url(lat: f64, lon: f64, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}?latitude={}&longitude={}&daily=river_discharge&start_date={}&end_date={}",
        FLOOD_BASE_URL,
        lat,
        lon,
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a flood API JSON response body into a `DischargeSeries`.
///
/// Per-day nulls are preserved as gaps; they are NOT zeros.
///
/// # Errors
/// - `ParseError` — malformed JSON, mismatched array lengths, or
///   non-contiguous dates.
/// - `DataUnavailable` — structurally valid response with no
///   `daily.river_discharge` block (the API's "no river here" answer).
pub fn parse_flood_response(json: &str) -> Result<DischargeSeries, AssessmentError> {
    let response: FloodResponse = serde_json::from_str(json)
        .map_err(|e| AssessmentError::ParseError(format!("flood API JSON: {}", e)))?;

    let daily = response.daily.ok_or_else(|| {
        AssessmentError::DataUnavailable("flood response has no daily block".to_string())
    })?;

    let discharge = daily.river_discharge.ok_or_else(|| {
        AssessmentError::DataUnavailable("flood response has no river_discharge series".to_string())
    })?;

    let mut dates = Vec::with_capacity(daily.time.len());
    for t in &daily.time {
        let date = NaiveDate::parse_from_str(t, "%Y-%m-%d")
            .map_err(|e| AssessmentError::ParseError(format!("bad date '{}': {}", t, e)))?;
        dates.push(date);
    }

    DischargeSeries::from_daily(dates, discharge)
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Fetches the discharge forecast for a point location.
pub fn fetch_forecast(
    client: &reqwest::blocking::Client,
    lat: f64,
    lon: f64,
) -> Result<DischargeSeries, Box<dyn std::error::Error>> {
    fetch_series(client, &build_forecast_url(lat, lon))
}

/// Fetches the discharge history for a point location and date range.
pub fn fetch_history(
    client: &reqwest::blocking::Client,
    lat: f64,
    lon: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<DischargeSeries, Box<dyn std::error::Error>> {
    fetch_series(client, &build_history_url(lat, lon, start, end))
}

fn fetch_series(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<DischargeSeries, Box<dyn std::error::Error>> {
    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(AssessmentError::HttpError(response.status().as_u16()).into());
    }

    let body = response.text()?;
    Ok(parse_flood_response(&body)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
