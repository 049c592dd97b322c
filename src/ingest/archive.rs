/// Open-Meteo archive API client for auxiliary flood signals.
///
/// One query covers the trailing 3 days and yields everything the
/// composite risk score needs beyond discharge:
///   - daily `precipitation_sum`  → 72 h rainfall total (mm)
///   - hourly `soil_moisture_0_to_1cm` → latest topsoil moisture (m³/m³)
///   - hourly `snow_depth`        → latest snow depth (m)
///   - grid `elevation`           → display only (m)
///
/// Endpoint: https://archive-api.open-meteo.com/v1/archive

use crate::model::{AssessmentError, AuxiliarySignals};
use chrono::NaiveDate;
use serde::Deserialize;

const ARCHIVE_BASE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Trailing window covered by the rainfall sum.
pub const RAINFALL_WINDOW_DAYS: i64 = 3;

// ---------------------------------------------------------------------------
// Serde structures for archive API deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ArchiveResponse {
    elevation: Option<f64>,
    daily: Option<ArchiveDaily>,
    hourly: Option<ArchiveHourly>,
}

#[derive(Deserialize)]
struct ArchiveDaily {
    precipitation_sum: Option<Vec<Option<f64>>>,
}

#[derive(Deserialize)]
struct ArchiveHourly {
    time: Vec<String>,
    soil_moisture_0_to_1cm: Option<Vec<Option<f64>>>,
    snow_depth: Option<Vec<Option<f64>>>,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the archive URL for a point location and inclusive date range.
pub fn build_archive_url(lat: f64, lon: f64, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}?latitude={}&longitude={}&start_date={}&end_date={}\
         &daily=precipitation_sum&hourly=soil_moisture_0_to_1cm,snow_depth&timezone=auto",
        ARCHIVE_BASE_URL,
        lat,
        lon,
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses an archive API JSON response into `AuxiliarySignals`.
///
/// Missing blocks or per-slot nulls degrade to 0 field by field; these
/// are optional signals and the classifier treats zero as "no
/// contribution". Only a structurally broken body is an error.
///
/// The soil moisture and snow depth are taken from the LAST hourly slot,
/// i.e. the most recent sample of the window.
pub fn parse_archive_response(json: &str) -> Result<AuxiliarySignals, AssessmentError> {
    let response: ArchiveResponse = serde_json::from_str(json)
        .map_err(|e| AssessmentError::ParseError(format!("archive API JSON: {}", e)))?;

    let rainfall_72h_mm = response
        .daily
        .as_ref()
        .and_then(|d| d.precipitation_sum.as_ref())
        .map(|sums| sums.iter().map(|v| v.unwrap_or(0.0)).sum())
        .unwrap_or(0.0);

    let (soil_moisture, snow_depth_m) = match response.hourly.as_ref() {
        Some(hourly) if !hourly.time.is_empty() => {
            let recent = hourly.time.len() - 1;
            let at_recent = |field: &Option<Vec<Option<f64>>>| {
                field
                    .as_ref()
                    .and_then(|values| values.get(recent).copied().flatten())
                    .unwrap_or(0.0)
            };
            (
                at_recent(&hourly.soil_moisture_0_to_1cm),
                at_recent(&hourly.snow_depth),
            )
        }
        _ => (0.0, 0.0),
    };

    Ok(AuxiliarySignals {
        rainfall_72h_mm,
        elevation_m: response.elevation.unwrap_or(0.0),
        soil_moisture,
        snow_depth_m,
    })
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Fetches auxiliary signals for the trailing rainfall window ending today.
pub fn fetch_auxiliary(
    client: &reqwest::blocking::Client,
    lat: f64,
    lon: f64,
    today: NaiveDate,
) -> Result<AuxiliarySignals, Box<dyn std::error::Error>> {
    let start = today - chrono::Duration::days(RAINFALL_WINDOW_DAYS);
    let url = build_archive_url(lat, lon, start, today);

    let response = client.get(&url).send()?;
    if !response.status().is_success() {
        return Err(AssessmentError::HttpError(response.status().as_u16()).into());
    }

    let body = response.text()?;
    Ok(parse_archive_response(&body)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
