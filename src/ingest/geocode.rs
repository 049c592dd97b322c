/// Open-Meteo geocoding client.
///
/// Resolves a free-form city query to coordinates and a "City, Country"
/// display name. The display name matters downstream: its trailing comma
/// segment is the country token the event matcher keys on.
///
/// Endpoint: https://geocoding-api.open-meteo.com/v1/search

use crate::model::AssessmentError;
use serde::Deserialize;

const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// A resolved query location.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// "City, Country", e.g. "Manila, Philippines".
    pub display_name: String,
}

#[derive(Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

/// Builds the search URL for a free-form query, best match only.
pub fn build_search_url(query: &str) -> String {
    format!(
        "{}?name={}&count=1&language=en&format=json",
        GEOCODING_BASE_URL,
        urlencoding::encode(query)
    )
}

/// Parses a geocoding response into the best-match location.
///
/// # Errors
/// - `ParseError` — malformed JSON.
/// - `DataUnavailable` — no result for the query.
pub fn parse_search_response(json: &str) -> Result<ResolvedLocation, AssessmentError> {
    let response: GeocodeResponse = serde_json::from_str(json)
        .map_err(|e| AssessmentError::ParseError(format!("geocoding JSON: {}", e)))?;

    let best = response
        .results
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .ok_or_else(|| {
            AssessmentError::DataUnavailable("no geocoding result for query".to_string())
        })?;

    let display_name = match best.country {
        Some(country) if !country.is_empty() => format!("{}, {}", best.name, country),
        _ => best.name,
    };

    Ok(ResolvedLocation {
        latitude: best.latitude,
        longitude: best.longitude,
        display_name,
    })
}

/// Resolves a city query against the geocoding API.
pub fn fetch_location(
    client: &reqwest::blocking::Client,
    query: &str,
) -> Result<ResolvedLocation, Box<dyn std::error::Error>> {
    let url = build_search_url(query);

    let response = client.get(&url).send()?;
    if !response.status().is_success() {
        return Err(AssessmentError::HttpError(response.status().as_u16()).into());
    }

    let body = response.text()?;
    Ok(parse_search_response(&body)?)
}
