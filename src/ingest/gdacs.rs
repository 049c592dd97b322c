/// GDACS disaster event feed client.
///
/// Queries the UN/EC Global Disaster Alert and Coordination System for
/// flood events (`eventlist=FL`) reported in a trailing window:
///   https://www.gdacs.org/gdacsapi/api/events/geteventlist/SEARCH
///
/// The response is GeoJSON-ish: a `features` array whose entries carry
/// point geometry plus loosely shaped properties. Candidates missing
/// geographic fields are skipped silently here, so a partly broken feed
/// still contributes its usable events and never crashes the matcher.

use crate::model::{AlertLevel, AssessmentError, FloodEvent};
use chrono::NaiveDate;
use serde::Deserialize;

const GDACS_BASE_URL: &str = "https://www.gdacs.org/gdacsapi/api/events/geteventlist/SEARCH";
const GDACS_REPORT_URL: &str = "https://www.gdacs.org/report.aspx";

// ---------------------------------------------------------------------------
// Serde structures for feed deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GdacsResponse {
    #[serde(default)]
    features: Vec<GdacsFeature>,
}

#[derive(Deserialize)]
struct GdacsFeature {
    geometry: Option<GdacsGeometry>,
    properties: Option<GdacsProperties>,
    /// Feature-level fallback id; some feed entries carry the event id
    /// here instead of in properties.
    id: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct GdacsGeometry {
    /// GeoJSON order: [longitude, latitude].
    #[serde(default)]
    coordinates: Vec<f64>,
}

#[derive(Deserialize)]
struct GdacsProperties {
    name: Option<String>,
    country: Option<String>,
    alertlevel: Option<String>,
    eventid: Option<serde_json::Value>,
    fromdate: Option<String>,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the flood event list URL for an inclusive date range
/// (YYYY-MM-DD), requesting all three alert levels.
pub fn build_event_list_url(from: NaiveDate, to: NaiveDate) -> String {
    format!(
        "{}?eventlist=FL&fromdate={}&todate={}&alertlevel=red;orange;green",
        GDACS_BASE_URL,
        from.format("%Y-%m-%d"),
        to.format("%Y-%m-%d")
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a GDACS event list response into flood event candidates,
/// preserving feed order.
///
/// Features without point geometry are dropped; missing names, countries,
/// alert levels, and dates default to empty/unknown so a sparse entry can
/// still be matched by whichever fields it does carry.
///
/// # Errors
/// - `ParseError` — body is not valid JSON for the feed envelope. Callers
///   treat this as "no events", never as a failed assessment.
pub fn parse_event_list(json: &str) -> Result<Vec<FloodEvent>, AssessmentError> {
    let response: GdacsResponse = serde_json::from_str(json)
        .map_err(|e| AssessmentError::ParseError(format!("GDACS feed JSON: {}", e)))?;

    let mut events = Vec::new();

    for feature in response.features {
        // Required geographic fields: skip silently when absent.
        let coordinates = match feature.geometry {
            Some(g) if g.coordinates.len() >= 2 => g.coordinates,
            _ => continue,
        };
        let longitude = coordinates[0];
        let latitude = coordinates[1];

        let properties = feature.properties.unwrap_or(GdacsProperties {
            name: None,
            country: None,
            alertlevel: None,
            eventid: None,
            fromdate: None,
        });

        let event_id = properties
            .eventid
            .as_ref()
            .or(feature.id.as_ref())
            .map(id_to_string)
            .unwrap_or_default();

        events.push(FloodEvent {
            title: properties.name.unwrap_or_default(),
            alert_level: AlertLevel::from_feed_str(
                properties.alertlevel.as_deref().unwrap_or(""),
            ),
            country: properties.country.unwrap_or_default(),
            latitude,
            longitude,
            report_date: properties.fromdate.unwrap_or_default(),
            report_url: format!("{}?eventid={}", GDACS_REPORT_URL, event_id),
        });
    }

    Ok(events)
}

/// Event ids appear as JSON numbers or strings depending on feed vintage.
fn id_to_string(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Fetches flood event candidates reported within the trailing window
/// ending today.
pub fn fetch_events(
    client: &reqwest::blocking::Client,
    today: NaiveDate,
    lookback_days: i64,
) -> Result<Vec<FloodEvent>, Box<dyn std::error::Error>> {
    let from = today - chrono::Duration::days(lookback_days);
    let url = build_event_list_url(from, today);

    let response = client.get(&url).send()?;
    if !response.status().is_success() {
        return Err(AssessmentError::HttpError(response.status().as_u16()).into());
    }

    let body = response.text()?;
    Ok(parse_event_list(&body)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
