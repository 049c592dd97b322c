/// Geographic matching of a query location against reported flood events.
///
/// The feed returns events worldwide; we narrow to the user's country by a
/// name heuristic, then require the event to lie within a configurable
/// radius. Candidates are tried in caller-supplied order and the first
/// qualifying one wins. The upstream feed does not define an ordering, so
/// "first" is an explicit contract of this function, not an assumption
/// about the feed.

use crate::model::{EventMatch, FloodEvent};

/// Extracts the country token from a display name such as
/// "Manila, Philippines": the trailing comma-separated segment, trimmed
/// and lowercased. A name without commas is its own token.
pub fn country_token(location_name: &str) -> String {
    location_name
        .split(',')
        .next_back()
        .unwrap_or(location_name)
        .trim()
        .to_lowercase()
}

/// Equirectangular distance approximation in kilometres.
///
/// `sqrt((dLat*111)^2 + (dLon*111*cos(lat))^2)` — adequate at the few
/// hundred kilometre scale this matcher operates on; errors grow toward
/// the poles, which is acceptable for the intended use.
pub fn distance_km(lat: f64, lon: f64, other_lat: f64, other_lon: f64) -> f64 {
    let d_lat = (lat - other_lat) * 111.0;
    let d_lon = (lon - other_lon) * 111.0 * lat.to_radians().cos();
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

/// Matches the query location against the candidate events, first
/// qualifying candidate wins.
///
/// A candidate qualifies when both hold:
/// 1. Country heuristic: the user's country token and the event's country
///    field contain each other as a case-insensitive substring in either
///    direction, or the token appears in the event title. Without a
///    country match the candidate is skipped regardless of distance.
/// 2. The equirectangular distance is strictly below `radius_km`.
///
/// Returns `None` when no candidate qualifies. Callers with an
/// unreachable or malformed feed pass an empty slice, which degrades to
/// "no match" rather than failing the assessment.
pub fn match_events(
    lat: f64,
    lon: f64,
    location_name: &str,
    candidates: &[FloodEvent],
    radius_km: f64,
) -> Option<EventMatch> {
    let user_country = country_token(location_name);

    for event in candidates {
        let event_country = event.country.to_lowercase();
        let event_title = event.title.to_lowercase();

        let country_matches = event_country.contains(&user_country)
            || event_title.contains(&user_country)
            || user_country.contains(&event_country);

        if !country_matches {
            continue;
        }

        let distance = distance_km(lat, lon, event.latitude, event.longitude);
        if distance < radius_km {
            return Some(EventMatch {
                event: event.clone(),
                distance_km: distance,
            });
        }
    }

    None
}
