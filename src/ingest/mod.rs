/// External API clients for the floodwatch service.
///
/// Each collaborator API gets its own file with a URL-construction +
/// response-parsing split, so the pure parsing logic stays testable
/// against fixtures without network access:
/// - `open_meteo` — Open-Meteo flood API (daily river discharge).
/// - `archive`    — Open-Meteo archive API (rainfall, soil moisture, snow).
/// - `gdacs`      — GDACS disaster event feed (reported floods).
/// - `geocode`    — Open-Meteo geocoding (city name to coordinates).
/// - `fixtures` (test only) — representative API response payloads.

pub mod archive;
pub mod gdacs;
pub mod geocode;
pub mod open_meteo;

#[cfg(test)]
pub(crate) mod fixtures;
