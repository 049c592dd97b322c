/// floodwatch_service: city flood risk assessment service.
///
/// # Module structure
///
/// ```text
/// floodwatch_service
/// ├── model       — shared data types (DischargeSeries, FloodEvent, AssessmentError, …)
/// ├── config      — assessment threshold configuration (floodwatch.toml, optional)
/// ├── ingest
/// │   ├── open_meteo — Open-Meteo flood API: URL construction + discharge parsing
/// │   ├── archive    — Open-Meteo archive API: rainfall / soil moisture / snow depth
/// │   ├── gdacs      — GDACS event feed: reported flood candidates
/// │   ├── geocode    — Open-Meteo geocoding: city query to coordinates
/// │   └── fixtures (test only) — representative API response payloads
/// ├── analysis
/// │   ├── baseline    — statistical baseline over the discharge history
/// │   ├── event_match — country + distance matching against the event feed
/// │   └── classify    — the risk decision protocol
/// ├── assessment  — pure orchestration into one FloodAssessment
/// ├── collector   — parallel collaborator fetches with per-input degradation
/// └── endpoint    — HTTP API serving assessments as JSON
/// ```

/// Public modules
pub mod analysis;
pub mod assessment;
pub mod collector;
pub mod config;
pub mod endpoint;
pub mod ingest;
pub mod model;
