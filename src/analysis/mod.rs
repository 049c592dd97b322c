/// Flood risk analysis for the floodwatch service.
///
/// Submodules:
/// - `baseline` — robust summary statistics over a historical discharge series.
/// - `event_match` — geographic matching against the official event feed.
/// - `classify` — the risk decision protocol combining all signals.
///
/// Everything here is pure and synchronous; all I/O lives in `ingest`
/// and `collector`.

pub mod baseline;
pub mod classify;
pub mod event_match;
