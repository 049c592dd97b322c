/// Assessment orchestration: pure composition of baseline, event matching,
/// and classification into one `FloodAssessment`.
///
/// No I/O happens here. The collector (or a test) hands over already
/// fetched raw inputs; any optional input it could not obtain arrives as
/// `None`/empty and the classifier proceeds on documented fallbacks. Only
/// a missing or value-free forecast series is fatal.

use crate::analysis::baseline::compute_baseline;
use crate::analysis::classify::{classify, RiskInputs};
use crate::analysis::event_match::match_events;
use crate::config::AssessmentConfig;
use crate::model::{
    AssessmentError, AuxiliarySignals, DischargeSeries, FloodAssessment, FloodEvent,
};

/// Raw inputs for one assessment, all fetched beforehand.
///
/// Coordinates and the display name are explicit parameters so that each
/// assessment is a pure function of its inputs; no process-wide location
/// state exists anywhere in the service.
#[derive(Debug, Clone)]
pub struct AssessmentInput {
    pub latitude: f64,
    pub longitude: f64,
    /// Display name whose trailing comma segment is the country,
    /// e.g. "Manila, Philippines".
    pub location_name: String,
    /// Mandatory forecast discharge series (>= 7 days when available).
    pub forecast: Option<DischargeSeries>,
    /// Optional discharge history over the baseline lookback window.
    pub history: Option<DischargeSeries>,
    /// Candidate events in feed order; empty when the feed was
    /// unreachable or malformed.
    pub events: Vec<FloodEvent>,
    pub auxiliary: AuxiliarySignals,
}

/// Produces one flood risk assessment from the given inputs.
///
/// # Errors
/// - `DataUnavailable` when the forecast series is absent or carries no
///   values at all. History, events, and auxiliary signals degrade
///   instead of erroring.
pub fn assess(
    input: &AssessmentInput,
    config: &AssessmentConfig,
) -> Result<FloodAssessment, AssessmentError> {
    let forecast = input.forecast.as_ref().ok_or_else(|| {
        AssessmentError::DataUnavailable("forecast river discharge series missing".to_string())
    })?;

    if forecast.points.is_empty() || forecast.has_no_values() {
        return Err(AssessmentError::DataUnavailable(
            "forecast river discharge series contains no values".to_string(),
        ));
    }

    let current_discharge = forecast.current();
    let peak_discharge_7d = forecast.peak(config.forecast_peak_days);

    let baseline = input.history.as_ref().and_then(compute_baseline);

    let event_match = match_events(
        input.latitude,
        input.longitude,
        &input.location_name,
        &input.events,
        config.event_match_radius_km,
    );

    let outcome = classify(
        &RiskInputs {
            current_discharge,
            peak_discharge_7d,
            baseline: baseline.as_ref(),
            event_match: event_match.as_ref(),
            auxiliary: &input.auxiliary,
        },
        config,
    );

    Ok(FloodAssessment {
        risk_level: outcome.risk_level,
        officially_confirmed: outcome.officially_confirmed,
        rationale: outcome.rationale,
        current_discharge,
        peak_discharge_7d,
        baseline,
        event_match,
        auxiliary: input.auxiliary.clone(),
    })
}
