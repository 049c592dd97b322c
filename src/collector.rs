/// Parallel data collection for one assessment.
///
/// The four collaborator fetches (discharge forecast, discharge history,
/// event feed, auxiliary archive) are independent, so they run
/// concurrently on a small thread pool and the collector waits for all of
/// them to settle. Each fetch may fail on its own: optional inputs
/// degrade to neutral defaults (absent history, empty event list, zeroed
/// auxiliary signals) with a warning, and only the forecast is left as
/// `None` for the assessment service to surface as `DataUnavailable`.
///
/// The core never sees any of this; it receives a fully settled
/// `AssessmentInput` value.

use crate::assessment::AssessmentInput;
use crate::config::AssessmentConfig;
use crate::ingest::{archive, gdacs, open_meteo};
use crate::model::{AuxiliarySignals, DischargeSeries, FloodEvent};
use chrono::{Duration, Utc};
use std::sync::mpsc;
use threadpool::ThreadPool;

/// One settled fetch result, sent back over the channel.
/// Errors are stringified because boxed errors are not `Send`.
enum Fetched {
    Forecast(Result<DischargeSeries, String>),
    History(Result<DischargeSeries, String>),
    Events(Result<Vec<FloodEvent>, String>),
    Auxiliary(Result<AuxiliarySignals, String>),
}

/// Fetches all raw inputs for the given location concurrently.
///
/// Never fails: every degradable input falls back to its neutral default,
/// and a failed forecast fetch surfaces later as `DataUnavailable` from
/// `assessment::assess`.
pub fn collect(
    client: &reqwest::blocking::Client,
    latitude: f64,
    longitude: f64,
    location_name: &str,
    config: &AssessmentConfig,
) -> AssessmentInput {
    let today = Utc::now().date_naive();
    let pool = ThreadPool::new(4);
    let (tx, rx) = mpsc::channel();

    {
        let client = client.clone();
        let tx = tx.clone();
        pool.execute(move || {
            let result =
                open_meteo::fetch_forecast(&client, latitude, longitude).map_err(|e| e.to_string());
            let _ = tx.send(Fetched::Forecast(result));
        });
    }

    {
        let client = client.clone();
        let tx = tx.clone();
        let start = today - Duration::days(config.history_lookback_days);
        pool.execute(move || {
            let result = open_meteo::fetch_history(&client, latitude, longitude, start, today)
                .map_err(|e| e.to_string());
            let _ = tx.send(Fetched::History(result));
        });
    }

    {
        let client = client.clone();
        let tx = tx.clone();
        let lookback = config.event_lookback_days;
        pool.execute(move || {
            let result = gdacs::fetch_events(&client, today, lookback).map_err(|e| e.to_string());
            let _ = tx.send(Fetched::Events(result));
        });
    }

    {
        let client = client.clone();
        let tx = tx.clone();
        pool.execute(move || {
            let result =
                archive::fetch_auxiliary(&client, latitude, longitude, today).map_err(|e| e.to_string());
            let _ = tx.send(Fetched::Auxiliary(result));
        });
    }

    // Dropping our sender ends the receive loop once all jobs settle.
    drop(tx);

    let mut input = AssessmentInput {
        latitude,
        longitude,
        location_name: location_name.to_string(),
        forecast: None,
        history: None,
        events: Vec::new(),
        auxiliary: AuxiliarySignals::default(),
    };

    for fetched in rx {
        match fetched {
            Fetched::Forecast(Ok(series)) => input.forecast = Some(series),
            Fetched::Forecast(Err(e)) => {
                eprintln!("⚠ Forecast discharge fetch failed: {}", e);
            }
            Fetched::History(Ok(series)) => input.history = Some(series),
            Fetched::History(Err(e)) => {
                eprintln!("⚠ Discharge history fetch failed, no baseline: {}", e);
            }
            Fetched::Events(Ok(events)) => input.events = events,
            Fetched::Events(Err(e)) => {
                eprintln!("⚠ Event feed fetch failed, treating as no match: {}", e);
            }
            Fetched::Auxiliary(Ok(signals)) => input.auxiliary = signals,
            Fetched::Auxiliary(Err(e)) => {
                eprintln!("⚠ Auxiliary signal fetch failed, using zeros: {}", e);
            }
        }
    }

    input
}
