//! Floodwatch Service - flood risk assessment for a city dashboard
//!
//! Collects river discharge forecasts and history, the GDACS flood event
//! feed, and auxiliary weather signals for a location, then classifies
//! the flood risk with a supporting rationale.
//!
//! Usage:
//!   cargo run --release -- --city "Manila"              # Geocode a city and assess it
//!   cargo run --release -- --lat 14.6 --lon 121.0 --name "Manila, Philippines"
//!   cargo run --release -- --endpoint 8080              # Serve assessments over HTTP
//!
//! Configuration:
//!   floodwatch.toml (optional) - thresholds and lookback windows

use floodwatch_service::assessment::assess;
use floodwatch_service::collector;
use floodwatch_service::config;
use floodwatch_service::endpoint;
use floodwatch_service::ingest::geocode;
use floodwatch_service::model::{AssessmentError, FloodAssessment};
use std::env;

fn main() {
    println!("🌊 Floodwatch Service");
    println!("=====================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut city: Option<String> = None;
    let mut lat: Option<f64> = None;
    let mut lon: Option<f64> = None;
    let mut name: Option<String> = None;
    let mut endpoint_port: Option<u16> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--city" => {
                city = take_value(&args, i, "--city").map(|v| v.to_string());
                i += 2;
            }
            "--lat" => {
                lat = take_value(&args, i, "--lat").and_then(|v| v.parse().ok());
                i += 2;
            }
            "--lon" => {
                lon = take_value(&args, i, "--lon").and_then(|v| v.parse().ok());
                i += 2;
            }
            "--name" => {
                name = take_value(&args, i, "--name").map(|v| v.to_string());
                i += 2;
            }
            "--endpoint" => {
                endpoint_port = take_value(&args, i, "--endpoint").and_then(|v| v.parse().ok());
                i += 2;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!(
                    "Usage: {} [--city NAME | --lat LAT --lon LON [--name NAME]] [--endpoint PORT]",
                    args[0]
                );
                std::process::exit(1);
            }
        }
    }

    let config = config::load_config();

    // Endpoint mode: serve assessments over HTTP and never return.
    if let Some(port) = endpoint_port {
        println!("🚀 Starting HTTP endpoint server...");
        if let Err(e) = endpoint::start_endpoint_server(port, config) {
            eprintln!("\n❌ Endpoint server error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let client = match reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    // Resolve the query location
    let (latitude, longitude, location_name) = if let Some(query) = city {
        println!("🔍 Geocoding \"{}\"...", query);
        match geocode::fetch_location(&client, &query) {
            Ok(location) => (location.latitude, location.longitude, location.display_name),
            Err(e) => {
                eprintln!("❌ Geocoding failed: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match (lat, lon) {
            (Some(lat), Some(lon)) => (lat, lon, name.unwrap_or_default()),
            _ => {
                eprintln!("❌ Either --city or both --lat and --lon are required");
                std::process::exit(1);
            }
        }
    };

    println!("📍 Location: {} ({}, {})", location_name, latitude, longitude);
    println!("📥 Collecting flood signals...\n");

    let input = collector::collect(&client, latitude, longitude, &location_name, &config);

    match assess(&input, &config) {
        Ok(assessment) => print_assessment(&assessment),
        Err(AssessmentError::DataUnavailable(msg)) => {
            // An explicit unknown state, never a default Low.
            println!("🏷  Flood risk: N/A");
            println!("   {}", msg);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("\n❌ Assessment failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn take_value<'a>(args: &'a [String], i: usize, flag: &str) -> Option<&'a str> {
    if i + 1 < args.len() {
        Some(args[i + 1].as_str())
    } else {
        eprintln!("Error: {} requires a value", flag);
        std::process::exit(1);
    }
}

fn print_assessment(assessment: &FloodAssessment) {
    println!("🏷  Flood risk: {}", assessment.risk_level);

    if assessment.officially_confirmed {
        println!("🚨 OFFICIAL FLOOD ALERT");
    }
    if let Some(rationale) = &assessment.rationale {
        println!("   {}", rationale);
    }

    println!();
    println!("   River discharge:  {}", fmt_discharge(assessment.current_discharge));
    println!("   7-day peak:       {}", fmt_discharge(assessment.peak_discharge_7d));
    println!("   Rainfall (72h):   {:.1} mm", assessment.auxiliary.rainfall_72h_mm);
    println!("   Elevation:        {:.0} m", assessment.auxiliary.elevation_m);
    println!("   Soil moisture:    {:.2} m³/m³", assessment.auxiliary.soil_moisture);
    println!("   Snow depth:       {:.2} m", assessment.auxiliary.snow_depth_m);

    if let Some(baseline) = &assessment.baseline {
        println!();
        println!(
            "   Baseline ({} samples): median {:.1}, high water mark {:.1}, max {:.1} m³/s",
            baseline.sample_size, baseline.median, baseline.high_water_mark, baseline.max
        );
    }
}

fn fmt_discharge(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1} m³/s", v),
        None => "-- m³/s".to_string(),
    }
}
