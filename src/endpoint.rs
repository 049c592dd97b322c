/// HTTP endpoint for querying flood assessments
///
/// Provides a simple REST API for dashboards and external tools to request
/// a fresh assessment for a point location.
///
/// Endpoints:
/// - GET /assessment?lat={lat}&lon={lon}&name={display_name} - Run one assessment
/// - GET /health - Service health check

use crate::assessment::assess;
use crate::collector;
use crate::config::AssessmentConfig;
use crate::model::AssessmentError;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start the HTTP endpoint server on the specified port. Blocks forever.
pub fn start_endpoint_server(port: u16, config: AssessmentConfig) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

    println!("📡 HTTP endpoint listening on http://0.0.0.0:{}", port);
    println!("   GET /assessment?lat=..&lon=..&name=.. - Run one assessment");
    println!("   GET /health - Service health check\n");

    for request in server.incoming_requests() {
        let url = request.url().to_string();

        // Route requests
        let response = if url == "/health" {
            handle_health()
        } else if url.starts_with("/assessment") {
            handle_assessment(&client, &url, &config)
        } else {
            create_response(
                404,
                serde_json::json!({
                    "error": "Not found",
                    "available_endpoints": ["/health", "/assessment?lat=..&lon=..&name=.."]
                }),
            )
        };

        if let Err(e) = request.respond(response) {
            eprintln!("Failed to send response: {}", e);
        }
    }

    Ok(())
}

/// Handle /health endpoint
fn handle_health() -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    create_response(
        200,
        serde_json::json!({
            "status": "ok",
            "service": "floodwatch_service",
            "version": "0.1.0"
        }),
    )
}

/// Handle /assessment endpoint
fn handle_assessment(
    client: &reqwest::blocking::Client,
    url: &str,
    config: &AssessmentConfig,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let params = parse_query(url);

    let lat = params.get("lat").and_then(|v| v.parse::<f64>().ok());
    let lon = params.get("lon").and_then(|v| v.parse::<f64>().ok());

    let (lat, lon) = match (lat, lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return create_response(
                400,
                serde_json::json!({
                    "error": "lat and lon query parameters are required and must be numeric"
                }),
            );
        }
    };

    let name = params.get("name").cloned().unwrap_or_default();

    let input = collector::collect(client, lat, lon, &name, config);
    match assess(&input, config) {
        Ok(assessment) => create_response(200, serde_json::to_value(&assessment).unwrap()),
        Err(AssessmentError::DataUnavailable(msg)) => create_response(
            503,
            // No default Low-risk result: the caller must render "N/A".
            serde_json::json!({
                "error": msg,
                "risk_level": null
            }),
        ),
        Err(e) => create_response(502, serde_json::json!({ "error": e.to_string() })),
    }
}

/// Parses the query string of a request URL into a key/value map,
/// percent-decoding values.
fn parse_query(url: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    if let Some(query) = url.splitn(2, '?').nth(1) {
        for pair in query.split('&') {
            let mut kv = pair.splitn(2, '=');
            if let (Some(key), Some(value)) = (kv.next(), kv.next()) {
                let decoded = urlencoding::decode(value)
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| value.to_string());
                params.insert(key.to_string(), decoded);
            }
        }
    }

    params
}

/// Create HTTP response with JSON body
fn create_response(
    status_code: u16,
    json: serde_json::Value,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string_pretty(&json).unwrap();
    let bytes = body.into_bytes();

    tiny_http::Response::from_data(bytes)
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
