/// Test fixtures: representative JSON payloads from the collaborator APIs.
///
/// These are structurally complete but truncated to the minimum needed to
/// exercise the parsers. They reflect the real envelopes returned by the
/// Open-Meteo flood/archive/geocoding endpoints and the GDACS event feed.
///
/// Flood API shape:
///   response.daily.time[]            — "YYYY-MM-DD" strings
///   response.daily.river_discharge[] — numbers or null (model gap)
///
/// GDACS shape:
///   response.features[]
///     .geometry.coordinates — [longitude, latitude] (GeoJSON order!)
///     .properties.{name, country, alertlevel, eventid, fromdate}
///
/// Note: GDACS coordinates are lon-first while the rest of the system
/// talks lat-first. The parser does the swap; fixtures keep feed order.

/// Seven-day discharge forecast for a Manila-area river cell.
/// Current (day one) 25.0 m³/s, window peak 31.2 m³/s.
pub(crate) fn fixture_flood_forecast_json() -> &'static str {
    r#"{
      "latitude": 14.6,
      "longitude": 121.0,
      "daily_units": { "time": "iso8601", "river_discharge": "m³/s" },
      "daily": {
        "time": ["2024-07-21", "2024-07-22", "2024-07-23", "2024-07-24",
                 "2024-07-25", "2024-07-26", "2024-07-27"],
        "river_discharge": [25.0, 28.1, 30.0, 31.2, 29.4, 26.0, 24.3]
      }
    }"#
}

/// Forecast with per-day nulls — the model reports gaps, which must be
/// preserved as absent values rather than zeros.
pub(crate) fn fixture_flood_forecast_with_gaps_json() -> &'static str {
    r#"{
      "latitude": 14.6,
      "longitude": 121.0,
      "daily": {
        "time": ["2024-07-21", "2024-07-22", "2024-07-23", "2024-07-24",
                 "2024-07-25", "2024-07-26", "2024-07-27"],
        "river_discharge": [null, 18.4, 22.9, null, 20.0, 17.2, 16.8]
      }
    }"#
}

/// Structurally valid flood response with no daily block at all — the
/// API's answer for a cell with no modelled river.
pub(crate) fn fixture_flood_no_daily_json() -> &'static str {
    r#"{
      "latitude": 14.6,
      "longitude": 121.0,
      "generationtime_ms": 0.2
    }"#
}

/// Daily block present but without the river_discharge series.
pub(crate) fn fixture_flood_no_discharge_json() -> &'static str {
    r#"{
      "latitude": 14.6,
      "longitude": 121.0,
      "daily": {
        "time": ["2024-07-21", "2024-07-22"]
      }
    }"#
}

/// One red-alert flood event near Manila, numeric event id in properties.
pub(crate) fn fixture_gdacs_single_event_json() -> &'static str {
    r#"{
      "type": "FeatureCollection",
      "features": [
        {
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [120.8, 14.9] },
          "properties": {
            "name": "Flood in Philippines",
            "country": "Philippines",
            "alertlevel": "Red",
            "eventid": 1102983,
            "fromdate": "2024-07-20T00:00:00",
            "severity": { "severity": 2.5, "severitytext": "Major flood" }
          }
        }
      ]
    }"#
}

/// Three features: a valid Vietnamese event, one with no geometry (must be
/// skipped silently), and a valid Philippine event. Order matters — the
/// matcher contract is first qualifying candidate in feed order.
pub(crate) fn fixture_gdacs_mixed_validity_json() -> &'static str {
    r#"{
      "type": "FeatureCollection",
      "features": [
        {
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [105.8, 21.0] },
          "properties": {
            "name": "Flood in Viet Nam",
            "country": "Viet Nam",
            "alertlevel": "Orange",
            "eventid": 1102970,
            "fromdate": "2024-07-15T00:00:00"
          }
        },
        {
          "type": "Feature",
          "properties": {
            "name": "Flood without coordinates",
            "country": "Nowhere",
            "alertlevel": "Green",
            "eventid": 1102975,
            "fromdate": "2024-07-17T00:00:00"
          }
        },
        {
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [120.8, 14.9] },
          "properties": {
            "name": "Flood in Philippines",
            "country": "Philippines",
            "alertlevel": "Red",
            "eventid": 1102983,
            "fromdate": "2024-07-20T00:00:00"
          }
        }
      ]
    }"#
}

/// Archive response over a 4-day window: rainfall totals 50.5 mm (null
/// counts as 0), elevation 16 m, and the latest hourly samples are soil
/// moisture 0.41 m³/m³ and snow depth 0.0 m.
pub(crate) fn fixture_archive_json() -> &'static str {
    r#"{
      "latitude": 14.6,
      "longitude": 121.0,
      "elevation": 16.0,
      "daily": {
        "time": ["2024-07-18", "2024-07-19", "2024-07-20", "2024-07-21"],
        "precipitation_sum": [12.5, 30.0, null, 8.0]
      },
      "hourly": {
        "time": ["2024-07-21T10:00", "2024-07-21T11:00", "2024-07-21T12:00"],
        "soil_moisture_0_to_1cm": [0.32, 0.38, 0.41],
        "snow_depth": [0.0, 0.0, 0.0]
      }
    }"#
}

/// Archive response missing the hourly block entirely — soil moisture and
/// snow depth must degrade to 0 while rainfall still sums.
pub(crate) fn fixture_archive_missing_hourly_json() -> &'static str {
    r#"{
      "latitude": 14.6,
      "longitude": 121.0,
      "daily": {
        "time": ["2024-07-19", "2024-07-20", "2024-07-21"],
        "precipitation_sum": [1.0, 2.0, 1.2]
      }
    }"#
}

/// Geocoding best match for "Manila".
pub(crate) fn fixture_geocode_manila_json() -> &'static str {
    r#"{
      "results": [
        {
          "id": 1701668,
          "name": "Manila",
          "latitude": 14.6042,
          "longitude": 120.9822,
          "country": "Philippines",
          "country_code": "PH",
          "timezone": "Asia/Manila",
          "population": 1600000
        }
      ],
      "generationtime_ms": 0.7
    }"#
}

/// Geocoding response for a query with no match.
pub(crate) fn fixture_geocode_no_results_json() -> &'static str {
    r#"{ "generationtime_ms": 0.4 }"#
}
