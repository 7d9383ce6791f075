//! Google Roads API backend
//!
//! Uses the snapToRoads endpoint:
//! `GET {url}?path=lat,lng|lat,lng|...&interpolate=true&key=...`
//!
//! The service accepts at most 100 points per request, so longer paths are
//! sent in consecutive batches that overlap by one point.

use crate::constants::api::{ROADS_MAX_PATH_POINTS, ROADS_URL, USER_AGENT};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::roads::{ApiKey, RoadSnapper, SnapOutcome, SnappedPoint};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Connection settings for the Roads API
#[derive(Debug, Clone, PartialEq)]
pub struct RoadsOptions {
    /// Endpoint URL
    pub url: String,
    /// Ask the service to add points along the road between inputs
    pub interpolate: bool,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RoadsOptions {
    fn default() -> Self {
        Self {
            url: ROADS_URL.to_string(),
            interpolate: true,
            timeout_secs: 30,
        }
    }
}

/// Google Roads API client
#[derive(Debug, Clone)]
pub struct GoogleRoadsClient {
    client: reqwest::Client,
    key: ApiKey,
    options: RoadsOptions,
}

/// Top-level snapToRoads response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoadsResponse {
    /// Entries are checked one at a time so a bad entry only drops itself
    #[serde(default)]
    snapped_points: Vec<serde_json::Value>,
    #[serde(default)]
    warning_message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnappedPoint {
    location: RawLocation,
    #[serde(default)]
    original_index: Option<usize>,
    #[serde(default)]
    place_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
}

/// Error body returned with non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl GoogleRoadsClient {
    /// Create a new client
    pub fn new(key: ApiKey, options: RoadsOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(options.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            key,
            options,
        })
    }

    /// Build the request URL for one batch of points
    fn request_url(&self, path: &[Coordinates]) -> String {
        format!(
            "{}?path={}&interpolate={}&key={}",
            self.options.url,
            urlencoding::encode(&encode_path(path)),
            self.options.interpolate,
            urlencoding::encode(self.key.as_str())
        )
    }

    /// Send one batch (at most ROADS_MAX_PATH_POINTS points)
    async fn fetch_batch(&self, path: &[Coordinates]) -> Result<SnapOutcome> {
        let response = self
            .client
            .get(self.request_url(path))
            .send()
            .await
            .map_err(|e| Error::RoadSnap(format!("Roads request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::RoadSnap(format!("Failed to read Roads response: {}", e)))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| "no error message".to_string());
            return Err(Error::RoadSnap(format!(
                "Roads API returned status {}: {}",
                status, detail
            )));
        }

        parse_snap_response(&body)
    }
}

impl RoadSnapper for GoogleRoadsClient {
    async fn snap(&self, path: &[Coordinates]) -> Result<SnapOutcome> {
        let mut outcome = SnapOutcome::default();
        let mut start = 0;

        // Consecutive batches share one point so the road between them is
        // interpolated too
        while start < path.len() {
            let end = (start + ROADS_MAX_PATH_POINTS).min(path.len());
            debug!(start, points = end - start, "Sending snapToRoads request");

            let mut result = self.fetch_batch(&path[start..end]).await?;
            if start > 0 {
                result.points.retain(|p| p.original_index != Some(0));
            }
            outcome.extend_from(result, start);

            if end == path.len() {
                break;
            }
            start = end - 1;
        }

        if let Some(warning) = &outcome.warning {
            warn!("Roads API warning: {}", warning);
        }
        info!(
            snapped = outcome.points.len(),
            skipped = outcome.skipped,
            "Snapped {} points to roads",
            path.len()
        );

        Ok(outcome)
    }
}

/// Join coordinates as `lat,lng|lat,lng|...`
pub fn encode_path(path: &[Coordinates]) -> String {
    path.iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

/// Parse a snapToRoads response body
///
/// The document itself must be a JSON object. Entries of `snappedPoints`
/// without a numeric `location.latitude` and `location.longitude` are
/// skipped and counted.
pub fn parse_snap_response(body: &str) -> Result<SnapOutcome> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::RoadSnap(format!("Failed to parse Roads response: {}", e)))?;

    // serde also fills structs from arrays by position
    if !value.is_object() {
        return Err(Error::RoadSnap(
            "Roads response is not a JSON object".to_string(),
        ));
    }

    let response: RoadsResponse = serde_json::from_value(value)
        .map_err(|e| Error::RoadSnap(format!("Failed to parse Roads response: {}", e)))?;

    let mut outcome = SnapOutcome {
        warning: response.warning_message,
        ..SnapOutcome::default()
    };

    for entry in response.snapped_points {
        let has_location = entry
            .get("location")
            .is_some_and(serde_json::Value::is_object);
        if !entry.is_object() || !has_location {
            debug!("Skipping snapped point without a location object");
            outcome.skipped += 1;
            continue;
        }

        match serde_json::from_value::<RawSnappedPoint>(entry) {
            Ok(raw) => outcome.points.push(SnappedPoint {
                coords: Coordinates::new(raw.location.latitude, raw.location.longitude),
                original_index: raw.original_index,
                place_id: raw.place_id,
            }),
            Err(e) => {
                debug!("Skipping malformed snapped point: {}", e);
                outcome.skipped += 1;
            }
        }
    }

    Ok(outcome)
}
