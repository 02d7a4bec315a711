//! TfL StopPoint HTTP client.

use tracing::{debug, warn};

use crate::domain::{Coordinate, StopPoint, nearest};
use crate::error::LookupError;
use crate::http::{Fetcher, QueryParameter, build_url};

use super::types::StopPointsResponse;

/// Default base URL for the TfL unified API.
pub const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Stop types included in the search.
pub const STOP_TYPES: &str = "NaptanPublicBusCoachTram";

/// Search radius around the coordinate, in metres.
pub const SEARCH_RADIUS_METRES: u32 = 1000;

/// Configuration for the StopPoint client.
#[derive(Debug, Clone)]
pub struct StopPointClientConfig {
    /// TfL application id
    pub app_id: String,
    /// TfL application key
    pub app_key: String,
    /// Base URL for the API
    pub base_url: String,
}

impl StopPointClientConfig {
    /// Create a new config with the given credentials.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the TfL StopPoint search.
#[derive(Debug, Clone)]
pub struct StopPointClient<F> {
    fetcher: F,
    config: StopPointClientConfig,
}

impl<F: Fetcher> StopPointClient<F> {
    pub fn new(config: StopPointClientConfig, fetcher: F) -> Self {
        Self { fetcher, config }
    }

    /// Find up to `count` stops nearest to `location`, nearest first.
    pub async fn find_nearest_stops(
        &self,
        location: Coordinate,
        count: usize,
    ) -> Result<Vec<StopPoint>, LookupError> {
        let url = build_url(
            &self.config.base_url,
            "StopPoint",
            &[
                QueryParameter::new("stopTypes", STOP_TYPES),
                QueryParameter::new("lat", location.latitude()),
                QueryParameter::new("lon", location.longitude()),
                QueryParameter::new("radius", SEARCH_RADIUS_METRES),
                QueryParameter::new("app_id", &self.config.app_id),
                QueryParameter::new("app_key", &self.config.app_key),
            ],
        )?;

        let body = self
            .fetcher
            .get(&url)
            .await
            .map_err(LookupError::Stops)?;

        let stops = parse_stop_points(&body)?;
        debug!(received = stops.len(), count, "stop points found");
        Ok(nearest(stops, count))
    }
}

/// Parse a search body into stop points, preserving upstream order.
fn parse_stop_points(body: &str) -> Result<Vec<StopPoint>, LookupError> {
    let response: StopPointsResponse = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "stop point response failed validation");
        LookupError::MalformedResponse {
            api: "stop point",
            message: e.to_string(),
        }
    })?;

    Ok(response
        .stop_points
        .into_iter()
        .map(StopPoint::from)
        .collect())
}
