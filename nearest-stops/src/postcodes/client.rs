//! postcodes.io HTTP client.

use tracing::{debug, warn};

use crate::domain::{Coordinate, Postcode};
use crate::error::LookupError;
use crate::http::{Fetcher, UrlError, build_url};

use super::types::PostcodeResponse;

/// Default base URL for postcodes.io.
pub const DEFAULT_BASE_URL: &str = "https://api.postcodes.io";

/// Configuration for the postcode client.
#[derive(Debug, Clone)]
pub struct PostcodeClientConfig {
    /// Base URL for the API
    pub base_url: String,
}

impl PostcodeClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for PostcodeClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the postcodes.io lookup API.
#[derive(Debug, Clone)]
pub struct PostcodeClient<F> {
    fetcher: F,
    base_url: String,
}

impl<F: Fetcher> PostcodeClient<F> {
    pub fn new(config: PostcodeClientConfig, fetcher: F) -> Self {
        Self {
            fetcher,
            base_url: config.base_url,
        }
    }

    /// Resolve a postcode to the coordinates of its centroid.
    ///
    /// An unknown postcode shows up as a `Location` error wrapping the
    /// API's 404.
    pub async fn resolve_location(&self, postcode: &Postcode) -> Result<Coordinate, LookupError> {
        let mut url = build_url(&self.base_url, "postcodes/", &[])?;
        // Pushed as one segment so '/', '?' and '#' are percent-encoded
        url.path_segments_mut()
            .map_err(|()| UrlError::InvalidUrl {
                url: self.base_url.clone(),
                message: "base URL cannot have path segments".to_string(),
            })?
            .pop_if_empty()
            .push(postcode.as_str());

        let body = self
            .fetcher
            .get(&url)
            .await
            .map_err(LookupError::Location)?;

        let coordinate = parse_location(&body)?;
        debug!(%postcode, %coordinate, "resolved postcode");
        Ok(coordinate)
    }
}

/// Parse a lookup body into a validated coordinate.
fn parse_location(body: &str) -> Result<Coordinate, LookupError> {
    let malformed = |message: String| {
        warn!(%message, "postcode response failed validation");
        LookupError::MalformedResponse {
            api: "postcode",
            message,
        }
    };

    let response: PostcodeResponse =
        serde_json::from_str(body).map_err(|e| malformed(e.to_string()))?;

    Coordinate::new(response.result.latitude, response.result.longitude)
        .map_err(|e| malformed(e.to_string()))
}
