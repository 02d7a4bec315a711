//! GET-only HTTP transport.

use reqwest::{StatusCode, Url};
use tracing::debug;

use super::error::FetchError;
use super::url::redacted;

/// User agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Something that can perform a GET request and hand back the body.
///
/// This abstraction allows the API clients to be tested without a network.
pub trait Fetcher {
    /// Issue one GET request to `url`.
    ///
    /// Returns the raw body on HTTP 200, `FetchError::HttpStatus` on any
    /// other status (body discarded), or `FetchError::Transport` if the
    /// request never completed.
    fn get(&self, url: &Url) -> impl Future<Output = Result<String, FetchError>>;
}

/// `Fetcher` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    http: reqwest::Client,
}

impl ReqwestFetcher {
    /// Create a new fetcher with its own connection pool.
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn get(&self, url: &Url) -> Result<String, FetchError> {
        debug!(url = %redacted(url), "GET");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "non-200 response");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
