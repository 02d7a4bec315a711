//! Lookup and application error types.

use crate::config::ConfigError;
use crate::http::{FetchError, UrlError};

/// Errors from the postcode and stop point lookups.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The request URL could not be built
    #[error(transparent)]
    InvalidUrl(#[from] UrlError),

    /// Fetching the postcode location failed
    #[error("failed to make GET request while getting location for postcode: {0}")]
    Location(#[source] FetchError),

    /// Fetching nearby stop points failed
    #[error("failed to make GET request while getting nearest stop points: {0}")]
    Stops(#[source] FetchError),

    /// Upstream answered 200 but the body did not match the expected schema
    #[error("malformed {api} response: {message}")]
    MalformedResponse { api: &'static str, message: String },
}

impl LookupError {
    /// Returns the HTTP status behind a failed fetch, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::Location(e) | LookupError::Stops(e) => e.status(),
            _ => None,
        }
    }
}

/// Top-level errors surfaced by the binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("no postcode entered")]
    EmptyPostcode,

    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The HTTP client could not be created
    #[error("HTTP client setup failed: {0}")]
    Client(#[from] FetchError),
}

impl AppError {
    /// True when the postcode lookup answered 404, i.e. the postcode is unknown.
    pub fn is_unknown_postcode(&self) -> bool {
        matches!(self, AppError::Lookup(e @ LookupError::Location(_)) if e.status() == Some(404))
    }
}
