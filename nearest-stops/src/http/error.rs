//! HTTP layer error types.

/// Error returned when a URL cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    /// Base URL is not a valid absolute URL, or the endpoint cannot be
    /// resolved against it.
    #[error("invalid URL {url:?}: {message}")]
    InvalidUrl { url: String, message: String },
}

/// Errors from a single GET request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network failure (DNS, connection, TLS, body read, etc.)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with something other than 200
    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },
}

impl FetchError {
    /// Returns the HTTP status code, if this is a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "HTTP status 404");
        assert_eq!(err.status(), Some(404));

        let err = UrlError::InvalidUrl {
            url: "not a url".into(),
            message: "relative URL without a base".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid URL \"not a url\": relative URL without a base"
        );
    }
}
