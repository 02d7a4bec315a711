//! Outbound HTTP plumbing shared by the upstream API clients.
//!
//! Provides URL construction from a base URL, a relative endpoint and
//! ordered query parameters, and a minimal GET-only transport abstraction.

mod error;
mod fetcher;
#[cfg(test)]
pub(crate) mod mock;
mod url;

pub use error::{FetchError, UrlError};
pub use fetcher::{Fetcher, ReqwestFetcher};
pub use url::{QueryParameter, build_url, redacted};
