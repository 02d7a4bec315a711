//! URL construction.

use reqwest::Url;

use super::error::UrlError;

/// Query parameter names whose values are never written to logs.
const SECRET_PARAMETERS: &[&str] = &["app_key"];

/// A single query-string pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    pub name: String,
    pub value: String,
}

impl QueryParameter {
    /// Create a parameter from anything string-like for the name and
    /// anything displayable for the value (numbers are formatted as-is).
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// Build an absolute URL from a base, a relative endpoint and query parameters.
///
/// The endpoint is resolved against `base_url` with standard URL resolution
/// rules, so `("https://api.postcodes.io", "postcodes/SW1A1AA")` yields
/// `https://api.postcodes.io/postcodes/SW1A1AA`. Parameters are appended in
/// order, with both name and value form-encoded.
pub fn build_url(
    base_url: &str,
    endpoint: &str,
    parameters: &[QueryParameter],
) -> Result<Url, UrlError> {
    let base = Url::parse(base_url).map_err(|e| UrlError::InvalidUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    let mut url = base.join(endpoint).map_err(|e| UrlError::InvalidUrl {
        url: base_url.to_string(),
        message: format!("cannot resolve endpoint {endpoint:?}: {e}"),
    })?;

    // An empty serializer would still leave a trailing '?'
    if !parameters.is_empty() {
        url.query_pairs_mut().extend_pairs(
            parameters
                .iter()
                .map(|p| (p.name.as_str(), p.value.as_str())),
        );
    }

    Ok(url)
}

/// Render a URL for logging with secret query values masked.
pub fn redacted(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if SECRET_PARAMETERS.contains(&name.as_ref()) {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
