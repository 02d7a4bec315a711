//! Startup configuration read from the environment.
//!
//! | Variable             | Required | Default                    |
//! |----------------------|----------|----------------------------|
//! | `TFL_APP_ID`         | yes      |                            |
//! | `TFL_APP_KEY`        | yes      |                            |
//! | `POSTCODES_BASE_URL` | no       | `https://api.postcodes.io` |
//! | `TFL_BASE_URL`       | no       | `https://api.tfl.gov.uk`   |
//! | `STOP_COUNT`         | no       | `5`                        |

use crate::postcodes::PostcodeClientConfig;
use crate::tfl::StopPointClientConfig;

/// Number of stops printed when `STOP_COUNT` is not set.
pub const DEFAULT_STOP_COUNT: usize = 5;

/// Errors from loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("environment variable {var} must be set")]
    Missing { var: &'static str },

    /// `STOP_COUNT` is not a non-negative integer
    #[error("STOP_COUNT must be a non-negative integer, got {0:?}")]
    InvalidStopCount(String),
}

/// Everything the application needs to run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub postcodes: PostcodeClientConfig,
    pub stops: StopPointClientConfig,
    /// How many stop points to print.
    pub stop_count: usize,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to read each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |var: &'static str| get(var).ok_or(ConfigError::Missing { var });

        let app_id = require("TFL_APP_ID")?;
        let app_key = require("TFL_APP_KEY")?;

        let mut stops = StopPointClientConfig::new(app_id, app_key);
        if let Some(url) = get("TFL_BASE_URL") {
            stops = stops.with_base_url(url);
        }

        let mut postcodes = PostcodeClientConfig::new();
        if let Some(url) = get("POSTCODES_BASE_URL") {
            postcodes = postcodes.with_base_url(url);
        }

        let stop_count = match get("STOP_COUNT") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidStopCount(raw))?,
            None => DEFAULT_STOP_COUNT,
        };

        Ok(Self {
            postcodes,
            stops,
            stop_count,
        })
    }
}
