//! In-memory fetcher for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use reqwest::Url;

use super::error::FetchError;
use super::fetcher::Fetcher;

/// Canned upstream behaviour for one path.
#[derive(Debug, Clone)]
pub enum Canned {
    Body(String),
    Status(u16),
}

/// Fetcher that serves canned responses keyed by URL path.
///
/// Unknown paths answer 404. Every requested URL is recorded, and clones
/// share the same responses and request log.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    responses: Arc<HashMap<String, Canned>>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, path: &str, body: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.responses).insert(path.to_string(), Canned::Body(body.into()));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        Arc::make_mut(&mut self.responses).insert(path.to_string(), Canned::Status(status));
        self
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetcher for StaticFetcher {
    async fn get(&self, url: &Url) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.clone());

        match self.responses.get(url.path()) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(FetchError::HttpStatus { status: *status }),
            None => Err(FetchError::HttpStatus { status: 404 }),
        }
    }
}
