//! Transport for London StopPoint search client.
//!
//! Finds the public bus, coach and tram stops within a fixed radius of a
//! coordinate. TfL returns matches nearest-first.

mod client;
mod types;

pub use client::{
    DEFAULT_BASE_URL, SEARCH_RADIUS_METRES, STOP_TYPES, StopPointClient, StopPointClientConfig,
};
pub use types::{StopPointDto, StopPointsResponse};
