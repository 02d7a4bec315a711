//! postcodes.io response DTOs.
//!
//! Only the fields we read are declared; everything else in the payload
//! is ignored.

use serde::Deserialize;

/// Response from `GET /postcodes/{postcode}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeResponse {
    pub result: PostcodeResult,
}

/// The `result` object of a successful lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeResult {
    pub latitude: f64,
    pub longitude: f64,
}
