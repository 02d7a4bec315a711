//! Nearest public transport stops for a UK postcode.
//!
//! Asks for a postcode, resolves it to coordinates with postcodes.io, then
//! lists the closest bus, coach and tram stops from the TfL StopPoint API.

pub mod app;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod http;
pub mod postcodes;
pub mod tfl;
