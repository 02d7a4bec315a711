//! Domain types for the nearest-stop lookup.
//!
//! Values here are validated at construction and never mutated afterwards.

mod coordinate;
mod postcode;
mod stop_point;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use postcode::Postcode;
pub use stop_point::{StopPoint, nearest};
