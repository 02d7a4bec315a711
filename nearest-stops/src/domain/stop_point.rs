//! Public transport stop points.

/// A bus, coach or tram stop as reported by the transit API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopPoint {
    /// NaPTAN identifier of the stop.
    pub id: String,
    /// Human-readable stop name.
    pub common_name: String,
}

impl StopPoint {
    pub fn new(id: impl Into<String>, common_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            common_name: common_name.into(),
        }
    }
}

/// Keep the first `count` stops, preserving upstream order.
///
/// Upstream results are already nearest-first, so no sorting happens here.
/// Asking for more stops than exist returns all of them.
pub fn nearest(mut stops: Vec<StopPoint>, count: usize) -> Vec<StopPoint> {
    stops.truncate(count);
    stops
}
