//! TfL StopPoint response DTOs.

use serde::Deserialize;

use crate::domain::StopPoint;

/// Response from `GET /StopPoint?lat=..&lon=..`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointsResponse {
    pub stop_points: Vec<StopPointDto>,
}

/// Minimal DTO for a stop point - we only need the id and name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointDto {
    pub naptan_id: String,
    pub common_name: String,
}

impl From<StopPointDto> for StopPoint {
    fn from(dto: StopPointDto) -> Self {
        StopPoint::new(dto.naptan_id, dto.common_name)
    }
}
