//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, InvalidGeoPoint, StationId};

/// Optional `lat`/`lon` pair.
///
/// Both or neither must be given.
fn reference_point(lat: Option<f64>, lon: Option<f64>) -> Result<Option<GeoPoint>, InvalidGeoPoint> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => GeoPoint::new(lat, lon).map(Some),
        (None, None) => Ok(None),
        _ => Err(InvalidGeoPoint::incomplete()),
    }
}

/// Query for the single-station screen.
#[derive(Debug, Default, Deserialize)]
pub struct StationQuery {
    /// Station to show instead of the pinned one
    pub station: Option<String>,

    /// User latitude
    pub lat: Option<f64>,

    /// User longitude
    pub lon: Option<f64>,
}

impl StationQuery {
    pub fn reference_point(&self) -> Result<Option<GeoPoint>, InvalidGeoPoint> {
        reference_point(self.lat, self.lon)
    }
}

/// Query for the list and widget screens.
#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl LocationQuery {
    pub fn reference_point(&self) -> Result<Option<GeoPoint>, InvalidGeoPoint> {
        reference_point(self.lat, self.lon)
    }
}

/// Query for the selection screen.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,

    /// Search text
    pub q: Option<String>,
}

impl SelectionQuery {
    pub fn reference_point(&self) -> Result<Option<GeoPoint>, InvalidGeoPoint> {
        reference_point(self.lat, self.lon)
    }
}

/// Query for the deeplink redirect.
#[derive(Debug, Deserialize)]
pub struct DeeplinkQuery {
    /// The full deeplink, e.g. `solingen://sensorstation/detail?station=abc`
    pub url: String,
}

/// Request to pin a station.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectStationRequest {
    pub station_id: String,
}

/// Response after pinning a station.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectStationResponse {
    pub station_id: StationId,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
