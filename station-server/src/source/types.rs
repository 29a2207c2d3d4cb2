//! Station dump DTOs.
//!
//! These types map directly to the JSON the station data service returns.
//! Almost every field is optional because the service omits fields it has
//! no value for.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level document: either `{"results": [...]}` or a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StationDump {
    Plain(Vec<StationDto>),
    Wrapped { results: Vec<StationDto> },
}

impl StationDump {
    pub fn into_stations(self) -> Vec<StationDto> {
        match self {
            StationDump::Plain(stations) => stations,
            StationDump::Wrapped { results } => results,
        }
    }
}

/// One station as delivered by the data service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    /// Opaque station identifier.
    pub object_id: Option<String>,

    pub name: Option<String>,

    /// Abbreviated name used in lists, e.g. "Ohligs".
    pub short_name: Option<String>,

    pub city: Option<String>,

    pub geopoint: Option<GeoPointDto>,

    /// When the observations were taken.
    pub date_observed: Option<DateDto>,

    pub value_array: Option<ValueArrayDto>,

    /// Whether the station is currently under maintenance.
    pub maintenance: Option<bool>,
}

/// Raw coordinates, validated during conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoPointDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// A timestamp, either a plain ISO 8601 string or a `{"__type": "Date", "iso": ...}` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DateDto {
    Iso(DateTime<Utc>),
    Tagged { iso: DateTime<Utc> },
}

impl DateDto {
    pub fn as_utc(&self) -> DateTime<Utc> {
        match self {
            DateDto::Iso(dt) | DateDto::Tagged { iso: dt } => *dt,
        }
    }
}

/// Observations grouped by kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueArrayDto {
    #[serde(default)]
    pub weather_values: Vec<ValueDto>,

    /// Sunrise and sunset as unix timestamps.
    #[serde(default)]
    pub sun_cycle_values: Vec<ValueDto>,
}

/// A single measurement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueDto {
    /// Measurement kind, e.g. "temperature" or "windSpeed".
    #[serde(rename = "type")]
    pub value_type: Option<String>,

    /// Display name, e.g. "Luftfeuchtigkeit".
    pub name: Option<String>,

    pub value: Option<f64>,

    pub unit: Option<String>,

    pub icon_url: Option<String>,
}
