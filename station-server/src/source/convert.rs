//! Conversion from station dump DTOs to domain types.

use tracing::warn;

use crate::domain::{GeoPoint, ObservedValue, StationId, ValueType, WeatherStation};

use super::types::{StationDto, ValueDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse the station id
    #[error("invalid station id {id:?}: {reason}")]
    InvalidId { id: String, reason: String },
}

/// Convert every station in a dump, skipping the ones that can't be converted.
///
/// A bad record is logged and dropped rather than failing the whole fetch.
pub fn convert_stations(dtos: &[StationDto]) -> Vec<WeatherStation> {
    let mut stations = Vec::with_capacity(dtos.len());
    for (idx, dto) in dtos.iter().enumerate() {
        match convert_station(dto) {
            Ok(station) => stations.push(station),
            Err(e) => warn!(index = idx, error = %e, "skipping station record"),
        }
    }
    stations
}

/// Convert a single station record.
///
/// An out-of-range geopoint is dropped (the station just can't be ranked by
/// distance). Sun-cycle values are appended after the weather values.
pub fn convert_station(dto: &StationDto) -> Result<WeatherStation, ConversionError> {
    let raw_id = dto
        .object_id
        .as_deref()
        .ok_or(ConversionError::MissingField("objectId"))?;
    let id = StationId::parse(raw_id).map_err(|e| ConversionError::InvalidId {
        id: raw_id.to_string(),
        reason: e.to_string(),
    })?;

    let geopoint = dto.geopoint.as_ref().and_then(|g| {
        GeoPoint::new(g.latitude, g.longitude)
            .inspect_err(|e| warn!(station = %id, error = %e, "ignoring geopoint"))
            .ok()
    });

    let values = dto
        .value_array
        .as_ref()
        .map(|array| {
            array
                .weather_values
                .iter()
                .chain(&array.sun_cycle_values)
                .filter_map(convert_value)
                .collect()
        })
        .unwrap_or_default();

    Ok(WeatherStation {
        name: dto.name.clone().unwrap_or_default(),
        short_name: dto.short_name.clone(),
        city: dto.city.clone(),
        geopoint,
        date_observed: dto.date_observed.as_ref().map(|d| d.as_utc()),
        values,
        maintenance: dto.maintenance.unwrap_or(false),
        id,
    })
}

/// Values without a type can't be displayed and are skipped.
fn convert_value(dto: &ValueDto) -> Option<ObservedValue> {
    let value_type = ValueType::from_wire(dto.value_type.as_deref()?);
    Some(ObservedValue {
        value_type,
        name: dto.name.clone(),
        value: dto.value,
        unit: dto.unit.clone(),
        icon_url: dto.icon_url.clone(),
    })
}
