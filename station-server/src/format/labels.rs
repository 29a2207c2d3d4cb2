//! Short labels for list rows, widget cells and the station header.

use chrono::{DateTime, Days, FixedOffset, Utc};

use crate::domain::{ValueType, WeatherStation};

use super::number::{NOT_AVAILABLE, format_number};
use super::FormatConfig;

/// Precipitation above this counts as raining (same unit as the feed).
pub const RAIN_THRESHOLD: f64 = 0.3;

/// Value and unit of the first observation of `value_type`, if both are set.
fn value_with_unit<'a>(station: &'a WeatherStation, value_type: &ValueType) -> Option<(f64, &'a str)> {
    let observed = station.value_of(value_type)?;
    Some((observed.value?, observed.unit.as_deref()?))
}

fn spaced_label(station: &WeatherStation, value_type: &ValueType, config: &FormatConfig) -> String {
    match value_with_unit(station, value_type) {
        Some((value, unit)) => format!("{} {unit}", format_number(value, 1, &config.number)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Temperature with one decimal and the unit attached, e.g. `21,5°C`.
pub fn temperature_label(station: &WeatherStation, config: &FormatConfig) -> String {
    match value_with_unit(station, &ValueType::Temperature) {
        Some((value, unit)) => format!("{}{unit}", format_number(value, 1, &config.number)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Precipitation, e.g. `0,4 mm`.
pub fn rain_label(station: &WeatherStation, config: &FormatConfig) -> String {
    spaced_label(station, &ValueType::Precipitation, config)
}

/// Wind speed, e.g. `3,2 m/s`.
pub fn wind_speed_label(station: &WeatherStation, config: &FormatConfig) -> String {
    spaced_label(station, &ValueType::WindSpeed, config)
}

/// Air pressure, e.g. `1.013,2 hPa`.
pub fn air_pressure_label(station: &WeatherStation, config: &FormatConfig) -> String {
    spaced_label(station, &ValueType::AirPressure, config)
}

/// Distance in kilometres with one decimal, e.g. `1,2 km`.
pub fn distance_label(meters: f64, config: &FormatConfig) -> String {
    format!("{} km", format_number(meters / 1000.0, 1, &config.number))
}

/// Whether current precipitation is above [`RAIN_THRESHOLD`].
pub fn is_raining(station: &WeatherStation) -> bool {
    station
        .value_of(&ValueType::Precipitation)
        .and_then(|v| v.value)
        .is_some_and(|v| v > RAIN_THRESHOLD)
}

/// When the observation was taken, relative to `now`.
///
/// `Heute, 14:05 Uhr`, `Gestern, 23:50 Uhr`, or `03.05.2024, 08:00 Uhr`
/// for anything older, all in the configured local offset.
pub fn observed_label(observed: DateTime<Utc>, now: DateTime<Utc>, offset: FixedOffset) -> String {
    let observed = observed.with_timezone(&offset);
    let today = now.with_timezone(&offset).date_naive();
    let time = observed.format("%H:%M");

    if observed.date_naive() == today {
        format!("Heute, {time} Uhr")
    } else if today.checked_sub_days(Days::new(1)) == Some(observed.date_naive()) {
        format!("Gestern, {time} Uhr")
    } else {
        format!("{} Uhr", observed.format("%d.%m.%Y, %H:%M"))
    }
}
