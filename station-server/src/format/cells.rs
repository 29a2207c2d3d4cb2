//! Measurement cells for the single-station screen.

use chrono::DateTime;
use serde::Serialize;

use crate::domain::{ObservedValue, ValueType, WeatherStation};

use super::number::{NOT_AVAILABLE, format_number};
use super::wind::CompassPoint;
use super::FormatConfig;

/// One tile on the station screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherCell {
    /// Bundled icon name used when the feed supplies no icon URL.
    pub icon: String,
    pub icon_url: Option<String>,
    pub title: String,
    /// Formatted value including unit; empty when the station sent none.
    pub value: String,
    pub value_type: ValueType,
}

/// Bundled icon for a measurement, or `None` if the screen skips it.
fn default_icon(observed: &ObservedValue) -> Option<String> {
    let icon = match &observed.value_type {
        ValueType::UvIndex => "sun.max".to_string(),
        ValueType::Precipitation => "cloud.rain".to_string(),
        ValueType::Humidity => "humidity".to_string(),
        ValueType::AirPressure => "barometer".to_string(),
        ValueType::WindSpeed => "wind".to_string(),
        ValueType::WindDirection => {
            let degrees = observed.value.unwrap_or(0.0);
            format!("location.north-{}", degrees.round() as i64)
        }
        ValueType::GlobalRadiation => "sun.min".to_string(),
        ValueType::WaterOnSurface | ValueType::WaterPlayground => "water.waves".to_string(),
        ValueType::SwimmingSignal => "person-swimming".to_string(),
        ValueType::Sunrise => "sunrise.fill".to_string(),
        ValueType::Sunset => "sunset.fill".to_string(),
        ValueType::Temperature | ValueType::Other(_) => return None,
    };
    Some(icon)
}

/// Format a single measurement for display, unit included.
///
/// Precipitation and wind speed keep one decimal, wind direction becomes a
/// compass point, the two status sensors become words, sunrise and sunset
/// become local `HH:MM`, and everything else is rounded to an integer.
pub fn format_value(observed: &ObservedValue, config: &FormatConfig) -> String {
    let Some(value) = observed.value else {
        return String::new();
    };

    let text = match observed.value_type {
        ValueType::Precipitation | ValueType::WindSpeed => format_number(value, 1, &config.number),
        ValueType::WindDirection => CompassPoint::from_degrees(value)
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ValueType::WaterPlayground => {
            let open = value == 1.0;
            (if open { "geöffnet" } else { "geschlossen" }).to_string()
        }
        ValueType::SwimmingSignal => {
            let allowed = value == 1.0;
            (if allowed { "Baden erlaubt" } else { "Baden verboten" }).to_string()
        }
        ValueType::Sunrise | ValueType::Sunset => sun_time(value, config),
        _ => format_number(value, 0, &config.number),
    };

    match &observed.unit {
        Some(unit) => format!("{text} {unit}"),
        None => text,
    }
}

fn sun_time(timestamp: f64, config: &FormatConfig) -> String {
    if !timestamp.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    match DateTime::from_timestamp(timestamp as i64, 0) {
        Some(dt) => dt.with_timezone(&config.utc_offset).format("%H:%M").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Capitalize the first letter of every word ("sonnenaufgang" -> "Sonnenaufgang").
fn capitalized(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell(observed: &ObservedValue, config: &FormatConfig) -> Option<WeatherCell> {
    let icon = default_icon(observed)?;
    let title = if observed.value_type.is_sun_cycle() {
        observed
            .name
            .as_deref()
            .map(capitalized)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    } else {
        observed.name.clone().unwrap_or_default()
    };

    Some(WeatherCell {
        icon,
        icon_url: observed.icon_url.clone(),
        title,
        value: format_value(observed, config),
        value_type: observed.value_type.clone(),
    })
}

/// Cells for every displayable measurement of `station`.
///
/// Weather values come first, then sunrise and sunset. Temperature is shown
/// in the header instead, and unknown measurement kinds are skipped.
pub fn station_cells(station: &WeatherStation, config: &FormatConfig) -> Vec<WeatherCell> {
    let (sun, weather): (Vec<&ObservedValue>, Vec<&ObservedValue>) = station
        .values
        .iter()
        .partition(|v| v.value_type.is_sun_cycle());

    weather
        .into_iter()
        .chain(sun)
        .filter_map(|v| cell(v, config))
        .collect()
}
