//! Display formatting for station observations.
//!
//! Turns raw measurements into the strings the screens show: numbers with
//! German separators, wind bearings as compass points, sunrise times in local
//! time, and the per-measurement cells of the station screen.

mod cells;
mod labels;
mod number;
mod wind;

use chrono::{FixedOffset, Offset, Utc};

pub use cells::{WeatherCell, format_value, station_cells};
pub use labels::{
    RAIN_THRESHOLD, air_pressure_label, distance_label, is_raining, observed_label, rain_label, temperature_label,
    wind_speed_label,
};
pub use number::{NOT_AVAILABLE, NumberFormat, format_number};
pub use wind::CompassPoint;

/// Formatting settings, passed explicitly to every formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    pub number: NumberFormat,
    /// Offset used to show timestamps as local wall-clock time.
    pub utc_offset: FixedOffset,
}

impl FormatConfig {
    pub fn new(number: NumberFormat, utc_offset: FixedOffset) -> Self {
        Self { number, utc_offset }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            number: NumberFormat::german(),
            // Central European Time
            utc_offset: FixedOffset::east_opt(3600).unwrap_or_else(|| Utc.fix()),
        }
    }
}
