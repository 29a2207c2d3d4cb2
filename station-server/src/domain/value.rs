//! Observed measurement types.

use std::fmt;

use serde::{Serialize, Serializer};

/// The kind of measurement a station reports.
///
/// Unknown kinds are kept as [`ValueType::Other`] so new sensor types in the
/// station feed never fail a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Temperature,
    Precipitation,
    Humidity,
    AirPressure,
    WindSpeed,
    WindDirection,
    UvIndex,
    GlobalRadiation,
    WaterOnSurface,
    WaterPlayground,
    SwimmingSignal,
    Sunrise,
    Sunset,
    Other(String),
}

impl ValueType {
    /// Parse the feed's identifier for a measurement kind.
    ///
    /// ```
    /// use station_server::domain::ValueType;
    ///
    /// assert_eq!(ValueType::from_wire("windSpeed"), ValueType::WindSpeed);
    /// assert_eq!(ValueType::from_wire("pollen"), ValueType::Other("pollen".into()));
    /// ```
    pub fn from_wire(s: &str) -> Self {
        match s {
            "temperature" => Self::Temperature,
            "precipitation" => Self::Precipitation,
            "humidity" => Self::Humidity,
            "airPressure" => Self::AirPressure,
            "windSpeed" => Self::WindSpeed,
            "windDirection" => Self::WindDirection,
            "uvIndex" => Self::UvIndex,
            "globalRadiation" => Self::GlobalRadiation,
            "waterOnSurface" => Self::WaterOnSurface,
            "waterPlayground" => Self::WaterPlayground,
            "swimmingSignal" => Self::SwimmingSignal,
            "sunrise" => Self::Sunrise,
            "sunset" => Self::Sunset,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Temperature => "temperature",
            Self::Precipitation => "precipitation",
            Self::Humidity => "humidity",
            Self::AirPressure => "airPressure",
            Self::WindSpeed => "windSpeed",
            Self::WindDirection => "windDirection",
            Self::UvIndex => "uvIndex",
            Self::GlobalRadiation => "globalRadiation",
            Self::WaterOnSurface => "waterOnSurface",
            Self::WaterPlayground => "waterPlayground",
            Self::SwimmingSignal => "swimmingSignal",
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::Other(s) => s,
        }
    }

    /// Whether this is a sun-cycle entry (value is a unix timestamp).
    pub fn is_sun_cycle(&self) -> bool {
        matches!(self, Self::Sunrise | Self::Sunset)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single measurement reported by a station.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedValue {
    pub value_type: ValueType,
    /// Display name supplied by the feed (e.g. "Luftdruck").
    pub name: Option<String>,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub icon_url: Option<String>,
}

impl ObservedValue {
    /// Create a value with no name, unit or icon.
    pub fn new(value_type: ValueType, value: Option<f64>) -> Self {
        Self {
            value_type,
            name: None,
            value,
            unit: None,
            icon_url: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
