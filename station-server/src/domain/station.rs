//! Weather station types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::geo::GeoPoint;
use super::value::{ObservedValue, ValueType};

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// Identifier of a weather station as issued by the station feed.
///
/// Ids are opaque strings. Surrounding whitespace is trimmed and empty ids
/// are rejected, so any `StationId` can be used as a lookup key.
///
/// # Examples
///
/// ```
/// use station_server::domain::StationId;
///
/// let id = StationId::parse(" O9ukYZqbSE ").unwrap();
/// assert_eq!(id.as_str(), "O9ukYZqbSE");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }
        if trimmed.chars().any(char::is_control) {
            return Err(InvalidStationId {
                reason: "must not contain control characters",
            });
        }
        Ok(StationId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A weather station together with its latest observations.
///
/// Stations are owned by the station feed; screens only read them.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherStation {
    pub id: StationId,
    pub name: String,
    pub short_name: Option<String>,
    pub city: Option<String>,
    pub geopoint: Option<GeoPoint>,
    /// When the observations were taken.
    pub date_observed: Option<DateTime<Utc>>,
    /// Weather values followed by sun-cycle values, in feed order.
    pub values: Vec<ObservedValue>,
    pub maintenance: bool,
}

impl WeatherStation {
    /// Create a station with only an id and name.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: None,
            city: None,
            geopoint: None,
            date_observed: None,
            values: Vec::new(),
            maintenance: false,
        }
    }

    /// First observation of the given kind, if any.
    pub fn value_of(&self, value_type: &ValueType) -> Option<&ObservedValue> {
        self.values.iter().find(|v| &v.value_type == value_type)
    }

    /// Short name if set, else the full name.
    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }

    /// Header title: the city when known, otherwise the station's own name.
    pub fn title(&self) -> &str {
        match &self.city {
            Some(city) => city.as_str(),
            None => self.display_name(),
        }
    }

    /// Header subtitle, only shown when the title is the city.
    pub fn detailed_title(&self) -> Option<&str> {
        self.city.as_ref().map(|_| self.display_name())
    }

    /// Distance in meters from `point`, when the station has a location.
    pub fn distance_from(&self, point: &GeoPoint) -> Option<f64> {
        self.geopoint.map(|g| g.distance_meters(point))
    }
}
