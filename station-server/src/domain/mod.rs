//! Domain types for the weather station screens.
//!
//! These types represent validated station data. Identifiers and
//! coordinates enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod geo;
mod station;
mod value;

pub use geo::{EARTH_RADIUS_METERS, GeoPoint, InvalidGeoPoint};
pub use station::{InvalidStationId, StationId, WeatherStation};
pub use value::{ObservedValue, ValueType};
