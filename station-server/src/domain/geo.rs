//! Geographic coordinates and great-circle distance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for distance calculations.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Error returned when a latitude/longitude pair is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid geopoint: {reason}")]
pub struct InvalidGeoPoint {
    reason: &'static str,
}

/// A latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use station_server::domain::GeoPoint;
///
/// let solingen = GeoPoint::new(51.1652, 7.0671).unwrap();
/// assert_eq!(solingen.latitude(), 51.1652);
///
/// // Latitude must be within [-90, 90]
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

/// Unvalidated wire form; validation happens in `TryFrom`.
#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl InvalidGeoPoint {
    /// Only one of latitude and longitude was given.
    pub fn incomplete() -> Self {
        Self {
            reason: "latitude and longitude must be given together",
        }
    }
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = InvalidGeoPoint;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    /// Solingen city centre, the location used when the user's is unknown.
    pub const SOLINGEN: GeoPoint = GeoPoint {
        latitude: 51.1652,
        longitude: 7.0671,
    };

    /// Create a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidGeoPoint> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidGeoPoint {
                reason: "coordinates must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidGeoPoint {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidGeoPoint {
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in meters (haversine formula).
    pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        // Rounding can push `a` fractionally above 1 for antipodal points
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_METERS * c
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_point() -> impl Strategy<Value = GeoPoint> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon).unwrap())
    }

    proptest! {
        /// Distance is symmetric
        #[test]
        fn symmetric(a in any_point(), b in any_point()) {
            let ab = a.distance_meters(&b);
            let ba = b.distance_meters(&a);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        /// Distance never exceeds half the circumference
        #[test]
        fn bounded(a in any_point(), b in any_point()) {
            let d = a.distance_meters(&b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_METERS + 1e-6);
        }
    }
}
