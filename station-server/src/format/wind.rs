//! Wind direction bucketing.

use std::fmt;

/// One of the 16 points of the compass rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassPoint {
    /// All points clockwise from north.
    pub const ALL: [CompassPoint; 16] = [
        CompassPoint::N,
        CompassPoint::Nne,
        CompassPoint::Ne,
        CompassPoint::Ene,
        CompassPoint::E,
        CompassPoint::Ese,
        CompassPoint::Se,
        CompassPoint::Sse,
        CompassPoint::S,
        CompassPoint::Ssw,
        CompassPoint::Sw,
        CompassPoint::Wsw,
        CompassPoint::W,
        CompassPoint::Wnw,
        CompassPoint::Nw,
        CompassPoint::Nnw,
    ];

    /// Bucket a bearing in degrees. Each point covers 22.5°, centred on it.
    ///
    /// ```
    /// use station_server::format::CompassPoint;
    ///
    /// assert_eq!(CompassPoint::from_degrees(0.0), Some(CompassPoint::N));
    /// assert_eq!(CompassPoint::from_degrees(350.0), Some(CompassPoint::N));
    /// assert_eq!(CompassPoint::from_degrees(225.0), Some(CompassPoint::Sw));
    /// ```
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }
        let normalized = degrees.rem_euclid(360.0);
        let idx = ((normalized + 11.25) / 22.5).floor() as usize % 16;
        Some(Self::ALL[idx])
    }

    /// German abbreviation (O for Ost).
    pub fn label(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::Nne => "NNO",
            CompassPoint::Ne => "NO",
            CompassPoint::Ene => "ONO",
            CompassPoint::E => "O",
            CompassPoint::Ese => "OSO",
            CompassPoint::Se => "SO",
            CompassPoint::Sse => "SSO",
            CompassPoint::S => "S",
            CompassPoint::Ssw => "SSW",
            CompassPoint::Sw => "SW",
            CompassPoint::Wsw => "WSW",
            CompassPoint::W => "W",
            CompassPoint::Wnw => "WNW",
            CompassPoint::Nw => "NW",
            CompassPoint::Nnw => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
