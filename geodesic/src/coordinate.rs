use std::fmt;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Returns the same point with its longitude wrapped into [-180, 180].
    ///
    /// Values already inside the range (including both bounds) are returned
    /// unchanged.
    pub fn normalized(self) -> Self {
        if (-180.0..=180.0).contains(&self.lon) || !self.lon.is_finite() {
            return self;
        }
        let wrapped = (self.lon + 180.0).rem_euclid(360.0) - 180.0;
        Self {
            lat: self.lat,
            lon: wrapped,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
