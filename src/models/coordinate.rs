//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

const MAX_LAT: f64 = 90.0;
const MAX_LON: f64 = 180.0;

/// A latitude/longitude pair in degrees.
///
/// Construction validates the bounds, so every `Coordinate` in hand satisfies
/// `lat ∈ [-90, 90]` and `lon ∈ [-180, 180]`. Serializes as `[lat, lon]`.
///
/// # Examples
///
/// ```
/// use u_georoute::models::Coordinate;
///
/// let seoul = Coordinate::new(37.5665, 126.9780).unwrap();
/// assert_eq!(seoul.lat(), 37.5665);
/// assert_eq!(seoul.lon(), 126.9780);
///
/// assert!(Coordinate::new(91.0, 0.0).is_none());
/// assert!(Coordinate::new(0.0, -180.5).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    ///
    /// Returns `None` if either value is non-finite or out of range.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        if !(-MAX_LAT..=MAX_LAT).contains(&lat) || !(-MAX_LON..=MAX_LON).contains(&lon) {
            return None;
        }
        Some(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = Error;

    fn try_from([lat, lon]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(lat, lon).ok_or(Error::InvalidCoordinate { lat, lon })
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lat, c.lon]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}
