use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Bounding box `(left, top, right, bottom)` of `delta` degrees around
    /// this point, as place-search services expect it.
    pub fn search_viewbox(&self, delta: f64) -> (f64, f64, f64, f64) {
        (
            self.lon - delta,
            self.lat + delta,
            self.lon + delta,
            self.lat - delta,
        )
    }
}

/// Parses `"lat,lon"`.
impl FromStr for Coordinate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidCoordinate(s.to_string());

        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

        if !lat.is_finite() || !lon.is_finite() || lat.abs() > 90.0 || lon.abs() > 180.0 {
            return Err(invalid());
        }

        Ok(Coordinate { lat, lon })
    }
}
