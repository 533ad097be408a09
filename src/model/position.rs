use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    /// Creates a position, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self, ValidationError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::InvalidLatitude(lat.to_string()));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(ValidationError::InvalidLongitude(lng.to_string()));
        }
        Ok(Self { lat, lng })
    }

    /// Returns this position shifted by the given deltas.
    ///
    /// Latitude is clamped at the poles; longitude wraps around the
    /// antimeridian.
    pub fn moved_by(self, d_lat: f64, d_lng: f64) -> Self {
        let lat = (self.lat + d_lat).clamp(-90.0, 90.0);
        let mut lng = self.lng + d_lng;
        if lng > 180.0 {
            lng -= 360.0;
        } else if lng < -180.0 {
            lng += 360.0;
        }
        Self { lat, lng }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { lat: 0.0, lng: 0.0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.lat < 0.0 { 'S' } else { 'N' };
        let ew = if self.lng < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.2}°{ns} {:.2}°{ew}",
            self.lat.abs(),
            self.lng.abs()
        )
    }
}
