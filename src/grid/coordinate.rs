//! Latitude/longitude value type

use std::fmt;

use crate::grid::errors::{GridError, GridResult};
use crate::grid::validation::check_coordinate;

/// A validated latitude/longitude pair in degrees
///
/// The pair is checked as a whole on construction and on every update,
/// so an instance can never be observed holding an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLong {
    /// Latitude in degrees, -90 to 90
    lat: f64,
    /// Longitude in degrees, -180 to 180
    long: f64,
}

impl LatLong {
    /// Create a new coordinate pair
    ///
    /// # Arguments
    /// * `lat` - Latitude in degrees, -90 to 90 inclusive
    /// * `long` - Longitude in degrees, -180 to 180 inclusive
    ///
    /// # Returns
    /// The validated pair, or `GridError::InvalidCoordinate` if either
    /// value is out of range
    pub fn new(lat: f64, long: f64) -> GridResult<Self> {
        if !check_coordinate(lat, long) {
            return Err(GridError::InvalidCoordinate(lat, long));
        }
        Ok(LatLong { lat, long })
    }

    /// Build a pair from values already known to be in range
    ///
    /// Used by the locator decoder, whose arithmetic cannot leave the
    /// valid ranges for any canonical locator.
    pub(crate) fn from_parts(lat: f64, long: f64) -> Self {
        debug_assert!(check_coordinate(lat, long));
        LatLong { lat, long }
    }

    /// Get the latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Get the longitude in degrees
    pub fn long(&self) -> f64 {
        self.long
    }

    /// Replace the latitude, keeping the current longitude
    ///
    /// The pair is re-validated as a whole; on failure the value is
    /// left unchanged.
    ///
    /// # Arguments
    /// * `lat` - The new latitude in degrees
    pub fn set_lat(&mut self, lat: f64) -> GridResult<()> {
        if !check_coordinate(lat, self.long) {
            return Err(GridError::InvalidCoordinate(lat, self.long));
        }
        self.lat = lat;
        Ok(())
    }

    /// Replace the longitude, keeping the current latitude
    ///
    /// The pair is re-validated as a whole; on failure the value is
    /// left unchanged.
    ///
    /// # Arguments
    /// * `long` - The new longitude in degrees
    pub fn set_long(&mut self, long: f64) -> GridResult<()> {
        if !check_coordinate(self.lat, long) {
            return Err(GridError::InvalidCoordinate(self.lat, long));
        }
        self.long = long;
        Ok(())
    }

    /// Return a copy with the latitude replaced
    pub fn with_lat(&self, lat: f64) -> GridResult<Self> {
        LatLong::new(lat, self.long)
    }

    /// Return a copy with the longitude replaced
    pub fn with_long(&self, long: f64) -> GridResult<Self> {
        LatLong::new(self.lat, long)
    }
}

impl fmt::Display for LatLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°, {:.6}°", self.lat, self.long)
    }
}
