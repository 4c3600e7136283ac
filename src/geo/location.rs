//! Location endpoints for distance calculations

use std::fmt;

use crate::grid::coordinate::LatLong;
use crate::grid::locator::GridLocator;

/// Either a grid locator or a raw coordinate
///
/// Distance calculations accept both endpoint kinds independently; a
/// grid endpoint contributes the center of its cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// A grid locator, measured from its cell center
    Grid(GridLocator),
    /// A raw latitude/longitude pair
    LatLong(LatLong),
}

impl Location {
    /// Get the coordinate this endpoint resolves to
    pub fn latlong(&self) -> LatLong {
        match self {
            Location::Grid(grid) => grid.center(),
            Location::LatLong(latlong) => *latlong,
        }
    }
}

impl From<GridLocator> for Location {
    fn from(grid: GridLocator) -> Self {
        Location::Grid(grid)
    }
}

impl From<LatLong> for Location {
    fn from(latlong: LatLong) -> Self {
        Location::LatLong(latlong)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Grid(grid) => write!(f, "{}", grid),
            Location::LatLong(latlong) => write!(f, "{}", latlong),
        }
    }
}
