use log::debug;

use crate::geo::great_circle::distance_and_bearing;
use crate::grid::coordinate::LatLong;
use crate::grid::errors::GridResult;
use crate::grid::locator::GridLocator;
use crate::utils::logger::Logger;
use crate::utils::parse_utils::parse_location;

/// Main interface to the GridKit library
pub struct GridKit {
    logger: Logger,
}

impl GridKit {
    /// Create a new GridKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "gridkit.log"
    ///
    /// # Returns
    /// A GridKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> GridResult<Self> {
        let log_path = log_file.unwrap_or("gridkit.log");
        let logger = Logger::new(log_path)?;
        Ok(GridKit { logger })
    }

    /// Convert a grid locator string to the center of its cell
    ///
    /// # Arguments
    /// * `code` - 2, 4, 6, or 8 character locator, any case
    ///
    /// # Returns
    /// The cell-center coordinate, or an error for a malformed locator
    pub fn locator_to_latlong(&self, code: &str) -> GridResult<LatLong> {
        let grid = GridLocator::from_code(code)?;
        self.logger
            .log(&format!("Converted {} to {}", grid, grid.center()))?;
        Ok(grid.center())
    }

    /// Convert a coordinate to its full 8-character grid locator
    ///
    /// # Arguments
    /// * `lat` - Latitude in degrees, -90 to 90
    /// * `long` - Longitude in degrees, -180 to 180
    ///
    /// # Returns
    /// The locator, or an error for an out-of-range coordinate
    pub fn latlong_to_locator(&self, lat: f64, long: f64) -> GridResult<GridLocator> {
        let latlong = LatLong::new(lat, long)?;
        let grid = GridLocator::from_latlong(latlong);
        self.logger
            .log(&format!("Converted {} to {}", latlong, grid))?;
        Ok(grid)
    }

    /// Measure the great-circle distance and bearing between two locations
    ///
    /// Each endpoint may be a grid locator or a "lat,long" pair; grid
    /// endpoints are measured from their cell centers.
    ///
    /// # Arguments
    /// * `from` - The location from which to measure
    /// * `to` - The location to which to measure
    ///
    /// # Returns
    /// The distance in kilometres and the bearing in degrees
    pub fn distance(&self, from: &str, to: &str) -> GridResult<(f64, f64)> {
        let from = parse_location(from)?;
        let to = parse_location(to)?;

        let (distance, bearing) = distance_and_bearing(&from, &to);
        debug!("{} -> {}: {:.3} km at {:.3}°", from, to, distance, bearing);
        self.logger.log(&format!(
            "Measured {} -> {}: {:.1} km at {:.1}°",
            from, to, distance, bearing
        ))?;

        Ok((distance, bearing))
    }
}
