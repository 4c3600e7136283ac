//! Coordinate to grid locator conversion command
//!
//! This module implements the command behind `--latlong`: parse a
//! "lat,long" pair and report its full 8-character locator.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::grid::errors::{GridError, GridResult};
use crate::grid::locator::GridLocator;
use crate::utils::logger::Logger;
use crate::utils::parse_utils::parse_latlong;

/// Command for converting a lat/long pair to a grid locator
pub struct ToGridCommand<'a> {
    /// The "lat,long" string given on the command line
    latlong: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ToGridCommand<'a> {
    /// Create a new conversion command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ToGridCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GridResult<Self> {
        let latlong = args
            .get_one::<String>("latlong")
            .ok_or_else(|| GridError::GenericError("Missing lat/long pair".to_string()))?
            .clone();

        Ok(ToGridCommand { latlong, logger })
    }
}

impl<'a> Command for ToGridCommand<'a> {
    fn execute(&self) -> GridResult<()> {
        debug!("Converting coordinate: {}", self.latlong);

        let latlong = parse_latlong(&self.latlong)?;
        let grid = GridLocator::from_latlong(latlong);
        info!("{} = {}", latlong, grid);

        self.logger
            .log(&format!("Converted {} to {}", latlong, grid))?;

        Ok(())
    }
}
