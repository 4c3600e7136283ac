//! Grid locator to coordinate conversion command
//!
//! This module implements the command behind `--grid`: parse a
//! locator and report the lat/long center of its cell.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::grid::errors::{GridError, GridResult};
use crate::grid::locator::GridLocator;
use crate::utils::logger::Logger;

/// Command for converting a grid locator to a lat/long pair
pub struct ToLatLongCommand<'a> {
    /// The locator string given on the command line
    locator: String,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ToLatLongCommand<'a> {
    /// Create a new conversion command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ToLatLongCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GridResult<Self> {
        let locator = args
            .get_one::<String>("grid")
            .ok_or_else(|| GridError::GenericError("Missing grid locator".to_string()))?
            .clone();

        let verbose = args.get_flag("verbose");

        Ok(ToLatLongCommand {
            locator,
            verbose,
            logger,
        })
    }
}

impl<'a> Command for ToLatLongCommand<'a> {
    fn execute(&self) -> GridResult<()> {
        debug!("Converting locator: {}", self.locator);

        let grid = GridLocator::from_code(&self.locator)?;
        info!("{} = {}", grid, grid.center());

        if self.verbose {
            let (cell_lon, cell_lat) = grid.precision().cell_size();
            info!("  Precision: {:?} ({} characters)", grid.precision(), grid.code().len());
            info!("  Cell size: {:.6}° x {:.6}°", cell_lon, cell_lat);
        }

        self.logger
            .log(&format!("Converted {} to {}", grid, grid.center()))?;

        Ok(())
    }
}
