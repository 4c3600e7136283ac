//! Great-circle distance and bearing command
//!
//! This module implements the command behind `--distance`: parse two
//! locations, each given as a grid locator or a "lat,long" pair, and
//! report the distance and initial bearing between them.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::geo::great_circle::distance_and_bearing;
use crate::grid::errors::{GridError, GridResult};
use crate::utils::logger::Logger;
use crate::utils::parse_utils::parse_location;

/// Command for measuring the distance and bearing between two locations
pub struct DistanceCommand<'a> {
    /// The two location strings given on the command line
    locations: Vec<String>,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DistanceCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GridResult<Self> {
        let locations: Vec<String> = args
            .get_many::<String>("distance")
            .ok_or_else(|| GridError::GenericError("Missing locations".to_string()))?
            .cloned()
            .collect();

        if locations.len() != 2 {
            return Err(GridError::GenericError(
                "Distance requires exactly two locations".to_string(),
            ));
        }

        let verbose = args.get_flag("verbose");

        Ok(DistanceCommand {
            locations,
            verbose,
            logger,
        })
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> GridResult<()> {
        debug!(
            "Measuring distance from '{}' to '{}'",
            self.locations[0], self.locations[1]
        );

        let from = parse_location(&self.locations[0])?;
        let to = parse_location(&self.locations[1])?;

        if self.verbose {
            info!("  From: {}", from.latlong());
            info!("  To:   {}", to.latlong());
        }

        let (distance, bearing) = distance_and_bearing(&from, &to);
        info!(
            "The distance from {} to {} is {:.1} km at bearing {:.1}°",
            from, to, distance, bearing
        );

        self.logger.log(&format!(
            "Measured {} -> {}: {:.1} km at {:.1}°",
            from, to, distance, bearing
        ))?;

        Ok(())
    }
}
