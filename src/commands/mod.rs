//! CLI command implementations
//!
//! This module contains implementations of the conversion and
//! distance commands supported by the CLI application using the
//! Command pattern.

pub mod command_traits;
pub mod to_latlong_command;
pub mod to_grid_command;
pub mod distance_command;

pub use command_traits::{Command, CommandFactory};
pub use to_latlong_command::ToLatLongCommand;
pub use to_grid_command::ToGridCommand;
pub use distance_command::DistanceCommand;

use clap::ArgMatches;

use crate::grid::errors::{GridError, GridResult};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct GridkitCommandFactory;

impl GridkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GridkitCommandFactory
    }
}

impl Default for GridkitCommandFactory {
    fn default() -> Self {
        GridkitCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for GridkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GridResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.contains_id("grid") {
            Ok(Box::new(ToLatLongCommand::new(args, logger)?))
        } else if args.contains_id("latlong") {
            Ok(Box::new(ToGridCommand::new(args, logger)?))
        } else if args.contains_id("distance") {
            Ok(Box::new(DistanceCommand::new(args, logger)?))
        } else {
            Err(GridError::GenericError(
                "No operation given; use --grid, --latlong, or --distance".to_string(),
            ))
        }
    }
}
