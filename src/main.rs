use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

// Import from your library
use gridkit::commands::{CommandFactory, GridkitCommandFactory};
use gridkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("GridKit")
        .version("0.1")
        .author("Maurice Schilpp")
        .about("Convert between Maidenhead grid locators and latitude/longitude, \
                and compute the great circle distance and bearing between two locations")
        .arg(
            Arg::new("grid")
                .short('g')
                .long("grid")
                .help("Convert a grid locator to a lat/long pair")
                .value_name("LOCATOR")
                .required(false),
        )
        .arg(
            Arg::new("latlong")
                .short('l')
                .long("latlong")
                .help("Convert a 'lat,long' pair to a grid locator (use -l=-12.1,43.2 for negative latitudes)")
                .value_name("LAT,LONG")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("distance")
                .short('d')
                .long("distance")
                .help("Find the distance and bearing from one location to another, \
                       each given as a grid locator or a 'lat,long' pair")
                .value_name("LOC")
                .num_args(2)
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "gridkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("gridkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = GridkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
