//! Parsing helpers for CLI location arguments
//!
//! The CLI accepts locations either as grid locators or as "lat,long"
//! pairs. These helpers turn those strings into core types, reporting
//! parse problems through the normal error channel.

use log::debug;

use crate::geo::location::Location;
use crate::grid::coordinate::LatLong;
use crate::grid::errors::{GridError, GridResult};
use crate::grid::locator::GridLocator;
use crate::grid::validation::check_grid_format;

/// Parse a "lat,long" pair such as "-43.267,23.829"
///
/// # Arguments
/// * `input` - The string to parse
///
/// # Returns
/// The validated coordinate, or an error if the string is not two
/// comma-separated numbers or the values are out of range
pub fn parse_latlong(input: &str) -> GridResult<LatLong> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() != 2 {
        return Err(GridError::GenericError(
            "Coordinate must be in the format 'lat,long'".to_string(),
        ));
    }

    let lat = parts[0]
        .trim()
        .parse::<f64>()
        .map_err(|_| GridError::GenericError(format!("Invalid latitude value: {}", parts[0])))?;
    let long = parts[1]
        .trim()
        .parse::<f64>()
        .map_err(|_| GridError::GenericError(format!("Invalid longitude value: {}", parts[1])))?;

    LatLong::new(lat, long)
}

/// Parse a location given either as a grid locator or as a "lat,long" pair
///
/// Grid locators are tried first; anything that does not look like a
/// locator is treated as a coordinate pair.
///
/// # Arguments
/// * `input` - The string to parse
pub fn parse_location(input: &str) -> GridResult<Location> {
    if check_grid_format(input) {
        debug!("Parsed location '{}' as grid locator", input);
        return Ok(Location::Grid(GridLocator::from_code(input)?));
    }

    match parse_latlong(input) {
        Ok(latlong) => {
            debug!("Parsed location '{}' as lat/long pair", input);
            Ok(Location::LatLong(latlong))
        }
        Err(_) => Err(GridError::GenericError(format!(
            "Could not parse '{}'. For grids, use the AA00aa00 format (2-8 characters). \
             For lat/long pairs, use the format 'lat,long'",
            input
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latlong_pair() {
        let c = parse_latlong("-43.267,23.829").unwrap();
        assert_eq!(c.lat(), -43.267);
        assert_eq!(c.long(), 23.829);

        // Whitespace around the values is tolerated
        let c = parse_latlong(" 40.5 , -75.0 ").unwrap();
        assert_eq!(c.lat(), 40.5);
        assert_eq!(c.long(), -75.0);
    }

    #[test]
    fn test_parse_latlong_rejects_malformed_input() {
        assert!(parse_latlong("40.5").is_err());
        assert!(parse_latlong("40.5,-75.0,1.0").is_err());
        assert!(parse_latlong("north,west").is_err());
        assert!(parse_latlong("95.0,0.0").is_err());
    }

    #[test]
    fn test_parse_location_prefers_grid() {
        let loc = parse_location("FN20").unwrap();
        assert!(matches!(loc, Location::Grid(_)));

        let loc = parse_location("40.5,-75.0").unwrap();
        assert!(matches!(loc, Location::LatLong(_)));
    }

    #[test]
    fn test_parse_location_rejects_garbage() {
        assert!(parse_location("not a place").is_err());
        assert!(parse_location("FN3").is_err());
    }
}
