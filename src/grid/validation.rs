//! Validation predicates for grid locators and coordinates
//!
//! These functions are used both as public predicates and internally
//! before constructing the grid types, so a constructed value can
//! never hold invalid data.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Matches any valid 2-8 character grid locator, whole pairs only.
    // Anchored on both ends: a valid prefix followed by trailing
    // characters is not a valid locator.
    static ref GRID_RE: Regex = Regex::new(r"(?i)^[A-R]{2}(?:[0-9]{2}(?:[A-X]{2}(?:[0-9]{2})?)?)?$")
        .expect("grid locator pattern compiles");
}

/// Check if a string is a valid 2-8 character Maidenhead grid locator
///
/// Accepts 1 to 4 character pairs: field letters A-R, square digits,
/// subsquare letters A-X, and extended square digits, in that order.
/// Matching is case-insensitive.
///
/// # Arguments
/// * `input` - The string to check
///
/// # Returns
/// `true` if the string is a valid locator, `false` otherwise
pub fn check_grid_format(input: &str) -> bool {
    GRID_RE.is_match(input)
}

/// Check if a latitude/longitude pair is within the valid ranges
///
/// Both bounds are inclusive: latitude -90 to 90 degrees, longitude
/// -180 to 180 degrees.
///
/// # Arguments
/// * `lat` - The latitude value to check
/// * `long` - The longitude value to check
///
/// # Returns
/// `true` if both values are in range, `false` otherwise
pub fn check_coordinate(lat: f64, long: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&long)
}
