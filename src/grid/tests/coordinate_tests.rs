//! Tests for the LatLong coordinate type

extern crate std;

use crate::grid::coordinate::LatLong;
use crate::grid::errors::GridError;

#[test]
fn test_new_valid_pair() {
    let c = LatLong::new(40.123456, -74.123456).unwrap();
    std::assert_eq!(c.lat(), 40.123456);
    std::assert_eq!(c.long(), -74.123456);
}

#[test]
fn test_new_boundary_inclusive() {
    // Both bounds are inclusive on both axes
    std::assert!(LatLong::new(90.0, 180.0).is_ok());
    std::assert!(LatLong::new(-90.0, -180.0).is_ok());
    std::assert!(LatLong::new(90.0, -180.0).is_ok());
    std::assert!(LatLong::new(-90.0, 180.0).is_ok());
}

#[test]
fn test_new_out_of_range_latitude() {
    let result = LatLong::new(91.0, 0.0);
    std::assert!(matches!(result, Err(GridError::InvalidCoordinate(_, _))));

    std::assert!(LatLong::new(-90.000001, 0.0).is_err());
}

#[test]
fn test_new_out_of_range_longitude() {
    let result = LatLong::new(0.0, 181.0);
    std::assert!(matches!(result, Err(GridError::InvalidCoordinate(_, _))));

    std::assert!(LatLong::new(0.0, -180.5).is_err());
}

#[test]
fn test_set_lat_revalidates_pair() {
    let mut c = LatLong::new(10.0, 20.0).unwrap();
    c.set_lat(-45.5).unwrap();
    std::assert_eq!(c.lat(), -45.5);
    std::assert_eq!(c.long(), 20.0);
}

#[test]
fn test_set_lat_failure_leaves_value_unchanged() {
    let mut c = LatLong::new(10.0, 20.0).unwrap();
    let result = c.set_lat(90.1);

    std::assert!(result.is_err());
    std::assert_eq!(c.lat(), 10.0);
    std::assert_eq!(c.long(), 20.0);
}

#[test]
fn test_set_long_failure_leaves_value_unchanged() {
    let mut c = LatLong::new(10.0, 20.0).unwrap();
    let result = c.set_long(-200.0);

    std::assert!(result.is_err());
    std::assert_eq!(c.lat(), 10.0);
    std::assert_eq!(c.long(), 20.0);
}

#[test]
fn test_with_lat_builds_new_validated_pair() {
    let c = LatLong::new(10.0, 20.0).unwrap();
    let moved = c.with_lat(30.0).unwrap();

    std::assert_eq!(moved.lat(), 30.0);
    std::assert_eq!(moved.long(), 20.0);
    // Original is untouched
    std::assert_eq!(c.lat(), 10.0);

    std::assert!(c.with_lat(100.0).is_err());
    std::assert!(c.with_long(200.0).is_err());
}

#[test]
fn test_display_six_decimal_degrees() {
    let c = LatLong::new(40.123456, -74.123456).unwrap();
    std::assert_eq!(c.to_string(), "40.123456°, -74.123456°");

    let origin = LatLong::new(0.0, 0.0).unwrap();
    std::assert_eq!(origin.to_string(), "0.000000°, 0.000000°");
}
