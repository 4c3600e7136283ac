//! Great-circle distance and initial bearing
//!
//! Spherical Earth model with a mean radius of 6371 km; no ellipsoidal
//! correction. Distance uses the haversine formula, bearing the
//! standard forward-azimuth formula.

use log::debug;

use crate::geo::location::Location;

/// Mean Earth radius in kilometres
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Compute the great-circle distance and initial bearing between two locations
///
/// Distance is symmetric in its arguments; the bearing is the forward
/// azimuth from `location1` to `location2` and generally is not. For
/// identical endpoints both results are 0 (the `atan2(0, 0) == 0`
/// convention of IEEE 754 arithmetic).
///
/// # Arguments
/// * `location1` - The location from which to measure
/// * `location2` - The location to which to measure
///
/// # Returns
/// The distance in kilometres and the bearing in degrees, 0-360
/// clockwise from north
pub fn distance_and_bearing(location1: &Location, location2: &Location) -> (f64, f64) {
    let from = location1.latlong();
    let to = location2.latlong();

    let lat1_rad = from.lat().to_radians();
    let lat2_rad = to.lat().to_radians();
    let delta_lat = (to.lat() - from.lat()).to_radians();
    let delta_long = (to.long() - from.long()).to_radians();

    // Haversine formula
    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_long / 2.0).sin().powi(2);
    let distance = EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    // Forward azimuth, normalized to 0-360
    let y = delta_long.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_long.cos();
    let bearing = (y.atan2(x).to_degrees() + 360.0) % 360.0;

    debug!(
        "Distance from {} to {}: {:.3} km at bearing {:.3}°",
        from, to, distance, bearing
    );

    (distance, bearing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::coordinate::LatLong;
    use crate::grid::locator::GridLocator;

    fn latlong(lat: f64, long: f64) -> Location {
        Location::LatLong(LatLong::new(lat, long).unwrap())
    }

    // ==================== degenerate case tests ====================

    #[test]
    fn test_identical_points_give_zero_distance_and_bearing() {
        let (dist, bearing) = distance_and_bearing(&latlong(0.0, 0.0), &latlong(0.0, 0.0));
        assert_eq!(dist, 0.0);
        assert_eq!(bearing, 0.0);

        let (dist, bearing) = distance_and_bearing(&latlong(45.0, -122.0), &latlong(45.0, -122.0));
        assert!(dist.abs() < 1e-9);
        assert_eq!(bearing, 0.0);
    }

    // ==================== distance tests ====================

    #[test]
    fn test_one_degree_of_latitude() {
        // 1 degree of a 6371 km sphere is ~111.19 km
        let (dist, _) = distance_and_bearing(&latlong(0.0, 0.0), &latlong(1.0, 0.0));
        assert!((dist - 111.195).abs() < 0.01, "Expected ~111.195 km, got {}", dist);
    }

    #[test]
    fn test_half_circumference() {
        // Antipodal points along the equator
        let (dist, _) = distance_and_bearing(&latlong(0.0, 0.0), &latlong(0.0, 180.0));
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((dist - half_circumference).abs() < 0.01);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = latlong(43.6, 1.4);
        let b = latlong(49.0, 2.5);

        let (ab, _) = distance_and_bearing(&a, &b);
        let (ba, _) = distance_and_bearing(&b, &a);

        assert!((ab - ba).abs() < 1e-9, "Distance should be symmetric");
    }

    // ==================== bearing tests ====================

    #[test]
    fn test_cardinal_bearings_from_equator() {
        let origin = latlong(0.0, 0.0);

        let (_, north) = distance_and_bearing(&origin, &latlong(1.0, 0.0));
        assert!(north.abs() < 1e-9, "Due north should be 0°, got {}", north);

        let (_, east) = distance_and_bearing(&origin, &latlong(0.0, 1.0));
        assert!((east - 90.0).abs() < 1e-9, "Due east should be 90°, got {}", east);

        let (_, south) = distance_and_bearing(&origin, &latlong(-1.0, 0.0));
        assert!((south - 180.0).abs() < 1e-9, "Due south should be 180°, got {}", south);

        let (_, west) = distance_and_bearing(&origin, &latlong(0.0, -1.0));
        assert!((west - 270.0).abs() < 1e-9, "Due west should be 270°, got {}", west);
    }

    #[test]
    fn test_bearing_stays_in_range() {
        let points = [
            (0.0, 0.0),
            (45.0, -122.0),
            (-33.9, 151.2),
            (51.5, -0.1),
            (89.0, 10.0),
        ];

        for &(lat1, long1) in &points {
            for &(lat2, long2) in &points {
                let (_, bearing) =
                    distance_and_bearing(&latlong(lat1, long1), &latlong(lat2, long2));
                assert!(
                    (0.0..360.0).contains(&bearing),
                    "Bearing {} out of range for ({},{}) -> ({},{})",
                    bearing,
                    lat1,
                    long1,
                    lat2,
                    long2
                );
            }
        }
    }

    // ==================== mixed endpoint tests ====================

    #[test]
    fn test_grid_endpoint_measures_from_cell_center() {
        let grid = GridLocator::from_code("FN20").unwrap();
        let center = grid.center();

        let (dist, _) = distance_and_bearing(
            &Location::Grid(grid),
            &Location::LatLong(center),
        );
        assert!(dist.abs() < 1e-9, "Grid vs its own center should be 0 km");
    }

    #[test]
    fn test_mixed_endpoints_match_plain_coordinates() {
        let grid = GridLocator::from_code("JO62").unwrap();
        let as_latlong = Location::LatLong(grid.center());
        let other = latlong(48.9, 2.4);

        let (dist_grid, bearing_grid) = distance_and_bearing(&Location::Grid(grid), &other);
        let (dist_raw, bearing_raw) = distance_and_bearing(&as_latlong, &other);

        assert_eq!(dist_grid, dist_raw);
        assert_eq!(bearing_grid, bearing_raw);
    }
}
