//! Maidenhead grid constants
//!
//! This module defines the cell sizes and character bases for each
//! precision tier of a grid locator, replacing magic numbers in the
//! conversion code with descriptive names.

/// Shifts applied so longitudes and latitudes are non-negative
///
/// Grid squares are an offset of the equator and the prime meridian:
/// longitude 0 of the grid is at 180°W, latitude 0 at 90°S.
pub mod offsets {
    /// Longitude shift in degrees
    pub const LON: f64 = 180.0;

    /// Latitude shift in degrees
    pub const LAT: f64 = 90.0;
}

/// Field tier (characters 0-1), 20° x 10° cells, letters A-R
pub mod field {
    /// Cell width in degrees of longitude
    pub const LON: f64 = 20.0;

    /// Cell height in degrees of latitude
    pub const LAT: f64 = 10.0;

    /// The character encoding index 0 of this tier
    pub const ZERO: u8 = b'A';

    /// Highest valid cell index ('R')
    pub const MAX_INDEX: u32 = 17;
}

/// Square tier (characters 2-3), 2° x 1° cells, digits 0-9
pub mod square {
    /// Cell width in degrees of longitude
    pub const LON: f64 = 2.0;

    /// Cell height in degrees of latitude
    pub const LAT: f64 = 1.0;

    /// Highest valid cell index ('9')
    pub const MAX_INDEX: u32 = 9;
}

/// Subsquare tier (characters 4-5), 5' x 2.5' cells, letters a-x
pub mod subsquare {
    /// Cell width in degrees of longitude (5 minutes of arc)
    pub const LON: f64 = 5.0 / 60.0;

    /// Cell height in degrees of latitude (2.5 minutes of arc)
    pub const LAT: f64 = 2.5 / 60.0;

    /// The character encoding index 0 of this tier
    pub const ZERO: u8 = b'a';

    /// Highest valid cell index ('x')
    pub const MAX_INDEX: u32 = 23;
}

/// Extended square tier (characters 6-7), 30" x 15" cells, digits 0-9
pub mod extended {
    /// Cell width in degrees of longitude (30 seconds of arc)
    pub const LON: f64 = 30.0 / 3600.0;

    /// Cell height in degrees of latitude (15 seconds of arc)
    pub const LAT: f64 = 15.0 / 3600.0;

    /// Highest valid cell index ('9')
    pub const MAX_INDEX: u32 = 9;
}
