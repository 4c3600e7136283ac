//! Maidenhead grid locator type and conversion algorithms
//!
//! A locator names a rectangular cell on Earth's surface with 1 to 4
//! character pairs of increasing precision: field (20° x 10°), square
//! (2° x 1°), subsquare (5' x 2.5'), and extended square (30" x 15").
//! Decoding reports the center of the deepest cell present; encoding
//! always produces the full 8-character locator.

use std::fmt;

use log::debug;

use crate::grid::constants::{extended, field, offsets, square, subsquare};
use crate::grid::coordinate::LatLong;
use crate::grid::errors::{GridError, GridResult};
use crate::grid::validation::check_grid_format;

/// Precision tier of a grid locator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// 2 characters, 20° x 10° cell
    Field,
    /// 4 characters, 2° x 1° cell
    Square,
    /// 6 characters, 5' x 2.5' cell
    Subsquare,
    /// 8 characters, 30" x 15" cell
    ExtendedSquare,
}

impl Precision {
    /// Cell size of this tier as (longitude, latitude) in degrees
    pub fn cell_size(&self) -> (f64, f64) {
        match self {
            Precision::Field => (field::LON, field::LAT),
            Precision::Square => (square::LON, square::LAT),
            Precision::Subsquare => (subsquare::LON, subsquare::LAT),
            Precision::ExtendedSquare => (extended::LON, extended::LAT),
        }
    }

    /// Number of characters a locator at this tier has
    pub fn code_len(&self) -> usize {
        match self {
            Precision::Field => 2,
            Precision::Square => 4,
            Precision::Subsquare => 6,
            Precision::ExtendedSquare => 8,
        }
    }
}

/// A Maidenhead grid locator with the coordinate of its cell center
///
/// The canonical code string is the source of truth; the center is
/// computed from it at construction, so the two representations can
/// never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLocator {
    /// Canonical locator: first pair uppercase, the rest lowercase
    code: String,
    /// Midpoint of the cell the locator covers
    center: LatLong,
}

impl GridLocator {
    /// Parse a locator string
    ///
    /// The input is matched against the canonical 2/4/6/8-character
    /// pattern (case-insensitively) and normalized on success.
    ///
    /// # Arguments
    /// * `code` - The locator string, e.g. "FN31pr12"
    ///
    /// # Returns
    /// The locator with its center computed, or
    /// `GridError::InvalidGridFormat` if the string does not match
    pub fn from_code(code: &str) -> GridResult<Self> {
        if !check_grid_format(code) {
            return Err(GridError::InvalidGridFormat(code.to_string()));
        }

        let code = format_code(code);
        let center = calc_latlong(&code);
        debug!("Parsed locator {} with center {}", code, center);

        Ok(GridLocator { code, center })
    }

    /// Convert a coordinate to its full 8-character locator
    ///
    /// Never fails: every valid coordinate maps to exactly one
    /// 8-character locator. The stored center is the midpoint of that
    /// locator's cell, which in general differs from the input point.
    ///
    /// # Arguments
    /// * `latlong` - The coordinate to encode
    pub fn from_latlong(latlong: LatLong) -> Self {
        let code = calc_grid(latlong);
        let center = calc_latlong(&code);
        debug!("Encoded {} as locator {}", latlong, code);

        GridLocator { code, center }
    }

    /// Get the full locator string
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the field of the locator, e.g. "FN"
    pub fn field(&self) -> &str {
        self.prefix(2)
    }

    /// Get the square of the locator, e.g. "FN31"
    ///
    /// For locators shorter than 4 characters this is the whole code.
    pub fn square(&self) -> &str {
        self.prefix(4)
    }

    /// Get the subsquare of the locator, e.g. "FN31pr"
    ///
    /// For locators shorter than 6 characters this is the whole code.
    pub fn subsquare(&self) -> &str {
        self.prefix(6)
    }

    /// Get the extended square of the locator, e.g. "FN31pr12"
    ///
    /// Read-only alias for the full code.
    pub fn extended_square(&self) -> &str {
        &self.code
    }

    /// Get the locator divided into its character pairs
    pub fn elements(&self) -> Vec<&str> {
        (0..self.code.len())
            .step_by(2)
            .map(|i| &self.code[i..i + 2])
            .collect()
    }

    /// Get the coordinate of the center of the covered cell
    pub fn center(&self) -> LatLong {
        self.center
    }

    /// Get the precision tier of the stored locator
    pub fn precision(&self) -> Precision {
        match self.code.len() {
            2 => Precision::Field,
            4 => Precision::Square,
            6 => Precision::Subsquare,
            _ => Precision::ExtendedSquare,
        }
    }

    fn prefix(&self, len: usize) -> &str {
        &self.code[..self.code.len().min(len)]
    }
}

impl fmt::Display for GridLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Normalize a locator to canonical case: field pair uppercase,
/// everything after it lowercase
fn format_code(code: &str) -> String {
    let (fld, rest) = code.split_at(2);
    format!("{}{}", fld.to_uppercase(), rest.to_lowercase())
}

/// Decode a canonical locator into the center of its cell
///
/// Walks the code pair by pair, accumulating each tier's offset from
/// the south-west corner of the globe grid, then moves from the cell
/// corner to its center by half the size of the deepest tier present.
fn calc_latlong(code: &str) -> LatLong {
    let bytes = code.as_bytes();

    let mut lon = (bytes[0] - field::ZERO) as f64 * field::LON - offsets::LON;
    let mut lat = (bytes[1] - field::ZERO) as f64 * field::LAT - offsets::LAT;
    let mut tier = Precision::Field;

    if bytes.len() > 2 {
        lon += digit(bytes[2]) * square::LON;
        lat += digit(bytes[3]) * square::LAT;
        tier = Precision::Square;
    }

    if bytes.len() > 4 {
        lon += (bytes[4] - subsquare::ZERO) as f64 * subsquare::LON;
        lat += (bytes[5] - subsquare::ZERO) as f64 * subsquare::LAT;
        tier = Precision::Subsquare;
    }

    if bytes.len() == 8 {
        lon += digit(bytes[6]) * extended::LON;
        lat += digit(bytes[7]) * extended::LAT;
        tier = Precision::ExtendedSquare;
    }

    let (cell_lon, cell_lat) = tier.cell_size();
    lon += cell_lon / 2.0;
    lat += cell_lat / 2.0;

    LatLong::from_parts(lat, lon)
}

/// Encode a coordinate as a full 8-character locator
///
/// Longitude and latitude are shifted to non-negative ranges, then
/// each tier's index is truncated (never rounded) out of the running
/// remainder. Longitude and latitude characters interleave per tier.
fn calc_grid(latlong: LatLong) -> String {
    let mut code = String::with_capacity(8);

    let (fld_lon, rem_lon) = tier_index(latlong.long() + offsets::LON, field::LON, field::MAX_INDEX);
    let (fld_lat, rem_lat) = tier_index(latlong.lat() + offsets::LAT, field::LAT, field::MAX_INDEX);
    code.push((field::ZERO + fld_lon as u8) as char);
    code.push((field::ZERO + fld_lat as u8) as char);

    let (sq_lon, rem_lon) = tier_index(rem_lon, square::LON, square::MAX_INDEX);
    let (sq_lat, rem_lat) = tier_index(rem_lat, square::LAT, square::MAX_INDEX);
    code.push((b'0' + sq_lon as u8) as char);
    code.push((b'0' + sq_lat as u8) as char);

    let (ssq_lon, rem_lon) = tier_index(rem_lon, subsquare::LON, subsquare::MAX_INDEX);
    let (ssq_lat, rem_lat) = tier_index(rem_lat, subsquare::LAT, subsquare::MAX_INDEX);
    code.push((subsquare::ZERO + ssq_lon as u8) as char);
    code.push((subsquare::ZERO + ssq_lat as u8) as char);

    let (esq_lon, _) = tier_index(rem_lon, extended::LON, extended::MAX_INDEX);
    let (esq_lat, _) = tier_index(rem_lat, extended::LAT, extended::MAX_INDEX);
    code.push((b'0' + esq_lon as u8) as char);
    code.push((b'0' + esq_lat as u8) as char);

    code
}

/// Truncate one tier's cell index out of `value`
///
/// Returns the index and the remainder left over for the next tier.
/// The index is clamped to `max` so that inputs at the exact upper
/// boundary (latitude 90, longitude 180) fall into the last cell of
/// each tier instead of one past it.
fn tier_index(value: f64, cell: f64, max: u32) -> (u32, f64) {
    let index = ((value / cell).floor() as u32).min(max);
    (index, value - index as f64 * cell)
}

fn digit(b: u8) -> f64 {
    (b - b'0') as f64
}
