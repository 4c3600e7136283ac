//! Custom error types for grid locator processing

use std::fmt;
use std::io;

/// Grid-specific error types
#[derive(Debug)]
pub enum GridError {
    /// I/O error
    IoError(io::Error),
    /// Latitude/longitude pair outside the valid ranges
    InvalidCoordinate(f64, f64),
    /// Locator string that does not match the canonical format
    InvalidGridFormat(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IoError(e) => write!(f, "I/O error: {}", e),
            GridError::InvalidCoordinate(lat, long) => write!(
                f,
                "Invalid coordinate ({}, {}): latitude must be between -90 and 90 \
                 and longitude between -180 and 180 degrees",
                lat, long
            ),
            GridError::InvalidGridFormat(code) => write!(
                f,
                "Invalid grid locator '{}': must be 1-4 pairs in the form 'AA00aa00'",
                code
            ),
            GridError::GenericError(msg) => write!(f, "Grid error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

impl From<io::Error> for GridError {
    fn from(error: io::Error) -> Self {
        GridError::IoError(error)
    }
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

impl From<String> for GridError {
    fn from(msg: String) -> Self {
        GridError::GenericError(msg)
    }
}
