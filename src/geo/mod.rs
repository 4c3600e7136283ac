//! Great-circle geometry between grid locators and coordinates
//!
//! This module provides the distance/bearing calculation and the
//! `Location` endpoint type that lets callers mix grid locators and
//! raw coordinates freely.

pub mod great_circle;
pub mod location;

pub use great_circle::distance_and_bearing;
pub use location::Location;
