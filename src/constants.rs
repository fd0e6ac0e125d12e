//! # Constants and type definitions for SysView
//!
//! This module centralizes the **physical constants**, **unit conversions**, the
//! **JPL Horizons endpoints and markers**, and the **type aliases** used throughout
//! the crate.
//!
//! ## Overview
//!
//! - Astronomical baseline used by the elongation computation
//! - Radians → degrees conversion
//! - Horizons API endpoint and the marker opening the ephemeris block
//! - Core type aliases shared by the parser and the calculators

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Earth–Sun distance used as the fixed baseline of the elongation triangle, in AU
pub const EARTH_SUN_DISTANCE: f64 = 1.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Half of the sky in right ascension, in degrees
pub const HALF_TURN: f64 = 180.0;

/// Full turn in right ascension, in degrees
pub const FULL_TURN: f64 = 360.0;

/// Right-ascension separation from the Sun above which a body is up at local midnight
pub const MIDNIGHT_SEPARATION: f64 = 90.0;

// -------------------------------------------------------------------------------------------------
// JPL Horizons
// -------------------------------------------------------------------------------------------------

/// JPL Horizons REST endpoint returning plain-text ephemerides
pub const HORIZONS_API_URL: &str = "https://ssd.jpl.nasa.gov/api/horizons.api";

/// Marker line preceding the first ephemeris row
pub const START_OF_EPHEMERIS: &str = "$$SOE";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;

/// Distance in astronomical units
pub type AstronomicalUnit = f64;
