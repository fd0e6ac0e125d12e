//! # SysView
//!
//! Planetary ephemerides from JPL Horizons and the solar elongation of each planet.
//!
//! * [`horizons`] fetches the observer tables, stores them, and parses the row following
//!   `$$SOE` into an [`EphemerisRecord`](horizons::record::EphemerisRecord).
//! * [`elongation`] turns the heliocentric and geocentric distances of a record into the
//!   Sun–planet angle seen from Earth.
//! * [`sysview::SysView`] chains both steps for the eight planets at a given date.

pub mod constants;
pub mod display;
pub mod elongation;
pub mod env_state;
pub mod horizons;
pub mod params;
pub mod sysview;
pub mod sysview_errors;
pub mod time;
pub mod visibility;
