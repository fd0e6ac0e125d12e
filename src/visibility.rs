//! Rough night-sky visibility from right ascensions.
//!
//! At local midnight the meridian points away from the Sun, so a body whose right
//! ascension differs from the Sun's by more than 90° is above the horizon (declination
//! and observer latitude are ignored).

use crate::constants::{Degree, FULL_TURN, HALF_TURN, MIDNIGHT_SEPARATION};
use crate::horizons::bodies::Planet;
use crate::horizons::record::EphemerisRecord;
use crate::sysview::PlanetEphemeris;

/// Angular separation of two right ascensions, wrapped to `[0, 180]` degrees.
pub fn ra_separation(a: Degree, b: Degree) -> Degree {
    let d = (a - b).rem_euclid(FULL_TURN);
    if d > HALF_TURN {
        FULL_TURN - d
    } else {
        d
    }
}

/// True when `body` is above the horizon at local midnight, `sun` being the apparent
/// position of the Sun.
pub fn is_up_at_midnight(sun: &EphemerisRecord, body: &EphemerisRecord) -> bool {
    ra_separation(sun.right_ascension, body.right_ascension) > MIDNIGHT_SEPARATION
}

/// Bodies of `ephemerides` visible at local midnight.
///
/// The Sun reference is taken from the [`Planet::Earth`] slot; without it the result is
/// empty. The reference slot itself is never listed.
pub fn visible_at_midnight(ephemerides: &[PlanetEphemeris]) -> Vec<Planet> {
    let Some(sun) = ephemerides.iter().find(|e| e.planet.is_sun_reference()) else {
        return Vec::new();
    };

    ephemerides
        .iter()
        .filter(|e| !e.planet.is_sun_reference())
        .filter(|e| is_up_at_midnight(&sun.record, &e.record))
        .map(|e| e.planet)
        .collect()
}
