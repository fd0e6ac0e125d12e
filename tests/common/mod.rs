#![allow(dead_code)]
use approx::assert_relative_eq;
use camino::Utf8PathBuf;
use sysview::horizons::record::EphemerisRecord;

/// Directory of the Horizons-shaped responses for 2022-06-22.
pub fn fixture_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("horizons_2022-06-22")
}

pub fn record(ra: f64, dec: f64, r: f64, delta: f64) -> EphemerisRecord {
    EphemerisRecord {
        right_ascension: ra,
        declination: dec,
        heliocentric_distance: r,
        geocentric_distance: delta,
    }
}

pub fn assert_record_close(actual: &EphemerisRecord, expected: &EphemerisRecord, epsilon: f64) {
    assert_relative_eq!(
        actual.right_ascension,
        expected.right_ascension,
        epsilon = epsilon
    );
    assert_relative_eq!(actual.declination, expected.declination, epsilon = epsilon);
    assert_relative_eq!(
        actual.heliocentric_distance,
        expected.heliocentric_distance,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.geocentric_distance,
        expected.geocentric_distance,
        epsilon = epsilon
    );
}
