//! # Solar elongation
//!
//! Angle, as seen from Earth, between a planet and the Sun, computed from the two
//! distances returned by Horizons with the law of cosines. The Earth–Sun side of the
//! triangle is fixed to [`EARTH_SUN_DISTANCE`] (1 AU).
//!
//! ```text
//! theta = arccos( (ep² - 1 - hp²) / (2·hp) ) · 180/π
//! ```
//!
//! with `ep` the geocentric distance and `hp` the heliocentric distance (AU).
//!
//! The cosine ratio is checked before calling `acos`: inconsistent distance pairs
//! surface as [`SysViewError::DomainError`] instead of a silent NaN.

use crate::constants::{AstronomicalUnit, Degree, DEGRAD, EARTH_SUN_DISTANCE};
use crate::horizons::bodies::Planet;
use crate::horizons::record::EphemerisRecord;
use crate::sysview_errors::SysViewError;

/// Compute the elongation angle from a geocentric and a heliocentric distance.
///
/// Arguments
/// -----------------
/// * `ep`: Earth → body distance, in AU, must be finite and `> 0`.
/// * `hp`: Sun → body distance, in AU, must be finite and `> 0`.
///
/// Return
/// ----------
/// * The angle in degrees, in `[0, 180]`.
/// * [`SysViewError::DomainError`] if a distance is not strictly positive or if the
///   cosine ratio lies outside `[-1, 1]`, even by a single ulp.
///
/// See also
/// ------------
/// * [`record_elongation`] – Same computation fed by a parsed record.
pub fn cos_calc(ep: AstronomicalUnit, hp: AstronomicalUnit) -> Result<Degree, SysViewError> {
    let positive = |x: f64| x.is_finite() && x > 0.0;
    if !positive(ep) || !positive(hp) {
        return Err(SysViewError::DomainError {
            ep,
            hp,
            ratio: f64::NAN,
        });
    }

    let costop = ep.powi(2) - EARTH_SUN_DISTANCE.powi(2) - hp.powi(2);
    let cosbot = 2.0 * hp * EARTH_SUN_DISTANCE;
    let ratio = costop / cosbot;

    if !(-1.0..=1.0).contains(&ratio) {
        return Err(SysViewError::DomainError { ep, hp, ratio });
    }

    Ok(ratio.acos() * DEGRAD)
}

/// Elongation of the body described by `record`.
pub fn record_elongation(record: &EphemerisRecord) -> Result<Degree, SysViewError> {
    cos_calc(record.geocentric_distance, record.heliocentric_distance)
}

/// Elongation using the mean heliocentric distance of `planet` instead of a measured one.
///
/// Useful for quick estimates when only the geocentric distance is known.
pub fn mean_elongation(planet: Planet, ep: AstronomicalUnit) -> Result<Degree, SysViewError> {
    cos_calc(ep, planet.mean_distance())
}

#[cfg(test)]
mod elongation_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mars_like_configuration() {
        let theta = cos_calc(1.52, 1.52).unwrap();
        assert_abs_diff_eq!(theta, 109.2, epsilon = 0.01);
    }

    #[test]
    fn test_swap_is_not_symmetric() {
        let a = cos_calc(2.0, 1.5).unwrap();
        let b = cos_calc(1.5, 2.0).unwrap();
        assert_abs_diff_eq!(a, 75.522_487_814_070_08, epsilon = 1e-9);
        assert_abs_diff_eq!(b, 133.432_536_557_789_77, epsilon = 1e-9);
        assert!((a - b).abs() > 1.0);
    }

    #[test]
    fn test_boundaries_of_the_cosine() {
        // ratio = -1: ep = 1 - hp (body between Earth and Sun)
        assert_abs_diff_eq!(cos_calc(0.5, 0.5).unwrap(), 180.0, epsilon = 1e-9);
        // ratio = +1: ep = 1 + hp (body behind the Sun)
        assert_abs_diff_eq!(cos_calc(2.0, 1.0).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ratio_just_outside_the_cosine_range() {
        // ratio = -1.0000000000000002
        match cos_calc(4.2, 5.2) {
            Err(SysViewError::DomainError { ratio, .. }) => assert!(ratio < -1.0),
            other => panic!("expected a domain error, got {other:?}"),
        }
        // ratio = 1.0000000000002
        match cos_calc(2.000_000_000_000_1, 1.0) {
            Err(SysViewError::DomainError { ratio, .. }) => assert!(ratio > 1.0),
            other => panic!("expected a domain error, got {other:?}"),
        }
        assert_abs_diff_eq!(cos_calc(4.3, 5.2).unwrap(), 156.674_352_613_422_3, epsilon = 1e-9);
    }

    #[test]
    fn test_out_of_range_ratio() {
        let err = cos_calc(10.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            SysViewError::DomainError {
                ep: 10.0,
                hp: 1.0,
                ratio: 49.0
            }
        );
    }

    #[test]
    fn test_non_positive_inputs() {
        assert!(matches!(
            cos_calc(0.0, 1.0),
            Err(SysViewError::DomainError { .. })
        ));
        assert!(matches!(
            cos_calc(1.0, -2.0),
            Err(SysViewError::DomainError { .. })
        ));
        assert!(matches!(
            cos_calc(f64::NAN, 1.0),
            Err(SysViewError::DomainError { .. })
        ));
    }

    #[test]
    fn test_result_in_range_for_valid_inputs() {
        for i in 1..=60 {
            let hp = 0.5 + i as f64 * 0.5;
            for j in 0..=40 {
                let ep = (hp - 1.0).abs() + 2.0 * j as f64 / 40.0;
                match cos_calc(ep, hp) {
                    Ok(theta) => assert!((0.0..=180.0).contains(&theta)),
                    Err(SysViewError::DomainError { ratio, .. }) => {
                        assert!(!(-1.0..=1.0).contains(&ratio))
                    }
                    Err(e) => panic!("unexpected error {e}"),
                }
            }
        }
    }

    #[test]
    fn test_record_and_mean_elongation() {
        let record = EphemerisRecord {
            right_ascension: 10.0,
            declination: 20.0,
            heliocentric_distance: 1.52,
            geocentric_distance: 1.52,
        };
        assert_abs_diff_eq!(
            record_elongation(&record).unwrap(),
            cos_calc(1.52, 1.52).unwrap()
        );
        assert_abs_diff_eq!(
            mean_elongation(Planet::Mars, 1.52).unwrap(),
            cos_calc(1.52, 1.52).unwrap()
        );
    }
}
