mod common;

use approx::assert_abs_diff_eq;
use camino::Utf8PathBuf;
use common::fixture_dir;
use sysview::display::{write_records_csv, EphemerisTable};
use sysview::horizons::bodies::Planet;
use sysview::params::FetchParams;
use sysview::sysview::SysView;
use sysview::sysview_errors::SysViewError;
use sysview::visibility::visible_at_midnight;

fn fixture_view() -> SysView {
    SysView::with_data_dir(FetchParams::default(), fixture_dir())
}

#[test]
fn test_load_all_planets() {
    let ephemerides = fixture_view().load().unwrap();
    let planets: Vec<Planet> = ephemerides.iter().map(|e| e.planet).collect();
    assert_eq!(planets, Planet::ALL.to_vec());
}

#[test]
fn test_elongations_of_fixture_day() {
    let ephemerides = fixture_view().load().unwrap();
    let elongations = SysView::elongations(&ephemerides);

    let expected = [
        (Planet::Mercury, Some(118.502_382_921)),
        (Planet::Venus, Some(66.296_091_405)),
        (Planet::Earth, None),
        (Planet::Mars, Some(104.318_781_155)),
        (Planet::Jupiter, Some(91.663_657_767)),
        (Planet::Saturn, Some(131.393_853_103)),
        (Planet::Uranus, Some(46.477_939_817)),
        (Planet::Neptune, Some(108.423_094_160)),
    ];

    for ((planet, result), (exp_planet, exp_angle)) in elongations.iter().zip(expected) {
        assert_eq!(*planet, exp_planet);
        match (result, exp_angle) {
            (Ok(theta), Some(angle)) => assert_abs_diff_eq!(*theta, angle, epsilon = 1e-6),
            (Err(SysViewError::DomainError { hp, .. }), None) => assert_eq!(*hp, 0.0),
            (other, _) => panic!("{planet}: unexpected {other:?}"),
        }
    }
}

#[test]
fn test_midnight_visibility_of_fixture_day() {
    let ephemerides = fixture_view().load().unwrap();
    assert_eq!(
        visible_at_midnight(&ephemerides),
        vec![Planet::Saturn, Planet::Neptune]
    );
}

#[test]
fn test_subset_of_planets() {
    let view = fixture_view().with_planets(&[Planet::Neptune, Planet::Mercury]);
    let ephemerides = view.load().unwrap();
    assert_eq!(ephemerides[0].planet, Planet::Neptune);
    assert_eq!(ephemerides[0].record.right_ascension, 356.50142);
    assert_eq!(ephemerides[1].record.declination, 19.83012);
}

#[test]
fn test_table_and_export() {
    let ephemerides = fixture_view().load().unwrap();

    let table = EphemerisTable::new(&ephemerides).with_precision(3).to_string();
    for planet in Planet::ALL {
        assert!(table.contains(planet.name()));
    }
    assert!(table.contains("131.394"));

    let tmp = tempfile::tempdir().unwrap();
    let out = Utf8PathBuf::from_path_buf(tmp.path().join("planets.csv")).unwrap();
    write_records_csv(&ephemerides, std::fs::File::create(&out).unwrap()).unwrap();

    let mut reader = csv::Reader::from_path(&out).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 8);
    assert_eq!(&rows[2][0], "Earth");
    assert_eq!(&rows[2][5], "");
    assert_eq!(&rows[3][0], "Mars");
    assert_eq!(&rows[3][1], "13.4992");
}
