//! # Horizons observer-table record
//!
//! A Horizons observer query with `QUANTITIES='2,19,20'` and `CSV_FORMAT='YES'` returns
//! a text document whose ephemeris block is delimited by `$$SOE` / `$$EOE`. Each row of
//! the block looks like:
//!
//! ```text
//!  2022-Jun-22 00:00, , ,  45.12345, 17.54321, 0.4512, -3.21, 1.0945, 12.3,
//! ```
//!
//! The columns consumed here are the right ascension, the declination, the heliocentric
//! range `r` and the geocentric range `delta`. Their positions are grouped in
//! [`ColumnLayout`] so a change in the provider layout stays local to one constant.

use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Degree, START_OF_EPHEMERIS};
use crate::sysview_errors::SysViewError;

/// Position and distances of one body at one observation date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EphemerisRecord {
    /// Right ascension, in degrees.
    pub right_ascension: Degree,
    /// Declination, in degrees.
    pub declination: Degree,
    /// Sun → body distance, in AU.
    pub heliocentric_distance: AstronomicalUnit,
    /// Earth → body distance, in AU.
    pub geocentric_distance: AstronomicalUnit,
}

/// Column indices (0-based) of the Horizons CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub right_ascension: usize,
    pub declination: usize,
    pub heliocentric_distance: usize,
    pub geocentric_distance: usize,
    /// Minimal number of comma-separated fields a row must carry.
    pub min_fields: usize,
}

impl ColumnLayout {
    /// Layout of the observer table requested with `QUANTITIES='2,19,20'`:
    /// date, solar presence, lunar presence, RA, DEC, r, rdot, delta, deldot.
    pub const HORIZONS: ColumnLayout = ColumnLayout {
        right_ascension: 3,
        declination: 4,
        heliocentric_distance: 5,
        geocentric_distance: 7,
        min_fields: 8,
    };
}

impl Default for ColumnLayout {
    fn default() -> Self {
        ColumnLayout::HORIZONS
    }
}

/// Return the line following the `$$SOE` marker.
///
/// Lines are compared after trimming, which makes CRLF files and indented markers
/// acceptable.
///
/// Arguments
/// ---------
/// * `blob`: the full Horizons response
/// * `source_id`: identifier of the blob, reported in errors
///
/// Return
/// ------
/// * The raw data row
/// * [`SysViewError::NotFound`] if the marker is absent
/// * [`SysViewError::MalformedRecord`] if the marker is the last line
pub(crate) fn find_data_row<'a>(blob: &'a str, source_id: &str) -> Result<&'a str, SysViewError> {
    let mut lines = blob.lines();

    lines
        .by_ref()
        .find(|line| line.trim() == START_OF_EPHEMERIS)
        .ok_or_else(|| SysViewError::NotFound {
            source_id: source_id.to_string(),
        })?;

    lines
        .next()
        .map(str::trim)
        .ok_or_else(|| SysViewError::malformed(source_id, "no data row after $$SOE"))
}

fn parse_field(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
    source_id: &str,
) -> Result<f64, SysViewError> {
    let raw = record
        .get(index)
        .ok_or_else(|| SysViewError::malformed(source_id, format!("missing field {name}")))?;

    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            SysViewError::malformed(
                source_id,
                format!("field {name} (column {index}) is not a finite number: {raw:?}"),
            )
        })
}

impl EphemerisRecord {
    /// Parse the ephemeris record of one Horizons response.
    ///
    /// Arguments
    /// ---------
    /// * `blob`: the Horizons text response
    /// * `source_id`: identifier of the blob (file stem, path...), used in error messages
    /// * `layout`: column positions of the wanted quantities
    ///
    /// Return
    /// ------
    /// * The record built from the first row after `$$SOE`
    /// * [`SysViewError::NotFound`] if the blob has no `$$SOE` line
    /// * [`SysViewError::MalformedRecord`] if the row is too short or a field is not numeric
    pub fn from_horizons_text(
        blob: &str,
        source_id: &str,
        layout: &ColumnLayout,
    ) -> Result<Self, SysViewError> {
        let row = find_data_row(blob, source_id)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(row.as_bytes());

        let mut fields = csv::StringRecord::new();
        let has_row = reader
            .read_record(&mut fields)
            .map_err(|e| SysViewError::malformed(source_id, e.to_string()))?;

        if !has_row || fields.len() < layout.min_fields {
            return Err(SysViewError::malformed(
                source_id,
                format!(
                    "expected at least {} comma-separated fields, found {}",
                    layout.min_fields,
                    fields.len()
                ),
            ));
        }

        Ok(EphemerisRecord {
            right_ascension: parse_field(&fields, layout.right_ascension, "RA", source_id)?,
            declination: parse_field(&fields, layout.declination, "DEC", source_id)?,
            heliocentric_distance: parse_field(
                &fields,
                layout.heliocentric_distance,
                "r",
                source_id,
            )?,
            geocentric_distance: parse_field(
                &fields,
                layout.geocentric_distance,
                "delta",
                source_id,
            )?,
        })
    }
}
