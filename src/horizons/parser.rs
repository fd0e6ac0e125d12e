//! Batch parsing of Horizons responses.
//!
//! Two policies are offered over the same per-identifier parse:
//!
//! * [`parse_data`] stops at the first failing identifier and returns its error.
//! * [`parse_each`] keeps going and returns one result per identifier, leaving the
//!   skip-or-abort decision to the caller.
//!
//! Both preserve the order of the identifiers given as input.

use crate::horizons::record::{ColumnLayout, EphemerisRecord};
use crate::horizons::source::EphemerisSource;
use crate::sysview_errors::SysViewError;

/// Read and parse the record of a single identifier.
pub fn parse_one<S: EphemerisSource + ?Sized>(
    source: &S,
    source_id: &str,
    layout: &ColumnLayout,
) -> Result<EphemerisRecord, SysViewError> {
    let blob = source.read_blob(source_id)?;
    EphemerisRecord::from_horizons_text(&blob, source_id, layout)
}

/// Parse the Horizons responses of all `source_ids`, failing fast.
///
/// Arguments
/// ---------
/// * `source`: where the blobs are read from
/// * `source_ids`: identifiers to parse, e.g. the file stems `["mercury", "venus", ...]`
///
/// Return
/// ------
/// * One [`EphemerisRecord`] per identifier, in the same order
/// * The first error met, naming the offending identifier
///
/// Example
/// -------
/// ```rust
/// use sysview::horizons::parser::parse_data;
/// use sysview::horizons::source::MemorySource;
///
/// let source = MemorySource::new()
///     .with_blob("mars", "header\n$$SOE\n d, , , 15.7, 6.1, 1.38, -2.2, 1.49, -18.1,\n$$EOE\n");
/// let records = parse_data(&source, &["mars"]).unwrap();
/// assert_eq!(records[0].geocentric_distance, 1.49);
/// ```
pub fn parse_data<S, I>(source: &S, source_ids: I) -> Result<Vec<EphemerisRecord>, SysViewError>
where
    S: EphemerisSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    source_ids
        .into_iter()
        .map(|id| parse_one(source, id.as_ref(), &ColumnLayout::HORIZONS))
        .collect()
}

/// Parse every identifier independently.
///
/// Return
/// ------
/// * A vector of `(identifier, result)` pairs in input order
pub fn parse_each<S, I>(
    source: &S,
    source_ids: I,
) -> Vec<(String, Result<EphemerisRecord, SysViewError>)>
where
    S: EphemerisSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    source_ids
        .into_iter()
        .map(|id| {
            let id = id.as_ref();
            (
                id.to_string(),
                parse_one(source, id, &ColumnLayout::HORIZONS),
            )
        })
        .collect()
}
