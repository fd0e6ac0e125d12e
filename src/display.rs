//! # Tabular output of planetary ephemerides
//!
//! Two renderings of a `&[PlanetEphemeris]`:
//!
//! * [`EphemerisTable`] – a human-readable table (via
//!   [`comfy-table`](https://docs.rs/comfy-table/latest/comfy_table/)) with the
//!   elongation and the midnight visibility of each body.
//! * [`write_records_csv`] – a CSV export (via `csv` + `serde`), one row per body.
//!
//! ```rust, no_run
//! use sysview::display::EphemerisTable;
//! # let ephemerides: Vec<sysview::sysview::PlanetEphemeris> = unimplemented!();
//! println!("{}", EphemerisTable::new(&ephemerides).with_precision(3));
//! ```

use std::fmt;
use std::io::Write;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::elongation::record_elongation;
use crate::sysview::PlanetEphemeris;
use crate::sysview_errors::SysViewError;
use crate::time::ObservationDate;
use crate::visibility::visible_at_midnight;

/// Display adaptor rendering ephemerides as a table.
///
/// Columns: `Planet | RA [deg] | DEC [deg] | r [AU] | Δ [AU] | Elong. [deg] | Up at midnight`.
/// An elongation that cannot be computed is shown as `n/a`.
pub struct EphemerisTable<'a> {
    ephemerides: &'a [PlanetEphemeris],
    date: Option<ObservationDate>,
    prec: usize,
}

impl<'a> EphemerisTable<'a> {
    pub fn new(ephemerides: &'a [PlanetEphemeris]) -> Self {
        EphemerisTable {
            ephemerides,
            date: None,
            prec: 4,
        }
    }

    /// Print the observation date above the table.
    pub fn with_date(mut self, date: ObservationDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Number of fractional digits of every numeric column.
    pub fn with_precision(mut self, p: usize) -> Self {
        self.prec = p;
        self
    }

    fn build_table(&self) -> Table {
        let visible = visible_at_midnight(self.ephemerides);
        let p = self.prec;

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Planet",
                "RA [deg]",
                "DEC [deg]",
                "r [AU]",
                "Δ [AU]",
                "Elong. [deg]",
                "Up at midnight",
            ]);

        let num = |v: f64| Cell::new(format!("{v:.p$}")).set_alignment(CellAlignment::Right);

        for e in self.ephemerides {
            let elongation = match record_elongation(&e.record) {
                Ok(theta) => num(theta),
                Err(_) => Cell::new("n/a").set_alignment(CellAlignment::Right),
            };
            let up = if e.planet.is_sun_reference() {
                "-"
            } else if visible.contains(&e.planet) {
                "yes"
            } else {
                "no"
            };

            table.add_row(vec![
                Cell::new(e.planet.name()),
                num(e.record.right_ascension),
                num(e.record.declination),
                num(e.record.heliocentric_distance),
                num(e.record.geocentric_distance),
                elongation,
                Cell::new(up).set_alignment(CellAlignment::Center),
            ]);
        }
        table
    }
}

impl fmt::Display for EphemerisTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(date) = &self.date {
            writeln!(f, "Ephemerides at {date} 00:00 UTC")?;
        }
        write!(f, "{}", self.build_table())
    }
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    planet: &'a str,
    right_ascension: f64,
    declination: f64,
    heliocentric_distance: f64,
    geocentric_distance: f64,
    elongation: Option<f64>,
}

/// Write one CSV row per body to `writer`, with a header line.
///
/// The `elongation` column is empty when the angle cannot be computed.
pub fn write_records_csv<W: Write>(
    ephemerides: &[PlanetEphemeris],
    writer: W,
) -> Result<(), SysViewError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for e in ephemerides {
        csv_writer.serialize(ExportRow {
            planet: e.planet.name(),
            right_ascension: e.record.right_ascension,
            declination: e.record.declination,
            heliocentric_distance: e.record.heliocentric_distance,
            geocentric_distance: e.record.geocentric_distance,
            elongation: record_elongation(&e.record).ok(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
