//! # SysView: fetch, store, parse, compute
//!
//! [`SysView`] wires together the pieces of the crate:
//!
//! 1. **Environment state** ([`SysViewEnv`]) – the HTTP client.
//! 2. **Fetch parameters** ([`FetchParams`]) – Horizons query and storage settings.
//! 3. **Data directory** – where each body's response is written as `<stem>.<ext>`.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use sysview::params::FetchParams;
//! use sysview::sysview::SysView;
//! use sysview::time::ObservationDate;
//!
//! let view = SysView::new(FetchParams::default()).unwrap();
//! let date: ObservationDate = "2022-06-22".parse().unwrap();
//!
//! // Fetch the eight bodies, write them to disk, parse them back
//! let ephemerides = view.gen_ephem(&date).unwrap();
//! for (planet, elongation) in SysView::elongations(&ephemerides) {
//!     println!("{planet}: {elongation:?}");
//! }
//! ```
//!
//! ## Errors
//!
//! Fetching and parsing are fail-fast over the batch. Elongations are returned per
//! body, so a [`DomainError`](SysViewError::DomainError) on one body (the Sun slot has
//! a zero heliocentric distance) does not hide the others.

use camino::{Utf8Path, Utf8PathBuf};

use crate::constants::Degree;
use crate::elongation::record_elongation;
use crate::env_state::SysViewEnv;
use crate::horizons::bodies::Planet;
use crate::horizons::download::{default_data_dir, fetch_ephemerides};
use crate::horizons::parser::parse_data;
use crate::horizons::record::EphemerisRecord;
use crate::horizons::source::FileSource;
use crate::params::FetchParams;
use crate::sysview_errors::SysViewError;
use crate::time::ObservationDate;

/// Parsed record of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetEphemeris {
    pub planet: Planet,
    pub record: EphemerisRecord,
}

#[derive(Debug, Clone)]
pub struct SysView {
    env_state: SysViewEnv,
    params: FetchParams,
    data_dir: Utf8PathBuf,
    planets: Vec<Planet>,
}

impl SysView {
    /// Construct a new [`SysView`] storing responses in the default cache directory.
    ///
    /// Return
    /// ----------
    /// * A new instance, or an error if the cache directory cannot be resolved
    pub fn new(params: FetchParams) -> Result<Self, SysViewError> {
        let data_dir = default_data_dir()?;
        Ok(Self::with_data_dir(params, data_dir))
    }

    /// Construct a new [`SysView`] storing responses in `data_dir`.
    pub fn with_data_dir(params: FetchParams, data_dir: impl Into<Utf8PathBuf>) -> Self {
        SysView {
            env_state: SysViewEnv::new(params.timeout_secs),
            params,
            data_dir: data_dir.into(),
            planets: Planet::ALL.to_vec(),
        }
    }

    /// Restrict the bodies handled by [`gen_ephem`](Self::gen_ephem) and [`load`](Self::load).
    pub fn with_planets(mut self, planets: &[Planet]) -> Self {
        self.planets = planets.to_vec();
        self
    }

    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    pub fn params(&self) -> &FetchParams {
        &self.params
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Fetch every body at `date`, store the responses and parse them.
    ///
    /// Return
    /// ----------
    /// * One [`PlanetEphemeris`] per body, in the configured order
    ///
    /// See also
    /// ------------
    /// * [`fetch_ephemerides`] – The download step.
    /// * [`load`](Self::load) – The parsing step alone.
    pub fn gen_ephem(&self, date: &ObservationDate) -> Result<Vec<PlanetEphemeris>, SysViewError> {
        fetch_ephemerides(
            &self.env_state,
            &self.params,
            &self.planets,
            date,
            &self.data_dir,
        )?;
        self.load()
    }

    /// Parse the responses already stored in the data directory.
    pub fn load(&self) -> Result<Vec<PlanetEphemeris>, SysViewError> {
        let source = FileSource::new(self.data_dir.clone(), &self.params.file_extension);
        let records = parse_data(&source, self.planets.iter().map(|p| p.file_stem()))?;

        Ok(self
            .planets
            .iter()
            .zip(records)
            .map(|(planet, record)| PlanetEphemeris {
                planet: *planet,
                record,
            })
            .collect())
    }

    /// Elongation of every body, each with its own result.
    pub fn elongations(
        ephemerides: &[PlanetEphemeris],
    ) -> Vec<(Planet, Result<Degree, SysViewError>)> {
        ephemerides
            .iter()
            .map(|e| (e.planet, record_elongation(&e.record)))
            .collect()
    }
}
