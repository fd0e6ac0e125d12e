use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;
use std::fs;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::env_state::SysViewEnv;
use crate::horizons::bodies::Planet;
use crate::horizons::request::{request_ephemeris, EphemerisQuery};
use crate::params::FetchParams;
use crate::sysview_errors::SysViewError;
use crate::time::ObservationDate;

/// Default directory for the Horizons responses: `<user cache>/sysview_cache/horizons`.
///
/// Return
/// ------
/// * The directory path (not created)
/// * An error if the platform has no cache directory or if it is not valid UTF-8
pub fn default_data_dir() -> Result<Utf8PathBuf, SysViewError> {
    let base_dir = BaseDirs::new().ok_or_else(|| {
        SysViewError::UnableToCreateBaseDir("cannot find the user cache directory".into())
    })?;

    let cache_path = Utf8Path::from_path(base_dir.cache_dir()).ok_or_else(|| {
        SysViewError::Utf8PathError(format!("{}", base_dir.cache_dir().display()))
    })?;

    Ok(cache_path.join("sysview_cache").join("horizons"))
}

/// Path of the file holding the Horizons response of `planet`.
pub fn ephemeris_file_path(dir: &Utf8Path, planet: Planet, params: &FetchParams) -> Utf8PathBuf {
    dir.join(format!("{}.{}", planet.file_stem(), params.file_extension))
}

/// Fetch one body and write the raw response to `dir`.
///
/// Return
/// ------
/// * The path of the written file
pub fn fetch_planet(
    env_state: &SysViewEnv,
    params: &FetchParams,
    planet: Planet,
    date: &ObservationDate,
    dir: &Utf8Path,
) -> Result<Utf8PathBuf, SysViewError> {
    let query = EphemerisQuery::new(planet, date, params)?;
    let response = request_ephemeris(env_state, &query, params)?;

    let path = ephemeris_file_path(dir, planet, params);
    fs::write(&path, response)?;
    Ok(path)
}

/// Fetch the ephemerides of `planets` at `date` and store them in `dir`.
///
/// Requests are sent one after the other; the first failure aborts the batch and
/// files already written are left in place.
///
/// Arguments
/// ---------
/// * `env_state`: environment holding the HTTP client
/// * `params`: request and storage parameters
/// * `planets`: bodies to fetch, in order
/// * `date`: observation date
/// * `dir`: output directory, created if missing
///
/// Return
/// ------
/// * The written paths, in the order of `planets`
pub fn fetch_ephemerides(
    env_state: &SysViewEnv,
    params: &FetchParams,
    planets: &[Planet],
    date: &ObservationDate,
    dir: &Utf8Path,
) -> Result<Vec<Utf8PathBuf>, SysViewError> {
    fs::create_dir_all(dir)
        .map_err(|e| SysViewError::UnableToCreateBaseDir(format!("{dir}: {e}")))?;

    #[cfg(feature = "progress")]
    let pb = {
        let pb = ProgressBar::new(planets.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} | {msg}") {
            pb.set_style(style);
        }
        pb
    };

    let mut paths = Vec::with_capacity(planets.len());
    for planet in planets {
        #[cfg(feature = "progress")]
        pb.set_message(format!("Horizons: {} ({date})", planet.name()));

        paths.push(fetch_planet(env_state, params, *planet, date, dir)?);

        #[cfg(feature = "progress")]
        pb.inc(1);
    }

    #[cfg(feature = "progress")]
    pb.finish_and_clear();

    Ok(paths)
}
