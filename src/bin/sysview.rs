use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use sysview::constants::Degree;
use sysview::display::{write_records_csv, EphemerisTable};
use sysview::elongation::{cos_calc, mean_elongation};
use sysview::horizons::bodies::Planet;
use sysview::horizons::request::EphemerisQuery;
use sysview::params::FetchParams;
use sysview::sysview::SysView;
use sysview::sysview_errors::SysViewError;
use sysview::time::ObservationDate;

#[derive(Parser)]
#[command(name = "sysview", about = "Planetary ephemerides and solar elongations from JPL Horizons")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the planets from Horizons, store the responses and print the table
    Fetch {
        /// Observation date (YYYY-MM-DD), today (UTC) by default
        #[arg(long)]
        date: Option<String>,
        /// Directory where the responses are written
        #[arg(long)]
        dir: Option<Utf8PathBuf>,
        /// Horizons observing center
        #[arg(long, default_value = "500")]
        center: String,
        /// HTTP timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
        /// Fractional digits in the table
        #[arg(long, default_value = "4")]
        precision: usize,
        /// Print the Horizons queries instead of sending them
        #[arg(long)]
        dry_run: bool,
    },
    /// Parse previously fetched responses and print the table
    Parse {
        /// Directory holding the responses
        #[arg(long)]
        dir: Option<Utf8PathBuf>,
        /// Fractional digits in the table
        #[arg(long, default_value = "4")]
        precision: usize,
        /// Bodies to parse (all by default)
        bodies: Vec<String>,
    },
    /// Elongation angle from a geocentric and a heliocentric distance
    Elongation {
        /// Earth-body distance in AU
        #[arg(long)]
        ep: f64,
        /// Sun-body distance in AU
        #[arg(long, conflicts_with = "planet", required_unless_present = "planet")]
        hp: Option<f64>,
        /// Use the mean heliocentric distance of this planet
        #[arg(long)]
        planet: Option<String>,
    },
    /// Export previously fetched responses as CSV
    Export {
        /// Directory holding the responses
        #[arg(long)]
        dir: Option<Utf8PathBuf>,
        /// Output file, stdout by default
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn make_view(dir: Option<Utf8PathBuf>, params: FetchParams) -> Result<SysView, SysViewError> {
    match dir {
        Some(dir) => Ok(SysView::with_data_dir(params, dir)),
        None => SysView::new(params),
    }
}

fn parse_planets(names: &[String]) -> Result<Vec<Planet>, SysViewError> {
    if names.is_empty() {
        return Ok(Planet::ALL.to_vec());
    }
    names.iter().map(|n| n.parse()).collect()
}

/// Angle for `--ep` with either `--hp` or the mean distance of `--planet`.
///
/// clap rejects a missing `--hp` without `--planet`; a NaN distance would still
/// surface as a domain error.
fn elongation(ep: f64, hp: Option<f64>, planet: Option<&str>) -> Result<Degree, SysViewError> {
    match planet {
        Some(name) => mean_elongation(name.parse()?, ep),
        None => cos_calc(ep, hp.unwrap_or(f64::NAN)),
    }
}

fn run(cli: Cli) -> Result<(), SysViewError> {
    match cli.command {
        Commands::Fetch {
            date,
            dir,
            center,
            timeout,
            precision,
            dry_run,
        } => {
            let date: ObservationDate = match date {
                Some(d) => d.parse()?,
                None => ObservationDate::today()?,
            };
            let params = FetchParams::builder()
                .center(center)
                .timeout_secs(timeout)
                .build()?;

            if dry_run {
                for planet in Planet::ALL {
                    println!("{}\n", EphemerisQuery::new(planet, &date, &params)?);
                }
                return Ok(());
            }

            let view = make_view(dir, params)?;
            let ephemerides = view.gen_ephem(&date)?;
            eprintln!("Horizons responses written to {}", view.data_dir());
            println!(
                "{}",
                EphemerisTable::new(&ephemerides)
                    .with_date(date)
                    .with_precision(precision)
            );
        }
        Commands::Parse {
            dir,
            precision,
            bodies,
        } => {
            let planets = parse_planets(&bodies)?;
            let view = make_view(dir, FetchParams::default())?.with_planets(&planets);
            let ephemerides = view.load()?;
            println!(
                "{}",
                EphemerisTable::new(&ephemerides).with_precision(precision)
            );
        }
        Commands::Elongation { ep, hp, planet } => {
            println!("{:.4}", elongation(ep, hp, planet.as_deref())?);
        }
        Commands::Export { dir, output } => {
            let view = make_view(dir, FetchParams::default())?;
            let ephemerides = view.load()?;
            match output {
                Some(path) => write_records_csv(&ephemerides, File::create(path)?)?,
                None => write_records_csv(&ephemerides, io::stdout().lock())?,
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
