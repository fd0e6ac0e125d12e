use std::fmt;

use itertools::Itertools;

use crate::env_state::SysViewEnv;
use crate::horizons::bodies::Planet;
use crate::params::FetchParams;
use crate::sysview_errors::SysViewError;
use crate::time::ObservationDate;

/// Horizons observer-table request for one body over one day.
///
/// The request covers `[date, date.next_day()]` with the step of [`FetchParams`], so the
/// first row of the `$$SOE` block is the state at 00:00 UTC of `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisQuery {
    pub planet: Planet,
    pub start: ObservationDate,
    pub stop: ObservationDate,
    pairs: Vec<(&'static str, String)>,
}

fn quoted(value: &str) -> String {
    format!("'{value}'")
}

impl EphemerisQuery {
    /// Build the query of `planet` at `date`.
    ///
    /// Return
    /// ------
    /// * The query, or [`SysViewError::InvalidDate`] if the next day cannot be computed
    pub fn new(
        planet: Planet,
        date: &ObservationDate,
        params: &FetchParams,
    ) -> Result<Self, SysViewError> {
        let stop = date.next_day()?;
        let pairs = vec![
            ("format", "text".to_string()),
            ("COMMAND", quoted(planet.horizons_command())),
            ("OBJ_DATA", quoted("YES")),
            ("MAKE_EPHEM", quoted("YES")),
            ("EPHEM_TYPE", quoted("OBSERVER")),
            ("CENTER", quoted(&params.center)),
            ("START_TIME", quoted(&date.to_string())),
            ("STOP_TIME", quoted(&stop.to_string())),
            ("STEP_SIZE", quoted(&params.step_size)),
            ("QUANTITIES", quoted(&params.quantities)),
            ("ANG_FORMAT", quoted(&params.ang_format)),
            ("CSV_FORMAT", quoted("YES")),
        ];

        Ok(EphemerisQuery {
            planet,
            start: *date,
            stop,
            pairs,
        })
    }

    /// Query-string parameters, unencoded.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Horizons batch-file rendering of the query (without the `format` switch).
impl fmt::Display for EphemerisQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .pairs()
            .filter(|(k, _)| *k != "format")
            .map(|(k, v)| format!("{k}={v}"))
            .join("\n");
        write!(f, "!$$SOF\n{body}")
    }
}

/// Send `query` to the Horizons API and return the raw text response.
///
/// Argument
/// --------
/// * `env_state`: environment holding the HTTP client
/// * `query`: the request to send
/// * `params`: provides the endpoint URL
///
/// Return
/// ------
/// * The Horizons response. A response without `$$SOE` (unknown body, API error
///   message) is returned as is and rejected later by the parser.
pub fn request_ephemeris(
    env_state: &SysViewEnv,
    query: &EphemerisQuery,
    params: &FetchParams,
) -> Result<String, SysViewError> {
    env_state.get_with_query(&params.api_url, query.pairs())
}

#[cfg(test)]
mod request_test {
    use super::*;

    #[test]
    fn test_query_parameters() {
        let date = ObservationDate::new(2022, 6, 30).unwrap();
        let query = EphemerisQuery::new(Planet::Mars, &date, &FetchParams::default()).unwrap();

        let pairs: Vec<(&str, &str)> = query.pairs().collect();
        assert!(pairs.contains(&("format", "text")));
        assert!(pairs.contains(&("COMMAND", "'499'")));
        assert!(pairs.contains(&("CENTER", "'500'")));
        assert!(pairs.contains(&("START_TIME", "'2022-06-30'")));
        assert!(pairs.contains(&("STOP_TIME", "'2022-07-01'")));
        assert!(pairs.contains(&("STEP_SIZE", "'1 d'")));
        assert!(pairs.contains(&("QUANTITIES", "'2,19,20'")));
        assert!(pairs.contains(&("ANG_FORMAT", "'DEG'")));
        assert!(pairs.contains(&("CSV_FORMAT", "'YES'")));
    }

    #[test]
    fn test_batch_rendering() {
        let date = ObservationDate::new(2022, 6, 22).unwrap();
        let query = EphemerisQuery::new(Planet::Earth, &date, &FetchParams::default()).unwrap();
        let text = query.to_string();
        assert!(text.starts_with("!$$SOF\nCOMMAND='10'\n"));
        assert!(text.ends_with("CSV_FORMAT='YES'"));
        assert!(!text.contains("format=text"));
    }
}
