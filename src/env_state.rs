//! # SysView environment state
//!
//! [`SysViewEnv`] holds the HTTP client shared by every Horizons request. It is
//! cheaply cloneable and built once per [`SysView`](crate::sysview::SysView).
//!
//! ```text
//! SysViewEnv
//! └── http_client (ureq::Agent, global timeout from FetchParams)
//! ```
use std::time::Duration;
use ureq::Agent;

use crate::params::FetchParams;
use crate::sysview_errors::SysViewError;

#[derive(Debug, Clone)]
pub struct SysViewEnv {
    pub http_client: Agent,
    timeout: Duration,
}

impl Default for SysViewEnv {
    fn default() -> Self {
        Self::new(FetchParams::default().timeout_secs)
    }
}

impl SysViewEnv {
    /// Create a new environment whose requests time out after `timeout_secs` seconds.
    pub fn new(timeout_secs: u64) -> Self {
        let timeout = Duration::from_secs(timeout_secs);
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        let agent: Agent = config.into();

        SysViewEnv {
            http_client: agent,
            timeout,
        }
    }

    /// Global timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Perform a GET request with URL-encoded query parameters and return the body.
    ///
    /// Arguments
    /// ---------
    /// * `url`: endpoint without query string
    /// * `params`: `(key, value)` pairs, percent-encoded by the client
    ///
    /// Return
    /// ------
    /// * The response body, or [`SysViewError::HttpError`] on transport errors and
    ///   non-2xx status codes
    pub(crate) fn get_with_query<'a, I>(&self, url: &str, params: I) -> Result<String, SysViewError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let body = self
            .http_client
            .get(url)
            .query_pairs(params)
            .call()?
            .body_mut()
            .read_to_string()?;
        Ok(body)
    }
}

#[cfg(test)]
mod env_state_test {
    use super::*;

    #[test]
    fn test_default_timeout_follows_fetch_params() {
        let env = SysViewEnv::default();
        assert_eq!(
            env.timeout(),
            Duration::from_secs(FetchParams::default().timeout_secs)
        );
        assert_eq!(SysViewEnv::new(3).timeout(), Duration::from_secs(3));
    }
}
