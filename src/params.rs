//! # Horizons fetch parameters
//!
//! [`FetchParams`] gathers everything that shapes a Horizons request and the way its
//! response is stored: endpoint, observing center, table quantities, step size, HTTP
//! timeout and the extension of the files written to disk.
//!
//! Values are set through the fluent [`FetchParamsBuilder`], validated by
//! [`FetchParamsBuilder::build`]:
//!
//! ```rust
//! use sysview::params::FetchParams;
//!
//! let params = FetchParams::builder()
//!     .center("500@399")
//!     .timeout_secs(30)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.quantities, "2,19,20");
//! ```
//!
//! The defaults request the observer table whose columns are described by
//! [`ColumnLayout::HORIZONS`](crate::horizons::record::ColumnLayout::HORIZONS). Changing
//! `quantities` changes the column layout of the response.

use crate::constants::HORIZONS_API_URL;
use crate::sysview_errors::SysViewError;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchParams {
    /// Horizons API endpoint.
    pub api_url: String,
    /// Observing site, `500` is the geocenter.
    pub center: String,
    /// Table step, e.g. `1 d`.
    pub step_size: String,
    /// Observer-table quantity codes: 2 = RA/DEC, 19 = r/rdot, 20 = delta/deldot.
    pub quantities: String,
    /// Angle format of RA/DEC, `DEG` or `HMS`.
    pub ang_format: String,
    /// Global timeout of one HTTP request, in seconds.
    pub timeout_secs: u64,
    /// Extension of the stored Horizons responses.
    pub file_extension: String,
}

impl FetchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> FetchParamsBuilder {
        FetchParamsBuilder::new()
    }
}

impl Default for FetchParams {
    fn default() -> Self {
        FetchParams {
            api_url: HORIZONS_API_URL.to_string(),
            center: "500".to_string(),
            step_size: "1 d".to_string(),
            quantities: "2,19,20".to_string(),
            ang_format: "DEG".to_string(),
            timeout_secs: 10,
            file_extension: "csv".to_string(),
        }
    }
}

/// Builder for [`FetchParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct FetchParamsBuilder {
    params: FetchParams,
}

impl FetchParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_url(mut self, v: impl Into<String>) -> Self {
        self.params.api_url = v.into();
        self
    }
    pub fn center(mut self, v: impl Into<String>) -> Self {
        self.params.center = v.into();
        self
    }
    pub fn step_size(mut self, v: impl Into<String>) -> Self {
        self.params.step_size = v.into();
        self
    }
    pub fn quantities(mut self, v: impl Into<String>) -> Self {
        self.params.quantities = v.into();
        self
    }
    pub fn ang_format(mut self, v: impl Into<String>) -> Self {
        self.params.ang_format = v.into();
        self
    }
    pub fn timeout_secs(mut self, v: u64) -> Self {
        self.params.timeout_secs = v;
        self
    }
    pub fn file_extension(mut self, v: impl Into<String>) -> Self {
        self.params.file_extension = v.into();
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `api_url` starts with `http://` or `https://`.
    /// * `center`, `step_size`, `quantities` and `file_extension` are not blank.
    /// * `ang_format` is `DEG` or `HMS` (case-insensitive, stored upper-case).
    /// * `timeout_secs >= 1`.
    ///
    /// Return
    /// ----------
    /// * `Ok(FetchParams)` or [`SysViewError::InvalidFetchParameter`] naming the rule.
    pub fn build(self) -> Result<FetchParams, SysViewError> {
        let mut p = self.params;

        if !(p.api_url.starts_with("http://") || p.api_url.starts_with("https://")) {
            return Err(SysViewError::InvalidFetchParameter(format!(
                "api_url must be an http(s) URL, got {:?}",
                p.api_url
            )));
        }

        for (name, value) in [
            ("center", &p.center),
            ("step_size", &p.step_size),
            ("quantities", &p.quantities),
            ("file_extension", &p.file_extension),
        ] {
            if value.trim().is_empty() {
                return Err(SysViewError::InvalidFetchParameter(format!(
                    "{name} must not be empty"
                )));
            }
        }

        p.ang_format = p.ang_format.trim().to_ascii_uppercase();
        if p.ang_format != "DEG" && p.ang_format != "HMS" {
            return Err(SysViewError::InvalidFetchParameter(format!(
                "ang_format must be DEG or HMS, got {:?}",
                p.ang_format
            )));
        }

        if p.timeout_secs == 0 {
            return Err(SysViewError::InvalidFetchParameter(
                "timeout_secs must be >= 1".into(),
            ));
        }

        p.file_extension = p.file_extension.trim_start_matches('.').to_string();

        Ok(p)
    }
}

#[cfg(test)]
mod params_test {
    use super::*;

    #[test]
    fn test_default_build() {
        let params = FetchParams::builder().build().unwrap();
        assert_eq!(params, FetchParams::default());
    }

    #[test]
    fn test_normalization() {
        let params = FetchParams::builder()
            .ang_format(" deg ")
            .file_extension(".txt")
            .build()
            .unwrap();
        assert_eq!(params.ang_format, "DEG");
        assert_eq!(params.file_extension, "txt");
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            FetchParams::builder().timeout_secs(0).build().unwrap_err(),
            SysViewError::InvalidFetchParameter("timeout_secs must be >= 1".into())
        );
        assert_eq!(
            FetchParams::builder().center("  ").build().unwrap_err(),
            SysViewError::InvalidFetchParameter("center must not be empty".into())
        );
        assert!(FetchParams::builder().api_url("ftp://x").build().is_err());
        assert!(FetchParams::builder().ang_format("rad").build().is_err());
    }
}
