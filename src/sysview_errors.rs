use thiserror::Error;

#[derive(Error, Debug)]
pub enum SysViewError {
    #[error("No $$SOE marker found in ephemeris source: {source_id}")]
    NotFound { source_id: String },

    #[error("Malformed ephemeris record in {source_id}: {reason}")]
    MalformedRecord { source_id: String, reason: String },

    #[error("Elongation out of domain: cosine ratio {ratio} for ep = {ep} AU, hp = {hp} AU")]
    DomainError { ep: f64, hp: f64, ratio: f64 },

    #[error("Unable to read ephemeris source {0}: {1}")]
    UnreadableSource(String, #[source] std::io::Error),

    #[error("Invalid observation date: {0}")]
    InvalidDate(String),

    #[error("Invalid planet name: {0}")]
    InvalidPlanet(String),

    #[error("Invalid fetch parameter: {0}")]
    InvalidFetchParameter(String),

    #[error("HTTP ureq error: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Base dir creation error for Horizons data: {0}")]
    UnableToCreateBaseDir(String),

    #[error("UTF-8 Path error: {0}")]
    Utf8PathError(String),
}

impl PartialEq for SysViewError {
    fn eq(&self, other: &Self) -> bool {
        use SysViewError::*;
        match (self, other) {
            (NotFound { source_id: a }, NotFound { source_id: b }) => a == b,
            (
                MalformedRecord {
                    source_id: a,
                    reason: ra,
                },
                MalformedRecord {
                    source_id: b,
                    reason: rb,
                },
            ) => a == b && ra == rb,
            (
                DomainError {
                    ep: ea,
                    hp: ha,
                    ratio: xa,
                },
                DomainError {
                    ep: eb,
                    hp: hb,
                    ratio: xb,
                },
            ) => ea == eb && ha == hb && (xa == xb || (xa.is_nan() && xb.is_nan())),
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (InvalidPlanet(a), InvalidPlanet(b)) => a == b,
            (InvalidFetchParameter(a), InvalidFetchParameter(b)) => a == b,
            (UnableToCreateBaseDir(a), UnableToCreateBaseDir(b)) => a == b,
            (Utf8PathError(a), Utf8PathError(b)) => a == b,

            // wrapped errors are opaque: same variant is enough
            (UnreadableSource(a, _), UnreadableSource(b, _)) => a == b,
            (HttpError(_), HttpError(_)) => true,
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}

impl SysViewError {
    pub(crate) fn malformed(source_id: &str, reason: impl Into<String>) -> Self {
        SysViewError::MalformedRecord {
            source_id: source_id.to_string(),
            reason: reason.into(),
        }
    }
}
