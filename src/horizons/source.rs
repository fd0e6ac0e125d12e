//! Where the Horizons text blobs come from.
//!
//! The parser only needs, for each identifier, the full text of one Horizons response.
//! [`EphemerisSource`] abstracts that lookup so the same parsing path serves files
//! written by [`fetch_ephemerides`](crate::horizons::download::fetch_ephemerides) and
//! blobs already held in memory.

use std::collections::HashMap;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::sysview_errors::SysViewError;

/// A provider of Horizons text blobs addressed by identifier.
pub trait EphemerisSource {
    /// Read the full text associated with `source_id`.
    ///
    /// Return
    /// ------
    /// * The blob, or [`SysViewError::UnreadableSource`] if it cannot be resolved.
    fn read_blob(&self, source_id: &str) -> Result<String, SysViewError>;
}

/// Blobs stored as `<dir>/<source_id>.<extension>`.
///
/// An identifier that already carries the extension, or that is an existing path, is
/// used as given.
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: Utf8PathBuf,
    extension: String,
}

impl FileSource {
    pub fn new(dir: impl Into<Utf8PathBuf>, extension: &str) -> Self {
        FileSource {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Path of the file backing `source_id`.
    pub fn path_for(&self, source_id: &str) -> Utf8PathBuf {
        let as_given = Utf8Path::new(source_id);
        let is_path = as_given.is_absolute() || as_given.components().count() > 1;
        if is_path && as_given.is_file() {
            return as_given.to_path_buf();
        }
        if as_given.extension() == Some(self.extension.as_str()) || self.extension.is_empty() {
            return self.dir.join(as_given);
        }
        self.dir.join(format!("{source_id}.{}", self.extension))
    }
}

impl EphemerisSource for FileSource {
    fn read_blob(&self, source_id: &str) -> Result<String, SysViewError> {
        let path = self.path_for(source_id);
        fs::read_to_string(&path).map_err(|e| SysViewError::UnreadableSource(path.to_string(), e))
    }
}

/// Blobs held in memory, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    blobs: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source_id: impl Into<String>, blob: impl Into<String>) {
        self.blobs.insert(source_id.into(), blob.into());
    }

    pub fn with_blob(mut self, source_id: impl Into<String>, blob: impl Into<String>) -> Self {
        self.insert(source_id, blob);
        self
    }
}

impl EphemerisSource for MemorySource {
    fn read_blob(&self, source_id: &str) -> Result<String, SysViewError> {
        self.blobs.get(source_id).cloned().ok_or_else(|| {
            SysViewError::UnreadableSource(
                source_id.to_string(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "no blob for this identifier"),
            )
        })
    }
}
