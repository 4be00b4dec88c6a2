//! Snapshot Reader
//!
//! Loads the persisted mapping at startup.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Reads the snapshot file
pub struct SnapshotReader {
    path: PathBuf,
}

impl SnapshotReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the full mapping
    ///
    /// Returns `Ok(None)` when the file does not exist. Any other I/O failure
    /// and any malformed content is reported as an error; the caller decides
    /// whether to start empty.
    pub fn load(&self) -> Result<Option<HashMap<String, String>>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entries: HashMap<String, String> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(entries))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
