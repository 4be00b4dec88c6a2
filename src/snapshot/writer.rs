//! Snapshot Writer
//!
//! Rewrites the snapshot file from the in-memory mapping.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Writes the snapshot file
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Truncate the file and write the whole mapping followed by a newline
    pub fn write(&self, entries: &HashMap<String, String>) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer(&mut writer, entries)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
