//! Destinations for exported payloads.
//!
//! - [`DirectorySink`]: writes `<dir>/<filename>`, creating the directory if needed.
//! - [`MemorySink`]: keeps payloads in memory, for tests.

use crate::error::{RecorderError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Receives a payload under a filename and reports where it went.
pub trait ExportSink {
    fn save(&mut self, filename: &str, payload: &[u8]) -> Result<PathBuf>;
}

pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(RecorderError::Io)?;
        }
        Ok(())
    }
}

impl ExportSink for DirectorySink {
    fn save(&mut self, filename: &str, payload: &[u8]) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.dir.join(filename);
        fs::write(&path, payload).map_err(RecorderError::Io)?;
        debug!(path = %path.display(), bytes = payload.len(), "export written");
        Ok(path)
    }
}

#[derive(Debug, Default)]
pub struct MemorySink {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.files
            .get(filename)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn filenames(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ExportSink for MemorySink {
    fn save(&mut self, filename: &str, payload: &[u8]) -> Result<PathBuf> {
        self.files.insert(filename.to_string(), payload.to_vec());
        Ok(PathBuf::from(filename))
    }
}
