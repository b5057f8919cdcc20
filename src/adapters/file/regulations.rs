//! JSON regulation snapshot
//!
//! Implements the `RegulationStore` port over a pretty-printed JSON array
//! of `{ "url": ..., "content": ... }` objects.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::models::Regulation;
use crate::core::ports::{RegulationStore, RegulationStoreError};

/// Regulation store backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonRegulationStore {
    path: PathBuf,
}

impl JsonRegulationStore {
    /// Create a store for the snapshot at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the snapshot file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RegulationStoreError {
        RegulationStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> RegulationStoreError {
        RegulationStoreError::Json {
            path: self.path.clone(),
            source,
        }
    }
}

impl RegulationStore for JsonRegulationStore {
    fn load(&self) -> Result<Vec<Regulation>, RegulationStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let entries: Vec<Regulation> =
            serde_json::from_str(&content).map_err(|e| self.json_error(e))?;
        debug!("loaded {} regulation page(s) from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    fn save(&self, entries: &[Regulation]) -> Result<(), RegulationStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| self.json_error(e))?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}
