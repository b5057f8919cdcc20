//! Regulation store port
//!
//! Defines the interface for reading and writing the scraped regulation
//! snapshot.

use std::path::PathBuf;

use thiserror::Error;

use super::super::models::Regulation;

/// Errors that can occur when accessing the regulation snapshot
#[derive(Debug, Error)]
pub enum RegulationStoreError {
    /// I/O failure reading or writing the snapshot
    #[error("{}: {source}", path.display())]
    Io {
        /// Snapshot location
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Snapshot is not a valid JSON array of regulations
    #[error("{}: invalid JSON: {source}", path.display())]
    Json {
        /// Snapshot location
        path: PathBuf,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },
}

/// Storage for the regulation snapshot
pub trait RegulationStore: Send + Sync {
    /// Load all stored regulations
    ///
    /// Returns an empty list when no snapshot exists yet. A snapshot that is
    /// not an array of regulations is an error, never passed through.
    fn load(&self) -> Result<Vec<Regulation>, RegulationStoreError>;

    /// Replace the snapshot with the given entries
    fn save(&self, entries: &[Regulation]) -> Result<(), RegulationStoreError>;
}
