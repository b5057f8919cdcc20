//! Rule source port
//!
//! Defines the interface for loading the active rule set.

use std::path::PathBuf;

use thiserror::Error;

use super::super::models::RuleSet;

/// Errors that can occur when loading rules
///
/// A missing source is not an error: implementations return an empty
/// [`RuleSet`] instead.
#[derive(Debug, Error)]
pub enum RuleSourceError {
    /// The source exists but could not be read
    #[error("could not read rules from {}: {source}", path.display())]
    Unreadable {
        /// Location of the rule source
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Source of compliance rules
///
/// Implementations re-read their backing store on every call; rule sets
/// are never cached between checks.
pub trait RuleSource: Send + Sync {
    /// Load the current rule set
    fn load(&self) -> Result<RuleSet, RuleSourceError>;
}
