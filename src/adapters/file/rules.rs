//! Plain-text rule source
//!
//! Implements the `RuleSource` port over a UTF-8 file with one rule per
//! line.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::models::RuleSet;
use crate::core::ports::{RuleSource, RuleSourceError};

/// Rule source backed by a line-oriented text file
#[derive(Debug, Clone)]
pub struct FileRuleSource {
    path: PathBuf,
}

impl FileRuleSource {
    /// Create a source reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the rules file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RuleSource for FileRuleSource {
    fn load(&self) -> Result<RuleSet, RuleSourceError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let rules = RuleSet::from_lines(&content);
                debug!("loaded {} rule(s) from {}", rules.len(), self.path.display());
                Ok(rules)
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("rules file {} not found, using empty rule set", self.path.display());
                Ok(RuleSet::empty())
            },
            Err(source) => Err(RuleSourceError::Unreadable {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
