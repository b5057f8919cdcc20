//! In-memory rule source
//!
//! Serves a fixed rule set. Useful for embedding regimed in another
//! program, or for tests that should not touch the filesystem.

use crate::core::models::RuleSet;
use crate::core::ports::{RuleSource, RuleSourceError};

/// Rule source returning a fixed rule set
#[derive(Debug, Clone, Default)]
pub struct StaticRuleSource {
    rules: RuleSet,
}

impl StaticRuleSource {
    /// Serve the given rules
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl RuleSource for StaticRuleSource {
    fn load(&self) -> Result<RuleSet, RuleSourceError> {
        Ok(self.rules.clone())
    }
}
