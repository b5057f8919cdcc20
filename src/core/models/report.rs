//! Match results and the compliance report built from them

use serde::{Deserialize, Serialize};

/// Outcome of scoring one rule against one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The rule text, original casing preserved
    pub rule: String,
    /// Whether the rule was considered present
    pub found: bool,
    /// Quick similarity ratio between rule and document, in `[0.0, 1.0]`
    pub similarity: f64,
}

/// Aggregated compliance verdict for one document
///
/// Every field is derived from the per-rule details; see
/// [`ComplianceReport::from_results`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Name of the checked document (passthrough, not interpreted)
    pub filename: String,
    /// Number of rules evaluated
    pub total_rules: usize,
    /// Number of rules found
    pub rules_found: usize,
    /// Number of rules missing
    pub rules_missing: usize,
    /// Texts of the missing rules, in rule order
    pub missing_rules: Vec<String>,
    /// Per-rule results, in rule order
    pub details: Vec<MatchResult>,
    /// True iff no rule is missing
    pub compliant: bool,
}

impl ComplianceReport {
    /// Aggregate per-rule results into a report
    #[must_use]
    pub fn from_results(filename: impl Into<String>, details: Vec<MatchResult>) -> Self {
        let missing_rules = crate::core::services::summarize_missing(&details);
        let total_rules = details.len();
        let rules_missing = missing_rules.len();

        Self {
            filename: filename.into(),
            total_rules,
            rules_found: total_rules - rules_missing,
            rules_missing,
            missing_rules,
            details,
            compliant: rules_missing == 0,
        }
    }
}
