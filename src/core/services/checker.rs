//! Compliance check service
//!
//! Scores every rule against the document text independently and
//! aggregates the outcome. Pure business logic with no I/O.

use log::debug;

use super::similarity::quick_ratio;
use crate::core::models::{ComplianceReport, MatchResult, RuleSet};

/// Similarity threshold used when the caller does not supply one
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Check every rule against the document text
///
/// A rule is found when its lowercased text occurs literally in the
/// lowercased document, or when the quick similarity ratio between the
/// two reaches `threshold`. The ratio compares the rule with the *whole*
/// document, so containment is the main detection path.
///
/// `threshold` is not validated. Values above `1.0` disable the
/// similarity fallback; values at or below `0.0` mark every rule found.
///
/// Returns one result per rule, in rule order.
#[must_use]
pub fn check_rules(text: &str, rules: &RuleSet, threshold: f64) -> Vec<MatchResult> {
    let text_lower = text.to_lowercase();

    rules
        .iter()
        .map(|rule| {
            let rule_lower = rule.text().to_lowercase();
            let similarity = quick_ratio(&rule_lower, &text_lower);
            let found = text_lower.contains(&rule_lower) || similarity >= threshold;
            debug!("rule {:?}: found={found} similarity={similarity:.3}", rule.text());

            MatchResult {
                rule: rule.text().to_string(),
                found,
                similarity,
            }
        })
        .collect()
}

/// Texts of the rules that were not found, in result order
#[must_use]
pub fn summarize_missing(results: &[MatchResult]) -> Vec<String> {
    results.iter().filter(|r| !r.found).map(|r| r.rule.clone()).collect()
}

/// Check rules and aggregate the results into a report
#[must_use]
pub fn evaluate(filename: &str, text: &str, rules: &RuleSet, threshold: f64) -> ComplianceReport {
    ComplianceReport::from_results(filename, check_rules(text, rules, threshold))
}
