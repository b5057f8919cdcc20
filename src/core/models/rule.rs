//! Rule model
//!
//! A rule is a single compliance requirement expressed as free text
//! ("Patient data must be encrypted"). Rules are matched heuristically
//! against document text; they carry no identity beyond their content.

use serde::{Deserialize, Serialize};

/// A single compliance rule
///
/// Never empty: construction trims surrounding whitespace and rejects
/// blank input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule(String);

impl Rule {
    /// Create a rule from raw text, trimming whitespace
    ///
    /// Returns `None` when the text is empty after trimming.
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The rule text, original casing preserved
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Rule {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or_else(|| "rule text must not be empty".to_string())
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.0
    }
}

/// An ordered, immutable collection of rules
///
/// Built fresh for every check. Order follows the source and only matters
/// for stable report ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a rule set from line-oriented text
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Each line is trimmed;
    /// blank lines are dropped.
    #[must_use]
    pub fn from_lines(content: &str) -> Self {
        content.split(['\n', '\r']).filter_map(Rule::new).collect()
    }

    /// Number of rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Rule texts in source order
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.text().to_string()).collect()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
