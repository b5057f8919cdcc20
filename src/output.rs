//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::models::{ComplianceReport, Regulation};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Content of the rules file
#[derive(Debug, Serialize)]
pub struct RuleListResult {
    /// Rule texts, in file order
    pub rules: Vec<String>,
}

/// Stored regulation snapshot
#[derive(Debug, Serialize)]
pub struct RegulationListResult {
    /// Scraped pages
    pub regulations: Vec<Regulation>,
}

/// Outcome of a scrape run
#[derive(Debug, Serialize)]
pub struct ScrapeResult {
    /// Number of pages saved
    pub saved: usize,
    /// Snapshot file written
    pub output: String,
}

/// Render a value as pretty JSON
fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Render a compliance report
#[must_use]
pub fn format_report(report: &ComplianceReport, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(report),
        OutputMode::Human => {
            let mut out = String::new();
            let _ = writeln!(out, "Checked {} against {} rule(s)\n", report.filename, report.total_rules);

            for d in &report.details {
                let mark = if d.found { "FOUND  " } else { "MISSING" };
                let _ = writeln!(out, "  [{mark}] {} (similarity {:.2})", d.rule, d.similarity);
            }
            if !report.details.is_empty() {
                out.push('\n');
            }

            if report.compliant {
                let _ = writeln!(out, "COMPLIANT: all {} rule(s) found", report.total_rules);
            } else {
                let _ = writeln!(
                    out,
                    "NOT COMPLIANT: {} of {} rule(s) missing",
                    report.rules_missing, report.total_rules
                );
            }
            out
        },
    }
}

impl RuleListResult {
    /// Render the result based on output mode
    #[must_use]
    pub fn format(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Json => to_json(self),
            OutputMode::Human if self.rules.is_empty() => "No rules defined.\n".to_string(),
            OutputMode::Human => {
                let mut out = String::new();
                for (i, rule) in self.rules.iter().enumerate() {
                    let _ = writeln!(out, "{:>3}. {rule}", i + 1);
                }
                out
            },
        }
    }
}

impl RegulationListResult {
    /// Render the result based on output mode
    ///
    /// Human mode shows each URL with a short excerpt.
    #[must_use]
    pub fn format(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Json => to_json(&self.regulations),
            OutputMode::Human if self.regulations.is_empty() => {
                "No regulations stored. Run 'regimed scrape' to fetch them.\n".to_string()
            },
            OutputMode::Human => {
                let mut out = String::new();
                for r in &self.regulations {
                    let _ = writeln!(out, "{}", r.url);
                    let _ = writeln!(out, "    {}\n", excerpt(&r.content, 160));
                }
                out
            },
        }
    }
}

impl ScrapeResult {
    /// Render the result based on output mode
    #[must_use]
    pub fn format(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Json => to_json(self),
            OutputMode::Human if self.saved == 0 => "No pages scraped; nothing saved.\n".to_string(),
            OutputMode::Human => format!("Scraped {} page(s) into {}\n", self.saved, self.output),
        }
    }
}

/// First `max` characters of `text`, with an ellipsis when cut
fn excerpt(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() { format!("{head}...") } else { head }
}
