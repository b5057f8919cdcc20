//! Domain models for regimed
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Rule`] / [`RuleSet`] - "The document must say this"
//! - [`MatchResult`] - How one rule scored against one document
//! - [`ComplianceReport`] - The per-document verdict
//! - [`Regulation`] - A scraped regulation page

mod regulation;
mod report;
mod rule;

pub use regulation::Regulation;
pub use report::{ComplianceReport, MatchResult};
pub use rule::{Rule, RuleSet};
