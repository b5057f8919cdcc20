//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`checker`] - Score rules against document text and build reports
//! - [`similarity`] - The quick character-overlap ratio

pub mod checker;
pub mod similarity;

pub use checker::{DEFAULT_THRESHOLD, check_rules, evaluate, summarize_missing};
pub use similarity::quick_ratio;
