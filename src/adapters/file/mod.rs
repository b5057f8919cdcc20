//! File-based adapters
//!
//! - [`FileRuleSource`] - rules from a plain-text file, one per line
//! - [`JsonRegulationStore`] - regulation snapshot as a JSON array

mod regulations;
mod rules;

pub use regulations::JsonRegulationStore;
pub use rules::FileRuleSource;
