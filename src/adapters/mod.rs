//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - rules text file and JSON regulation snapshot
//! - `memory` - fixed, in-memory rule set

pub mod file;
pub mod memory;

pub use file::{FileRuleSource, JsonRegulationStore};
pub use memory::StaticRuleSource;
