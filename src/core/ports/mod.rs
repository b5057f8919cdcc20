//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (rule files, regulation snapshots).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. A database or remote rule source can be swapped in
//! without touching the checker.

mod regulation_store;
mod rule_source;

pub use regulation_store::{RegulationStore, RegulationStoreError};
pub use rule_source::{RuleSource, RuleSourceError};
