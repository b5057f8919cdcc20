//! regimed - screen medical documents against a list of compliance rules
//!
//! Each rule is a free-text phrase. A rule counts as present when the
//! document contains it (case-insensitively) or when a quick character
//! overlap ratio between rule and document reaches a threshold. The
//! outcome is a [`core::models::ComplianceReport`].
//!
//! The library also ships the glue around that core: rule and regulation
//! storage, document text extraction, an HTTP-agnostic API layer and a
//! regulation page scraper.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod extract;
pub mod output;
pub mod paths;
pub mod scraper;
