//! Core domain logic for regimed
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Rule, RuleSet, MatchResult, ComplianceReport)
//! - `services/` - Rule scoring and report aggregation
//! - `ports/` - Trait definitions for rule sources and regulation storage

pub mod models;
pub mod ports;
pub mod services;
