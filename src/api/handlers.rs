//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use log::info;

use crate::core::models::{ComplianceReport, Regulation};
use crate::core::ports::{RegulationStore, RuleSource};
use crate::core::services::evaluate;
use crate::extract::{DocumentKind, extract_text};

use super::error::ApiError;
use super::types::{HealthData, UploadRequest};

// =============================================================================
// RULES
// =============================================================================

/// List the active rules, in file order
pub fn list_rules(source: &dyn RuleSource) -> Result<Vec<String>, ApiError> {
    Ok(source.load()?.texts())
}

// =============================================================================
// UPLOAD
// =============================================================================

/// Check an uploaded document against the active rules
///
/// Rules are re-read on every call.
pub fn check_upload(
    source: &dyn RuleSource,
    threshold: f64,
    upload: &UploadRequest,
) -> Result<ComplianceReport, ApiError> {
    let kind = DocumentKind::from_filename(&upload.filename)?;
    let text = extract_text(kind, &upload.bytes)?;
    let rules = source.load()?;

    let report = evaluate(&upload.filename, &text, &rules, threshold);
    info!(
        "checked {}: {}/{} rule(s) found, compliant={}",
        upload.filename, report.rules_found, report.total_rules, report.compliant
    );
    Ok(report)
}

// =============================================================================
// REGULATIONS
// =============================================================================

/// Return the stored regulation snapshot (empty if never scraped)
pub fn list_regulations(store: &dyn RegulationStore) -> Result<Vec<Regulation>, ApiError> {
    Ok(store.load()?)
}

// =============================================================================
// HEALTH
// =============================================================================

/// Report version and rule status
pub fn health(source: &dyn RuleSource, threshold: f64) -> Result<HealthData, ApiError> {
    let rules = source.load()?;
    Ok(HealthData {
        version: crate::VERSION,
        rules: rules.len(),
        threshold,
    })
}
