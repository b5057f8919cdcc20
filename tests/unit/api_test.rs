//! Tests for API module
//!
//! Tests error types, response envelopes, and handler functions.

use std::fs;

use regimed::adapters::{FileRuleSource, JsonRegulationStore};
use regimed::api::{self, ApiError, ApiErrorData, ApiResponse, ErrorCode, UploadRequest};
use regimed::core::models::Regulation;
use regimed::core::ports::RegulationStore;
use regimed::extract::ExtractError;

#[cfg(feature = "pdf")]
use crate::common::{HELVETICA, pdf_document};
use crate::common::Workspace;

// =============================================================================
// ERROR TYPES
// =============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_error_code_not_found() {
        let err = ApiError::not_found("Route not found");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message, "Route not found");
    }

    #[test]
    fn test_error_code_bad_request() {
        let err = ApiError::bad_request("Uploaded file is empty");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_error_code_internal() {
        let err = ApiError::internal("rules unreadable");
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_extract_error_maps_to_bad_request() {
        let err = ApiError::from(ExtractError::Empty);
        assert_eq!(err.code, ErrorCode::BadRequest);
        assert_eq!(err.message, "Uploaded file is empty");
    }

    #[test]
    fn test_error_data_mirrors_error() {
        let data = ApiErrorData::from(&ApiError::internal("rules unreadable"));
        assert_eq!(data.code, "INTERNAL_ERROR");
        assert_eq!(data.message, "rules unreadable");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::not_found("Resource missing");
        let display = format!("{err}");
        assert!(display.contains("NOT_FOUND"));
        assert!(display.contains("Resource missing"));
    }
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

mod response_tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let json = serde_json::to_value(ApiResponse::success(vec!["rule"])).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0], "rule");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_api_response_error() {
        let json = serde_json::to_value(ApiResponse::<()>::error("BAD_REQUEST", "nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert!(json.get("data").is_none());
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[test]
fn test_list_rules_from_file() {
    let workspace = Workspace::new();
    let rules = api::list_rules(&FileRuleSource::new(workspace.rules_file())).unwrap();
    assert_eq!(
        rules,
        vec![
            "Patient data must be encrypted",
            "Access logs retained for six years",
            "Breach notification within 60 days",
        ]
    );
}

#[test]
fn test_unreadable_rules_is_internal_error() {
    let workspace = Workspace::new();
    // a directory cannot be read as a rules file
    let source = FileRuleSource::new(workspace.path());

    let err = api::list_rules(&source).unwrap_err();
    assert_eq!(err.code, ErrorCode::Internal);

    let upload = UploadRequest::new("doc.txt", "text");
    let err = api::check_upload(&source, 0.5, &upload).unwrap_err();
    assert_eq!(err.status_code(), 500);
}

#[test]
fn test_check_upload_reads_rules_fresh() {
    let workspace = Workspace::with_rules("first rule\n");
    let source = FileRuleSource::new(workspace.rules_file());
    let upload = UploadRequest::new("doc.txt", "the first rule and the second rule");

    let before = api::check_upload(&source, 0.99, &upload).unwrap();
    assert_eq!(before.total_rules, 1);

    fs::write(workspace.rules_file(), "first rule\nsecond rule\nthird rule\n").unwrap();
    let after = api::check_upload(&source, 0.99, &upload).unwrap();
    assert_eq!(after.total_rules, 3);
    assert_eq!(after.missing_rules, vec!["third rule"]);
}

#[test]
fn test_invalid_pdf_is_bad_request() {
    let workspace = Workspace::new();
    let source = FileRuleSource::new(workspace.rules_file());
    let upload = UploadRequest::new("scan.PDF", "not really a pdf");

    let err = api::check_upload(&source, 0.5, &upload).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
    assert!(err.message.starts_with("Could not parse PDF"));
}

#[cfg(feature = "pdf")]
#[test]
fn test_pdf_upload_finds_rule() {
    let workspace = Workspace::with_rules("Patient data must be encrypted\n");
    let source = FileRuleSource::new(workspace.rules_file());
    let pdf = pdf_document(HELVETICA, "All patient data must be encrypted at rest");
    let upload = UploadRequest::new("policy.pdf", pdf);

    let report = api::check_upload(&source, 0.99, &upload).unwrap();
    assert_eq!(report.filename, "policy.pdf");
    assert_eq!(report.rules_found, 1);
    assert!(report.compliant);
}

#[cfg(feature = "pdf")]
#[test]
fn test_pdf_with_broken_font_is_bad_request() {
    let workspace = Workspace::new();
    let source = FileRuleSource::new(workspace.rules_file());
    let pdf = pdf_document("<< /Type /Font >>", "Patient data must be encrypted");
    let upload = UploadRequest::new("policy.pdf", pdf);

    let err = api::check_upload(&source, 0.5, &upload).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.message.starts_with("Could not parse PDF"));
}

#[test]
fn test_list_regulations_round_trip() {
    let workspace = Workspace::new();
    let store = JsonRegulationStore::new(workspace.path().join("regulations.json"));
    assert!(api::list_regulations(&store).unwrap().is_empty());

    store
        .save(&[Regulation::new(
            "https://www.hhs.gov/hipaa/for-professionals/privacy/index.html",
            "The HIPAA Privacy Rule",
        )])
        .unwrap();

    let regulations = api::list_regulations(&store).unwrap();
    assert_eq!(regulations.len(), 1);
    assert_eq!(regulations[0].content, "The HIPAA Privacy Rule");
}

#[test]
fn test_corrupt_regulations_is_internal_error() {
    let workspace = Workspace::new();
    let path = workspace.add_document("regulations.json", b"[{\"url\": 1}]");

    let err = api::list_regulations(&JsonRegulationStore::new(path)).unwrap_err();
    assert_eq!(err.code, ErrorCode::Internal);
    assert!(err.message.starts_with("Could not read regulations file"));
}
