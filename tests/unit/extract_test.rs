//! Tests for PDF text extraction
//!
//! Documents are built in memory with a valid cross-reference table.

#![cfg(feature = "pdf")]

use regimed::extract::{DocumentKind, ExtractError, extract_text};
use test_case::test_case;

use crate::common::{HELVETICA, pdf_document};

#[test]
fn test_pdf_page_text_is_extracted() {
    let pdf = pdf_document(HELVETICA, "Patient data must be encrypted");

    let text = extract_text(DocumentKind::Pdf, &pdf).unwrap();
    assert!(text.contains("Patient data must be encrypted"));
}

#[test_case("<< /Type /Font >>" ; "missing subtype")]
#[test_case("<< /Type /Font /Subtype /Type1 >>" ; "missing base font")]
#[test_case("<< /Type /Font /Subtype /Type0 /BaseFont /Broken /Encoding /Identity-H >>" ; "type0 without descendants")]
#[test_case(
    "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /FirstChar 32 /LastChar 126 /Widths [500 500] >>"
    ; "short widths array"
)]
fn test_malformed_font_is_a_parse_error(font: &str) {
    let pdf = pdf_document(font, "Patient data must be encrypted");

    let err = extract_text(DocumentKind::Pdf, &pdf).unwrap_err();
    assert!(matches!(err, ExtractError::Pdf(_)));
    assert!(err.to_string().starts_with("Could not parse PDF: "));
}
