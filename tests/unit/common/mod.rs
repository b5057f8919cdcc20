//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing regimed components.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Rules used by most fixtures
pub const HIPAA_RULES: &str = "\
Patient data must be encrypted
Access logs retained for six years

  Breach notification within 60 days
";

/// Font dictionary of a well-formed standard Helvetica font
pub const HELVETICA: &str = "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>";

/// Build a one-page PDF showing `text` in a font described by `font_dict`
///
/// The cross-reference table carries real byte offsets so parsers do not
/// need to fall back to recovery.
pub fn pdf_document(font_dict: &str, text: &str) -> Vec<u8> {
    let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{stream}\nendstream", stream.len()),
        font_dict.to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref = pdf.len();
    let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        table.push_str(&format!("{offset:010} 00000 n \n"));
    }
    table.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(table.as_bytes());
    pdf
}

/// A scratch workspace with a rules file and room for documents
///
/// ```text
/// /
/// ├── rules.txt
/// └── <documents added by the test>
/// ```
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a workspace whose `rules.txt` holds [`HIPAA_RULES`]
    pub fn new() -> Self {
        Self::with_rules(HIPAA_RULES)
    }

    /// Create a workspace with the given rules file content
    pub fn with_rules(rules: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(dir.path().join("rules.txt"), rules).unwrap();
        Self { dir }
    }

    /// Root path of the workspace
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the rules file
    pub fn rules_file(&self) -> PathBuf {
        self.dir.path().join("rules.txt")
    }

    /// Write a document and return its path
    pub fn add_document(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
