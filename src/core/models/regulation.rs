//! Regulation model
//!
//! One scraped regulatory web page, reduced to plain text.

use serde::{Deserialize, Serialize};

/// A scraped regulation page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regulation {
    /// Source URL
    pub url: String,
    /// Extracted plain text
    pub content: String,
}

impl Regulation {
    /// Create a regulation entry
    #[must_use]
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
        }
    }
}
