//! Failures surfaced by the API handlers
//!
//! Every failure carries one of three codes. Upload problems (bad extension,
//! empty body, unparseable PDF) are the caller's fault and answer 400. An
//! unreadable rules file or regulation snapshot is a deployment problem and
//! answers 500. Unknown routes answer 404.

use serde::Serialize;

use crate::core::ports::{RegulationStoreError, RuleSourceError};
use crate::extract::ExtractError;

/// Failure category, fixing the HTTP status and the `error.code` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No such route (404)
    NotFound,
    /// The upload was rejected (400)
    BadRequest,
    /// Rules or regulations could not be read (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status sent back for this category
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Internal => 500,
        }
    }

    /// Value of `error.code` in the response envelope
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// A handler failure, ready to be rendered by any transport
///
/// The CLI prints it; the HTTP server turns it into an error envelope.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Category of the failure
    pub code: ErrorCode,
    /// Message shown to the uploader, e.g. "Uploaded file is empty"
    pub message: String,
}

impl ApiError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Unknown route
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Rejected upload
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Rules or regulations unavailable
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    /// Shorthand for `self.code.status_code()`
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<RuleSourceError> for ApiError {
    fn from(err: RuleSourceError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<RegulationStoreError> for ApiError {
    fn from(err: RegulationStoreError) -> Self {
        Self::internal(format!("Could not read regulations file: {err}"))
    }
}

/// The `error` object of a failed response envelope
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// One of `NOT_FOUND`, `BAD_REQUEST`, `INTERNAL_ERROR`
    pub code: String,
    /// Same text as [`ApiError::message`]
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}
