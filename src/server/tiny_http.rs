//! tiny_http server adapter
//!
//! Handles routing, body reading, and response conversion for tiny_http.
//! Routes are accepted with or without an `/api` (or `/api/v1`) prefix:
//!
//! - `GET  /rules`        - active rules
//! - `POST /upload`       - check a document (raw body, name via `?filename=`
//!   or the `X-Filename` header)
//! - `GET  /regulations`  - stored regulation snapshot
//! - `GET  /health`       - version and rule count

use std::io::{Cursor, Read};

use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use regimed::api::{self, ApiError, ApiResponse, UploadRequest};
use regimed::config::Config;

/// Largest accepted upload
const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

/// Header carrying the upload's file name
const FILENAME_HEADER: &str = "X-Filename";

/// Status code and JSON body produced by the router
#[derive(Debug)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// Serialized response envelope
    pub body: String,
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
pub fn handle_api_request(request: &mut Request, config: &Config) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().clone();
    let url = request.url().to_string();
    let filename = request
        .headers()
        .iter()
        .find(|h| h.field.equiv(FILENAME_HEADER))
        .map(|h| h.value.as_str().to_string());

    let reply = route(&method, &url, filename.as_deref(), request.as_reader(), config);

    Response::from_data(reply.body.into_bytes())
        .with_header(json_content_type())
        .with_status_code(StatusCode(reply.status))
}

/// Map a method and URL to an API handler
///
/// This is the main routing function. The body is only read for uploads.
pub fn route(
    method: &Method,
    url: &str,
    filename_header: Option<&str>,
    body: &mut dyn Read,
    config: &Config,
) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);

    match (method, api_path) {
        (&Method::Get, "/rules") => handle_result(api::list_rules(&config.rule_source())),
        (&Method::Get, "/regulations") => {
            handle_result(api::list_regulations(&config.regulation_store()))
        },
        (&Method::Get, "/health") => {
            handle_result(api::health(&config.rule_source(), config.threshold))
        },

        // POST /upload - check a document
        (&Method::Post, "/upload") => {
            let filename = query_param(query, "filename")
                .or_else(|| filename_header.map(ToString::to_string))
                .unwrap_or_default();

            match read_body(body) {
                Ok(bytes) => handle_result(api::check_upload(
                    &config.rule_source(),
                    config.threshold,
                    &UploadRequest::new(filename, bytes),
                )),
                Err(e) => error_reply(&e),
            }
        },

        // 404 for unknown API routes
        _ => error_reply(&ApiError::not_found(format!(
            "API endpoint not found: {method} {api_path}"
        ))),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read the raw upload body, refusing oversized payloads
fn read_body(body: &mut dyn Read) -> Result<Vec<u8>, ApiError> {
    let mut bytes = Vec::new();
    body.take(MAX_UPLOAD_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    if bytes.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(ApiError::bad_request(format!(
            "Uploaded file exceeds {} MiB",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }
    Ok(bytes)
}

/// First value of a query parameter, percent-decoded
fn query_param(query: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to a reply
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Reply {
    match result {
        Ok(data) => json_reply(&ApiResponse::success(data), 200),
        Err(e) => error_reply(&e),
    }
}

/// Create an error reply with the matching status code
fn error_reply(error: &ApiError) -> Reply {
    if error.status_code() >= 500 {
        log::error!("{error}");
    }
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_reply(&response, error.status_code())
}

/// Serialize data to a JSON reply with status code
fn json_reply<T: Serialize>(data: &T, status: u16) -> Reply {
    let body = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    Reply { status, body }
}

fn json_content_type() -> Header {
    Header::from_bytes("Content-Type", "application/json").unwrap()
}
