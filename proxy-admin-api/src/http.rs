//! Shared HTTP request processing.
//!
//! One place for the send / log / read-body flow so the per-endpoint methods
//! in [`crate::client`] only deal with status interpretation.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response body for safe logging.
#[must_use]
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Execute a prepared request and return `(status_code, response_text)`.
///
/// Transport failures map to [`ApiError::Timeout`] or
/// [`ApiError::NetworkError`]; status interpretation is left to the caller.
pub async fn execute_request(
    request_builder: RequestBuilder,
    method: &str,
    path: &str,
) -> ApiResult<(u16, String)> {
    log::debug!("{method} {path}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ApiError::NetworkError {
                detail: e.to_string(),
            }
        }
    })?;

    let status_code = response.status().as_u16();
    log::debug!("{method} {path} -> HTTP {status_code}");

    let response_text = response.text().await.map_err(|e| ApiError::NetworkError {
        detail: format!("Failed to read response body: {e}"),
    })?;

    log::debug!("Response Body: {}", truncate_for_log(&response_text));

    Ok((status_code, response_text))
}

/// Parse a JSON response body.
pub fn parse_json<T>(response_text: &str, context: &str) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("[{context}] JSON parse failed: {e}");
        log::error!("[{context}] Raw response: {}", truncate_for_log(response_text));
        ApiError::ParseError {
            detail: format!("{context}: {e}"),
        }
    })
}
