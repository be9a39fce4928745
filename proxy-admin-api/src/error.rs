//! Unified error type for admin API operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Validation;

/// Error produced by the admin configuration API client.
///
/// `Rejected` and `NotFound` are expected, user-correctable outcomes; the
/// remaining variants are transport-class failures. No variant is retried
/// automatically — a failed operation is abandoned and the operator
/// resubmits.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// Network-level failure (server unreachable, connection reset, body
    /// could not be read).
    #[error("Network error: {detail}")]
    NetworkError { detail: String },

    /// The request timed out.
    #[error("Request timed out: {detail}")]
    Timeout { detail: String },

    /// A response body did not match the expected shape.
    #[error("Parse error: {detail}")]
    ParseError { detail: String },

    /// The server rejected the submitted connection; field-level messages
    /// are carried in the validation body.
    #[error("Connection rejected by server validation")]
    Rejected { validation: Validation },

    /// The addressed connection does not exist on the server.
    #[error("Connection not found: {id}")]
    NotFound { id: String },

    /// The server answered with a status the contract does not define.
    #[error("Unexpected response: HTTP {status}")]
    Unexpected { status: u16, body: String },
}

impl ApiError {
    /// Whether the error is expected behavior (operator-correctable input,
    /// resource already gone). Callers log expected errors at `warn` and the
    /// rest at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::NotFound { .. })
    }
}

/// Result alias for admin API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
