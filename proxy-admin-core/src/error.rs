//! Unified error type definition.

use thiserror::Error;

// Re-export library error type
pub use proxy_admin_api::ApiError;

/// Core layer error type.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A submit was attempted without an open editor session.
    #[error("No editor session is open")]
    NoOpenEditor,

    /// The addressed connection is not in the collection store.
    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),

    /// API error (converted from the client library).
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (operator input, resource already
    /// gone). Use level `warn` when `true` and `error` when `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NoOpenEditor | Self::ConnectionNotFound(_) => true,
            Self::Api(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
