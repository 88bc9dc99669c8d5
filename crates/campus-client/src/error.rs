//! Error types for the Campus API client

use thiserror::Error;

/// Errors that can occur when talking to the Campus backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 401 from the backend, bad credentials, or an undecodable token
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// 403 from the backend
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 404 from the backend
    #[error("Not found: {0}")]
    NotFound(String),

    /// 409 from the backend (duplicate assignment, duplicate completion)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-success status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Structurally unusable success payload
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// True for errors that mean the caller should re-authenticate.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Authentication(_))
    }

    /// True when the backend rejected a duplicate action.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }

    /// True when the resource does not exist on the backend.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ApiError>;
