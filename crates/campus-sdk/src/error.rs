//! Error types for the Campus SDK

use campus_client::ApiError;
use thiserror::Error;

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK error types
#[derive(Error, Debug)]
pub enum SdkError {
    /// Backend call failed
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Role gate rejected a flow invoked programmatically
    #[error("Access denied: role {required} required, have {actual}")]
    AccessDenied { required: String, actual: String },

    /// Certificate requested below full completion
    #[error("Not eligible for a certificate at {percentage}% completion")]
    NotEligible { percentage: u8 },

    /// Missing or malformed form input, caught before submission
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SdkError {
    /// True when the backend rejected a duplicate action.
    pub fn is_conflict(&self) -> bool {
        matches!(self, SdkError::Api(e) if e.is_conflict())
    }

    /// True when the caller should re-authenticate.
    pub fn is_auth(&self) -> bool {
        matches!(self, SdkError::Api(e) if e.is_auth())
    }
}
