//! Error types for the ParkWise client

use thiserror::Error;

/// Main client error type
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Slot {0} is no longer available")]
    SlotUnavailable(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Session expired: {0}")]
    SessionExpired(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Whether this failure invalidates the stored session and the caller
    /// should prompt for a fresh login.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::SessionExpired(_))
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
