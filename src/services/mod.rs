//! Services coordinating the search pipeline between routes and the upstream
//! API.

use thiserror::Error;

use crate::forms::FormError;
use crate::upstream::UpstreamError;

pub mod export;
pub mod proxy;
pub mod search;

/// Message used when a failure carries no text of its own.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Errors surfaced by the service layer. Every variant is terminal for the
/// request that produced it.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The upstream answered with a non-2xx status.
    #[error("Error fetching data: {0}")]
    UpstreamStatus(String),

    /// The upstream could not be reached.
    #[error("{0}")]
    Transport(String),

    /// The upstream body was not the expected JSON document.
    #[error("{0}")]
    InvalidPayload(String),

    #[error("{0}")]
    Form(String),

    #[error("{0}")]
    Export(String),
}

impl ServiceError {
    /// Message shown to API callers.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

impl From<UpstreamError> for ServiceError {
    fn from(err: UpstreamError) -> Self {
        ServiceError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::InvalidPayload(err.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

impl From<csv::Error> for ServiceError {
    fn from(err: csv::Error) -> Self {
        ServiceError::Export(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
