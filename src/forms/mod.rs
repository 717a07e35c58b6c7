//! Form definitions backing the search routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod search;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed form data: {0}")]
    Decode(String),

    #[error("unknown {field}: {value}")]
    UnknownOption { field: &'static str, value: String },
}
