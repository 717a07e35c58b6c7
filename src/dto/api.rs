//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::services::ServiceError;

/// Body returned by the API on any failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&ServiceError> for ErrorBody {
    fn from(err: &ServiceError) -> Self {
        Self {
            error: err.message(),
        }
    }
}
