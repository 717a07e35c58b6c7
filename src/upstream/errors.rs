use thiserror::Error;

/// Failures raised while talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No credential was configured for the upstream API.
    #[error("upstream api key is not configured")]
    MissingApiKey,

    #[error("upstream api key is not a valid header value")]
    InvalidApiKey,

    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),

    /// The request could not be sent or the response could not be read.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transport(err.to_string())
    }
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;
