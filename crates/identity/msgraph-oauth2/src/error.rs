//! Error types for the OAuth2 and Graph operations.

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("state mismatch: expected {expected}, got {returned}")]
    StateMismatch { expected: String, returned: String },

    #[error("token exchange failed: {0}")]
    TokenExchangeFailed(String),

    #[error("invalid token response: {0}")]
    InvalidTokenResponse(String),

    #[error("graph request failed with status {status}: {body}")]
    ApiError {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid JSON in response: {0}")]
    InvalidJsonResponse(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),
}

impl GraphError {
    /// Splits transport timeouts from other transport failures so a timeout
    /// surfaces as its own variant rather than an opaque `reqwest::Error`.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GraphError::Timeout
        } else {
            GraphError::Http(err)
        }
    }
}
