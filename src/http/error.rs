use serde::Serialize;
use thiserror::Error;

/// HTTP module error types
#[derive(Error, Debug, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum HttpError {
    /// Request error
    #[error("{0}")]
    Request(String),
    /// Response error
    #[error("{0}")]
    Response(String),
    /// Body decoding error
    #[error("{0}")]
    Decode(String),
    /// Configuration error
    #[error("{0}")]
    Config(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Request(format!("request timed out: {}", err))
        } else if err.is_connect() {
            HttpError::Request(format!("connection failed: {}", err))
        } else if err.is_builder() {
            HttpError::Config(format!("failed to build HTTP client: {}", err))
        } else if err.is_decode() {
            HttpError::Decode(format!("failed to decode response body: {}", err))
        } else {
            HttpError::Request(err.to_string())
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;
