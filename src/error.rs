use serde::Serialize;
use thiserror::Error;

/// The single, unified error type for the application.
///
/// Wraps the module-specific errors into one consistent structure. The
/// `#[serde(tag = "module", content = "details")]` attribute keeps the JSON
/// output clean and predictable.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "module", content = "details")]
pub enum AppError {
    /// Errors originating from the HTTP module.
    #[error(transparent)]
    Http(#[from] crate::http::HttpError),

    /// Errors originating from the poller module.
    #[error(transparent)]
    Poller(#[from] crate::poller::PollerError),

    #[error("{message}")]
    General { message: String },
}

impl From<String> for AppError {
    fn from(message: String) -> Self {
        AppError::General { message }
    }
}

/// A universal Result type for fallible functions in this crate.
pub type Result<T> = std::result::Result<T, AppError>;
