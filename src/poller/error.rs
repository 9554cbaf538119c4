//! Error types for the version poller

use serde::Serialize;
use thiserror::Error;

use crate::http::HttpError;

/// Errors that can occur while operating the poller
#[derive(Error, Debug, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum PollerError {
    /// The poll loop is already running
    #[error("poller is already running")]
    AlreadyRunning,

    /// A poll cycle's HTTP request failed
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Invalid poller configuration
    #[error("{0}")]
    Config(String),
}

impl<T> From<std::sync::PoisonError<T>> for PollerError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        PollerError::Config(format!("poller task lock poisoned: {}", err))
    }
}

pub type PollerResult<T> = Result<T, PollerError>;
