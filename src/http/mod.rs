//! HTTP layer
//!
//! Provides the client used to talk to the dashboard backend.

mod client;
pub mod error;

pub use client::HttpClient;
pub use error::{HttpError, HttpResult};
