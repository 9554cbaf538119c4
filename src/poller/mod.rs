//! Version poller module
//!
//! Keeps a shared "current backend version" value fresh by polling the
//! backend's public version endpoint and republishing the latest descriptor
//! to any number of subscribers.

mod error;
mod manager;
mod types;

pub use error::*;
pub use manager::VersionPoller;
pub use types::*;
