//! Runtime configuration
//!
//! Resolves the backend address and log directory from the environment,
//! falling back to built-in defaults. The poll interval is deliberately not
//! configurable here; embedders that need a different cadence construct a
//! `PollerConfig` directly.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL, ENV_BASE_URL, ENV_LOG_DIR,
};

/// Application-level settings resolved at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base address of the backend exposing the version endpoint
    pub base_url: Url,
    /// Directory receiving the log file
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            log_dir: default_log_dir(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; a malformed base URL is
    /// reported rather than silently replaced.
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();

        match env::var(ENV_BASE_URL) {
            Ok(raw) => {
                config.base_url = Url::parse(&raw)
                    .map_err(|e| format!("invalid {}: {}", ENV_BASE_URL, e))?;
            }
            Err(_) => {
                log::debug!(
                    "{} not set, using default base URL {}",
                    ENV_BASE_URL,
                    config.base_url
                );
            }
        }

        if let Ok(dir) = env::var(ENV_LOG_DIR) {
            config.log_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Derives the poller configuration for this application config.
    pub fn poller_config(&self) -> PollerConfig {
        PollerConfig::new(self.base_url.clone())
    }
}

/// Settings consumed by [`crate::poller::VersionPoller`]
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Base address of the backend exposing the version endpoint
    pub base_url: Url,
    /// Delay between poll cycles
    pub interval: Duration,
}

impl PollerConfig {
    /// Creates a poller configuration with the default 5-second interval.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Overrides the poll interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join("versionwatch")
        .join("log")
}
