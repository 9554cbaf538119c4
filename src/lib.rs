// modules
mod config;
mod constants;
pub mod error;
mod http;
mod logger;
mod poller;

#[cfg(test)]
pub mod test;

pub use config::{AppConfig, PollerConfig};
pub use constants::{DEFAULT_POLL_INTERVAL, VERSION_ENDPOINT};
pub use error::{AppError, Result};
pub use http::{HttpClient, HttpError};
pub use poller::{PollerError, PollerResult, VersionInfo, VersionPoller};

use logger::setup_logger;

/// The entry point for the poller service.
///
/// Resolves configuration from the environment, initializes logging, starts
/// the version poller against the configured backend, and keeps running
/// until interrupted. Every observed version change is logged the way the
/// dashboard widgets would consume it from the stream.
pub async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    setup_logger(&config.log_dir);

    let client = HttpClient::new()?;
    let poller = VersionPoller::new(config.poller_config(), client);
    poller.start()?;

    // Consume the stream like a dashboard widget: log whatever gets published.
    let mut rx = poller.subscribe();
    let consumer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            if let Some(info) = rx.borrow_and_update().clone() {
                log::info!("Version stream update: {}", info);
            }
        }
    });

    log::info!(
        "versionwatch polling {} every {}ms, press Ctrl+C to stop",
        config.base_url,
        DEFAULT_POLL_INTERVAL.as_millis()
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }

    log::info!("Shutting down...");
    poller.stop().await?;
    consumer.abort();

    Ok(())
}
