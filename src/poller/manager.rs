//! Version poller implementation
//!
//! Keeps a shared "current backend version" value fresh by polling the
//! backend's version endpoint on a fixed cadence and republishing the latest
//! descriptor on a watch channel.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use url::Url;

use super::error::{PollerError, PollerResult};
use super::types::VersionInfo;
use crate::config::PollerConfig;
use crate::constants::VERSION_ENDPOINT;
use crate::http::HttpClient;

/// Handle for one running poll loop
struct PollTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Polls the backend version endpoint and broadcasts the latest descriptor
///
/// The latest value lives in a `watch` channel: the poll loop is the single
/// writer, and any number of subscribers read it. Receivers obtained after a
/// publish immediately observe the most recent value; before the first
/// successful fetch the channel holds `None`.
pub struct VersionPoller {
    config: PollerConfig,
    client: HttpClient,
    version_tx: Arc<watch::Sender<Option<VersionInfo>>>,
    task: Mutex<Option<PollTask>>,
}

impl VersionPoller {
    /// Creates a new poller. Nothing runs until [`start`](Self::start).
    pub fn new(config: PollerConfig, client: HttpClient) -> Self {
        let (version_tx, _) = watch::channel(None);
        Self {
            config,
            client,
            version_tx: Arc::new(version_tx),
            task: Mutex::new(None),
        }
    }

    /// Starts the poll loop.
    ///
    /// The first fetch is issued immediately; each subsequent fetch fires
    /// after the configured interval. Fetches are awaited inline, so they
    /// never overlap. Returns `PollerError::AlreadyRunning` if the loop is
    /// already active.
    pub fn start(&self) -> PollerResult<()> {
        let mut task = self.task.lock()?;
        if task.as_ref().is_some_and(|t| !t.handle.is_finished()) {
            return Err(PollerError::AlreadyRunning);
        }

        let url = self.version_url()?;
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_poll_loop(
            self.client.clone(),
            url,
            self.config.clone(),
            self.version_tx.clone(),
            cancel.clone(),
        ));

        *task = Some(PollTask { cancel, handle });
        Ok(())
    }

    /// Stops the poll loop and waits for it to wind down.
    ///
    /// Idempotent; stopping a poller that was never started is a no-op. The
    /// last published value remains readable after the loop stops.
    pub async fn stop(&self) -> PollerResult<()> {
        let task = self.task.lock()?.take();

        if let Some(task) = task {
            task.cancel.cancel();
            if let Err(e) = task.handle.await {
                log::warn!("Poll loop task ended abnormally: {}", e);
            }
        }

        Ok(())
    }

    /// Returns whether the poll loop is currently active.
    pub fn is_running(&self) -> bool {
        self.task
            .lock()
            .map(|t| t.as_ref().is_some_and(|t| !t.handle.is_finished()))
            .unwrap_or(false)
    }

    /// Subscribes to the latest-version stream.
    ///
    /// The receiver starts at the current value, so late subscribers see the
    /// most recent descriptor (or `None` if nothing has been fetched yet).
    pub fn subscribe(&self) -> watch::Receiver<Option<VersionInfo>> {
        self.version_tx.subscribe()
    }

    /// Snapshot of the most recently published descriptor.
    pub fn latest(&self) -> Option<VersionInfo> {
        self.version_tx.borrow().clone()
    }

    /// Resolves the full URL of the version endpoint.
    pub fn version_url(&self) -> PollerResult<Url> {
        self.config
            .base_url
            .join(VERSION_ENDPOINT)
            .map_err(|e| PollerError::Config(format!("invalid version endpoint URL: {}", e)))
    }
}

/// The poll loop task.
///
/// A tick that comes due while a fetch is still in flight is delayed rather
/// than fired back-to-back, so consecutive requests stay at least one
/// interval apart.
async fn run_poll_loop(
    client: HttpClient,
    url: Url,
    config: PollerConfig,
    version_tx: Arc<watch::Sender<Option<VersionInfo>>>,
    cancel: CancellationToken,
) {
    log::info!(
        "Version poll loop started: {} every {}ms",
        url,
        config.interval.as_millis()
    );

    let mut ticker = interval(config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            result = poll_once(&client, &url, &version_tx) => {
                if let Err(e) = result {
                    // Polling continues; the next tick retries.
                    log::warn!("Version poll failed: {}", e);
                }
            }
        }
    }

    log::info!("Version poll loop stopped");
}

/// Runs one poll cycle: fetch the descriptor and publish it.
async fn poll_once(
    client: &HttpClient,
    url: &Url,
    version_tx: &watch::Sender<Option<VersionInfo>>,
) -> PollerResult<()> {
    let info: VersionInfo = client.get_json(url.clone()).await?;

    let changed = version_tx.borrow().as_ref() != Some(&info);
    if changed {
        log::info!("Backend version is now {}", info);
    } else {
        log::debug!("Backend version unchanged ({})", info);
    }

    version_tx.send_replace(Some(info));
    Ok(())
}
