#[cfg(test)]
mod tests {
    use crate::logger::setup_test_logger;

    #[small_ctor::ctor]
    unsafe fn init() {
        let _ = setup_test_logger();
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use url::Url;

use crate::constants::VERSION_ENDPOINT;

/// The descriptor the mock backend serves.
pub fn version_json() -> serde_json::Value {
    serde_json::json!({
        "number": "14.2.1",
        "hash": "d555a9",
        "name": "nautilus",
    })
}

/// A local stand-in for the dashboard backend's version endpoint.
pub struct MockBackend {
    pub base_url: Url,
    hits: Arc<AtomicUsize>,
    hit_times: Arc<Mutex<Vec<Instant>>>,
}

impl MockBackend {
    /// Number of requests the endpoint has served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Arrival time of each request, in order.
    pub fn hit_times(&self) -> Vec<Instant> {
        self.hit_times.lock().unwrap().clone()
    }
}

/// Starts a mock backend on an ephemeral port.
///
/// The first `fail_first` requests answer with a 500; every request after
/// that serves [`version_json`].
pub async fn mock_backend(fail_first: usize) -> MockBackend {
    let hits = Arc::new(AtomicUsize::new(0));
    let hit_times = Arc::new(Mutex::new(Vec::new()));

    let route = format!("/{}", VERSION_ENDPOINT);
    let router = Router::new().route(
        &route,
        get({
            let hits = hits.clone();
            let hit_times = hit_times.clone();
            move || {
                let hits = hits.clone();
                let hit_times = hit_times.clone();
                async move {
                    let n = hits.fetch_add(1, Ordering::SeqCst);
                    hit_times.lock().unwrap().push(Instant::now());
                    if n < fail_first {
                        StatusCode::INTERNAL_SERVER_ERROR.into_response()
                    } else {
                        Json(version_json()).into_response()
                    }
                }
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock backend");
    let addr = listener.local_addr().expect("failed to read local address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    MockBackend {
        base_url: Url::parse(&format!("http://{}/", addr)).expect("mock backend URL is valid"),
        hits,
        hit_times,
    }
}
