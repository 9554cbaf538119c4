//! HTTP client for backend API requests
//!
//! Thin wrapper around `reqwest::Client` used by the poller to fetch JSON
//! documents from the dashboard backend.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use super::error::{HttpError, HttpResult};
use crate::constants::HTTP_TIMEOUT;

/// HTTP client with a fixed per-request timeout
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Creates a new HTTP client instance with the default timeout
    pub fn new() -> HttpResult<Self> {
        Self::new_with_timeout(HTTP_TIMEOUT)
    }

    /// Creates a new HTTP client instance with a custom timeout
    pub fn new_with_timeout(timeout: Duration) -> HttpResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }

    /// Issues a GET request and decodes the JSON response body.
    ///
    /// # Arguments
    /// * `url` - The full URL to request
    ///
    /// # Returns
    /// The decoded body on a 2xx response; an `HttpError` classifying the
    /// failure otherwise.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> HttpResult<T> {
        log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(HttpError::Response(format!(
                "unexpected status {} from {}",
                status, url
            )));
        }

        let body = response.json::<T>().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};
    use serde::Deserialize;
    use tokio::net::TcpListener;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        answer: u32,
    }

    async fn serve(router: Router) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Url::parse(&format!("http://{}/", addr)).unwrap()
    }

    #[tokio::test]
    async fn get_json_decodes_body() {
        let router = Router::new().route(
            "/data",
            get(|| async { Json(serde_json::json!({ "answer": 42 })) }),
        );
        let base = serve(router).await;

        let client = HttpClient::new().unwrap();
        let result: Payload = client.get_json(base.join("data").unwrap()).await.unwrap();
        assert_eq!(result, Payload { answer: 42 });
    }

    #[tokio::test]
    async fn get_json_rejects_error_status() {
        let router = Router::new().route(
            "/missing",
            get(|| async { axum::http::StatusCode::NOT_FOUND }),
        );
        let base = serve(router).await;

        let client = HttpClient::new().unwrap();
        let result = client
            .get_json::<Payload>(base.join("missing").unwrap())
            .await;
        assert!(matches!(result, Err(HttpError::Response(_))));
    }

    #[tokio::test]
    async fn get_json_reports_connection_failure() {
        // Port 1 is never listening locally
        let client = HttpClient::new().unwrap();
        let result = client
            .get_json::<Payload>(Url::parse("http://127.0.0.1:1/data").unwrap())
            .await;
        assert!(matches!(result, Err(HttpError::Request(_))));
    }
}
