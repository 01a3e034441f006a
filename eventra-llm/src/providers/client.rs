//! Shared provider HTTP client with rate limiting
//!
//! Both hosted providers speak JSON-over-POST with an error body of the
//! shape `{"error": {"message": ...}}`, so a single client covers them.
//! Requests are throttled with a semaphore plus a minimum inter-request
//! interval derived from the per-minute budget.

use crate::providers::{invalid_response, rate_limited, request_failed};
use eventra_core::EventraResult;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// Wire shape of provider error bodies.
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Rate-limited JSON POST client for a single provider endpoint family.
pub struct ProviderClient {
    client: Client,
    provider: &'static str,
    base_url: String,
    /// Static headers attached to every request (auth, API version).
    headers: Vec<(&'static str, String)>,
    rate_limiter: Arc<Semaphore>,
    last_request: Arc<AtomicU64>,
    min_request_interval_ms: u64,
    start_time: Instant,
}

impl ProviderClient {
    /// Create a new provider client.
    ///
    /// # Arguments
    /// * `provider` - Short provider name used in error values and logs
    /// * `base_url` - API base URL without a trailing slash
    /// * `headers` - Auth and version headers sent with every request
    /// * `requests_per_minute` - Maximum requests per minute
    pub fn new(
        provider: &'static str,
        base_url: impl Into<String>,
        headers: Vec<(&'static str, String)>,
        requests_per_minute: u32,
    ) -> Self {
        let rpm = requests_per_minute.max(1);
        let permits = rpm as usize;
        let min_interval_ms = (60_000 / rpm as u64).max(10);

        Self {
            client: Client::new(),
            provider,
            base_url: base_url.into(),
            headers,
            rate_limiter: Arc::new(Semaphore::new(permits)),
            last_request: Arc::new(AtomicU64::new(0)),
            min_request_interval_ms: min_interval_ms,
            start_time: Instant::now(),
        }
    }

    /// Make an API request with automatic rate limiting.
    pub async fn post<Req: Serialize, Res: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Req,
    ) -> EventraResult<Res> {
        // Rate limiting: acquire permit
        let _permit = self.rate_limiter.acquire().await.map_err(|e| {
            request_failed(self.provider, 0, format!("Rate limiter error: {}", e))
        })?;

        // Enforce minimum interval between requests
        let now_ms = self.start_time.elapsed().as_millis() as u64;
        let last_ms = self.last_request.load(Ordering::Relaxed);
        let elapsed = now_ms.saturating_sub(last_ms);

        if elapsed < self.min_request_interval_ms {
            let wait_ms = self.min_request_interval_ms - elapsed;
            tokio::time::sleep(Duration::from_millis(wait_ms)).await;
        }

        self.last_request.store(now_ms, Ordering::Relaxed);

        // Make HTTP request
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");
        for (name, value) in &self.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder.json(&body).send().await.map_err(|e| {
            request_failed(self.provider, 0, format!("HTTP request failed: {}", e))
        })?;

        // Handle response
        let status = response.status();
        let retry_after_ms = parse_retry_after_ms(response.headers()).unwrap_or(0);

        if status.is_success() {
            response.json().await.map_err(|e| {
                invalid_response(self.provider, format!("Failed to parse response: {}", e))
            })
        } else {
            // Prefer the structured provider message, fall back to raw text
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let error_msg =
                if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(&error_text) {
                    api_error.error.message
                } else {
                    error_text
                };

            Err(match status {
                StatusCode::TOO_MANY_REQUESTS => rate_limited(self.provider, retry_after_ms),
                _ => request_failed(self.provider, status.as_u16() as i32, error_msg),
            })
        }
    }
}

fn parse_retry_after_ms(headers: &reqwest::header::HeaderMap) -> Option<i64> {
    headers
        .get("retry-after")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<f64>().ok())
        .map(|seconds| (seconds * 1000.0) as i64)
}

impl std::fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderClient")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("headers", &"[REDACTED]")
            .finish()
    }
}
