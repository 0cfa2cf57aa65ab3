//! HTTP client for the BOE open-data API.
//!
//! Not a crawler — two GET shapes only: the daily summary endpoint and
//! per-item detail documents. Absence of data (no issue published, dead
//! link, parse failure) is an expected outcome and surfaces as `None`;
//! this layer never returns an error.

use std::time::Duration;

use tracing::{debug, warn};

use crate::summary::types::{DailySummary, SummaryEnvelope};

/// Production base URL of the gazette API.
pub const DEFAULT_BASE_URL: &str = "https://www.boe.es";

/// Default per-request timeout in milliseconds.
///
/// The upstream service answers summary requests well under a second; the
/// bound exists so a scan over many days cannot hang on one request.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Client for the gazette summary and document endpoints.
#[derive(Debug, Clone)]
pub struct GazetteClient {
    client: reqwest::Client,
    base_url: String,
}

impl GazetteClient {
    /// Create a client against the production API.
    pub fn new(timeout_ms: u64) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_ms)
    }

    /// Create a client against an arbitrary base URL (tests point this at
    /// a local mock server).
    pub fn with_base_url(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!("boletin/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    /// Fetch the daily summary for a date given as AAAAMMDD text.
    ///
    /// Returns `Some` only on HTTP 200 with a body matching the summary
    /// shape. Any other status — typically 404 meaning no issue was
    /// published that day — and any network or decode failure yield `None`.
    pub async fn fetch_summary(&self, date: &str) -> Option<DailySummary> {
        let url = format!("{}/datosabiertos/api/boe/sumario/{date}", self.base_url);

        let response = match self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("summary fetch failed for {date}: {e}");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!("no summary for {date} (status {status})");
            return None;
        }

        match response.json::<SummaryEnvelope>().await {
            Ok(envelope) => Some(envelope.data.summary),
            Err(e) => {
                warn!("summary body for {date} did not match the expected shape: {e}");
                None
            }
        }
    }

    /// Fetch a detail document at an absolute URL, returning its body.
    ///
    /// `None` on any non-success status or network failure.
    pub async fn fetch_document(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("document fetch failed for {url}: {e}");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!("document unavailable at {url} (status {status})");
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("document body read failed for {url}: {e}");
                None
            }
        }
    }
}
