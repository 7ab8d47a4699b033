//! HTTP client for the transcription service control endpoints.

use std::time::Duration;

use async_trait::async_trait;

use super::types::StatusReport;

/// Trait for transports that drive the transcription service.
#[async_trait]
pub trait TranscriptionControl: Send + Sync {
    async fn start(&self) -> Result<StatusReport, String>;
    async fn stop(&self) -> Result<StatusReport, String>;
    async fn status(&self) -> Result<StatusReport, String>;
}

/// reqwest-backed client for a service exposing `POST /start`,
/// `POST /stop` and `GET /status`, each answering a JSON status report.
pub struct ServiceClient {
    base_url: String,
    client: reqwest::Client,
}

impl ServiceClient {
    /// Build a client for `base_url` with a per-request timeout.
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| e.to_string())?;
        Ok(ServiceClient {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_report(&self, req: reqwest::RequestBuilder) -> Result<StatusReport, String> {
        let response = req.send().await.map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("API error {}: {}", status, body));
        }

        response
            .json::<StatusReport>()
            .await
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl TranscriptionControl for ServiceClient {
    async fn start(&self) -> Result<StatusReport, String> {
        self.fetch_report(self.client.post(self.url("/start"))).await
    }

    async fn stop(&self) -> Result<StatusReport, String> {
        self.fetch_report(self.client.post(self.url("/stop"))).await
    }

    async fn status(&self) -> Result<StatusReport, String> {
        self.fetch_report(self.client.get(self.url("/status"))).await
    }
}
