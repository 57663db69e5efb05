// file: src/fetcher/portal.rs
// description: certificate portal HTTP client with fixed-backoff retries
// reference: https://docs.rs/reqwest

use crate::config::PortalConfig;
use crate::error::{PipelineError, Result};
use crate::fetcher::{CertificateSource, pdf};
use crate::utils::Validator;
use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pooled HTTP client for the certificate portal. Built once and shared by all
/// requests; it carries no per-request state.
#[derive(Debug, Clone)]
pub struct PortalClient {
    client: Client,
    config: PortalConfig,
}

impl PortalClient {
    pub fn new(config: PortalConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let accept_language = HeaderValue::from_str(&config.accept_language)
            .map_err(|e| PipelineError::Config(format!("Invalid accept_language: {}", e)))?;
        headers.insert(ACCEPT_LANGUAGE, accept_language);

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PipelineError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn certificate_url(&self, number: &str) -> String {
        self.config.url_template.replace("{}", number)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| PipelineError::Network(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PipelineError::Network(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

impl CertificateSource for PortalClient {
    async fn fetch_text(&self, number: &str) -> Result<String> {
        Validator::validate_certificate_number(number)?;

        let url = self.certificate_url(number);
        let backoff = Duration::from_millis(self.config.retry_backoff_ms);
        let max_attempts = self.config.max_retries.max(1);

        let mut attempt = 0;
        let bytes = loop {
            attempt += 1;
            debug!("Downloading {} (attempt {}/{})", url, attempt, max_attempts);

            match self.download(&url).await {
                Ok(bytes) => break bytes,
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!("Certificate {} download failed: {}. Retrying", number, e);
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => return Err(e),
            }
        };

        info!("Downloaded certificate {} ({} bytes)", number, bytes.len());

        tokio::task::spawn_blocking(move || pdf::extract_text(&bytes))
            .await
            .map_err(|e| PipelineError::PdfProcessing(e.to_string()))?
    }
}
