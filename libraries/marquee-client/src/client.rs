//! Main Marquee backend client.

use crate::collections::CollectionsClient;
use crate::error::{ClientError, Result};
use crate::response;
use crate::search::SearchClient;
use crate::settings::SettingsClient;
use crate::types::{Ack, ServerConfig};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Main client for interacting with a Marquee backend.
///
/// The client owns the HTTP connection pool and hands out borrowed
/// sub-clients for settings, search and collection operations.
///
/// # Example
///
/// ```ignore
/// use marquee_client::{MarqueeClient, ServerConfig};
///
/// let client = MarqueeClient::new(ServerConfig::new("http://localhost:9999"))?;
///
/// let settings = client.settings().get().await?;
/// println!("Language: {}", settings.current_settings.language);
///
/// client.collections().delete("Horror Night").await?;
/// ```
#[derive(Debug, Clone)]
pub struct MarqueeClient {
    http: Client,
    base_url: String,
}

impl MarqueeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        // Validate URL
        if config.url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.url.trim().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Marquee/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the backend URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Settings operations.
    pub fn settings(&self) -> SettingsClient<'_> {
        SettingsClient::new(&self.http, &self.base_url)
    }

    /// Theme search and list ingestion.
    pub fn search(&self) -> SearchClient<'_> {
        SearchClient::new(&self.http, &self.base_url)
    }

    /// Collection operations.
    pub fn collections(&self) -> CollectionsClient<'_> {
        CollectionsClient::new(&self.http, &self.base_url)
    }

    /// Drop the backend's cached view of the media library.
    pub async fn clear_cache(&self) -> Result<Ack> {
        let url = format!("{}/clear_cache", self.base_url);
        debug!(url = %url, "Clearing library cache");

        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let ack = response::ack(response, "clear cache").await?;
        info!("Library cache cleared");
        Ok(ack)
    }

    /// Probe the backend's model server. The report is returned as sent.
    pub async fn test_model_server(&self) -> Result<serde_json::Value> {
        let url = format!("{}/test_ollama", self.base_url);
        debug!(url = %url, "Testing model server");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        response::json(response, "model server test").await
    }
}
