//! Settings operations for the Marquee backend.

use crate::error::{ClientError, Result};
use crate::response;
use crate::types::Ack;
use marquee_core::{Settings, SettingsResponse};
use reqwest::Client;
use tracing::{debug, info};

/// Settings client for the Marquee backend.
pub struct SettingsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> SettingsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Get the option lists and the current settings.
    pub async fn get(&self) -> Result<SettingsResponse> {
        let url = format!("{}/get_settings", self.base_url);
        debug!(url = %url, "Fetching settings");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let settings: SettingsResponse = response::json(response, "settings").await?;

        debug!(
            root_folders = settings.root_folders.len(),
            quality_profiles = settings.quality_profiles.len(),
            plex_libraries = settings.plex_libraries.len(),
            models = settings.models.len(),
            "Fetched settings"
        );

        Ok(settings)
    }

    /// Persist the settings.
    pub async fn save(&self, settings: &Settings) -> Result<Ack> {
        let url = format!("{}/save_settings", self.base_url);
        debug!(url = %url, language = %settings.language, "Saving settings");

        let response = self
            .http
            .post(&url)
            .json(settings)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let ack = response::ack(response, "save settings").await?;
        info!("Settings saved");
        Ok(ack)
    }
}
