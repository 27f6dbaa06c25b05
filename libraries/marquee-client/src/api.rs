//! Object-safe view of the backend, for callers that want to swap the
//! transport out.

use crate::client::MarqueeClient;
use crate::error::Result;
use crate::types::{Ack, ThemeSearchRequest};
use async_trait::async_trait;
use marquee_core::{Candidate, CollectionRecord, ExternalList, ListEntry, Settings, SettingsResponse};

/// Every backend operation the UI needs.
#[async_trait]
pub trait CuratorApi: Send + Sync {
    async fn get_settings(&self) -> Result<SettingsResponse>;

    async fn save_settings(&self, settings: &Settings) -> Result<Ack>;

    async fn search_movies(&self, request: &ThemeSearchRequest) -> Result<Vec<Candidate>>;

    async fn process_list(&self, url: &str) -> Result<ExternalList>;

    async fn create_collection(&self, name: &str, selected_movies: &[String]) -> Result<Ack>;

    async fn create_list_collection(
        &self,
        name: &str,
        selected_movies: &[ListEntry],
        list_url: &str,
    ) -> Result<Ack>;

    async fn collections_status(&self) -> Result<Vec<CollectionRecord>>;

    async fn delete_collection(&self, name: &str) -> Result<Ack>;

    async fn clear_cache(&self) -> Result<Ack>;

    async fn test_model_server(&self) -> Result<serde_json::Value>;
}

#[async_trait]
impl CuratorApi for MarqueeClient {
    async fn get_settings(&self) -> Result<SettingsResponse> {
        self.settings().get().await
    }

    async fn save_settings(&self, settings: &Settings) -> Result<Ack> {
        self.settings().save(settings).await
    }

    async fn search_movies(&self, request: &ThemeSearchRequest) -> Result<Vec<Candidate>> {
        self.search().send(request).await
    }

    async fn process_list(&self, url: &str) -> Result<ExternalList> {
        self.search().external_list(url).await
    }

    async fn create_collection(&self, name: &str, selected_movies: &[String]) -> Result<Ack> {
        self.collections().create(name, selected_movies).await
    }

    async fn create_list_collection(
        &self,
        name: &str,
        selected_movies: &[ListEntry],
        list_url: &str,
    ) -> Result<Ack> {
        self.collections()
            .create_from_list(name, selected_movies, list_url)
            .await
    }

    async fn collections_status(&self) -> Result<Vec<CollectionRecord>> {
        self.collections().status().await
    }

    async fn delete_collection(&self, name: &str) -> Result<Ack> {
        self.collections().delete(name).await
    }

    async fn clear_cache(&self) -> Result<Ack> {
        MarqueeClient::clear_cache(self).await
    }

    async fn test_model_server(&self) -> Result<serde_json::Value> {
        MarqueeClient::test_model_server(self).await
    }
}
