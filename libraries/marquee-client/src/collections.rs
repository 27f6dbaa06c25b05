//! Collection operations for the Marquee backend.

use crate::error::{ClientError, Result};
use crate::response;
use crate::types::{
    Ack, CreateCollectionRequest, CreateListCollectionRequest, DeleteCollectionRequest,
};
use marquee_core::{CollectionRecord, ListEntry};
use reqwest::Client;
use tracing::{debug, info};

/// Collections client for the Marquee backend.
pub struct CollectionsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> CollectionsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Create a curated collection from `Title (Year)` strings.
    pub async fn create(&self, name: &str, selected_movies: &[String]) -> Result<Ack> {
        let request = CreateCollectionRequest {
            collection_name: name.to_string(),
            selected_movies: selected_movies.to_vec(),
        };
        self.post_ack("create_collection", &request, "create collection")
            .await
            .map(|ack| {
                info!(name = %name, movies = selected_movies.len(), "Collection created");
                ack
            })
    }

    /// Create a collection mirroring an external list.
    pub async fn create_from_list(
        &self,
        name: &str,
        selected_movies: &[ListEntry],
        list_url: &str,
    ) -> Result<Ack> {
        let request = CreateListCollectionRequest {
            collection_name: name.to_string(),
            selected_movies: selected_movies.to_vec(),
            letterboxd_url: list_url.to_string(),
        };
        self.post_ack(
            "create_letterboxd_collection",
            &request,
            "create list collection",
        )
        .await
        .map(|ack| {
            info!(name = %name, movies = selected_movies.len(), "List collection created");
            ack
        })
    }

    /// Snapshot of every collection the backend tracks.
    pub async fn status(&self) -> Result<Vec<CollectionRecord>> {
        let url = format!("{}/collections_status", self.base_url);
        debug!(url = %url, "Fetching collection status");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let records: Vec<CollectionRecord> =
            response::json(response, "collection status").await?;

        debug!(collections = records.len(), "Fetched collection status");
        Ok(records)
    }

    /// Delete a collection by name.
    pub async fn delete(&self, name: &str) -> Result<Ack> {
        let request = DeleteCollectionRequest {
            name: name.to_string(),
        };
        self.post_ack("delete_collection", &request, "delete collection")
            .await
            .map(|ack| {
                info!(name = %name, "Collection deleted");
                ack
            })
    }

    async fn post_ack<B: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        what: &str,
    ) -> Result<Ack> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(url = %url, "{}", what);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        response::ack(response, what).await
    }
}
