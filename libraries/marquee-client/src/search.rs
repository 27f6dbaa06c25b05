//! Theme search and list ingestion for the Marquee backend.

use crate::error::{ClientError, Result};
use crate::response;
use crate::types::{ListRequest, ThemeSearchRequest, ThemeSearchResponse};
use marquee_core::{Candidate, ExternalList, SearchMode};
use reqwest::Client;
use tracing::debug;

/// Search client for the Marquee backend.
pub struct SearchClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> SearchClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Ask the backend for movies matching a theme.
    ///
    /// # Arguments
    /// * `theme` - Free-text theme
    /// * `count` - Number of movies wanted
    /// * `mode` - Where candidates may come from
    pub async fn by_theme(
        &self,
        theme: &str,
        count: u32,
        mode: SearchMode,
    ) -> Result<Vec<Candidate>> {
        self.send(&ThemeSearchRequest {
            theme: theme.to_string(),
            count,
            option: mode,
        })
        .await
    }

    pub async fn send(&self, request: &ThemeSearchRequest) -> Result<Vec<Candidate>> {
        let url = format!("{}/search_movies", self.base_url);
        debug!(
            url = %url,
            theme = %request.theme,
            count = request.count,
            mode = %request.option,
            "Searching movies"
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let result: ThemeSearchResponse = response::json(response, "search").await?;

        debug!(movies = result.movies.len(), "Search returned");
        Ok(result.movies)
    }

    /// Fetch and resolve an external (Letterboxd) list.
    pub async fn external_list(&self, list_url: &str) -> Result<ExternalList> {
        let url = format!("{}/process_letterboxd_list", self.base_url);
        debug!(url = %url, list = %list_url, "Processing external list");

        let response = self
            .http
            .post(&url)
            .json(&ListRequest {
                url: list_url.to_string(),
            })
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let list: ExternalList = response::json(response, "list").await?;

        debug!(
            name = %list.collection_name,
            movies = list.movies.len(),
            "Processed external list"
        );
        Ok(list)
    }
}
