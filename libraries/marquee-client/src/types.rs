//! Types for Marquee backend API requests and responses.

use marquee_core::{Candidate, ListEntry, SearchMode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request timeout; theme searches wait on an LLM round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for connecting to a Marquee backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the backend (e.g., "http://localhost:9999")
    pub url: String,
    /// Upper bound for a whole request, response body included
    pub timeout: Duration,
}

impl ServerConfig {
    /// Create a new server config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// =============================================================================
// Search Types
// =============================================================================

/// Request body for the theme search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSearchRequest {
    pub theme: String,
    pub count: u32,
    /// Wire name of the search mode
    pub option: SearchMode,
}

/// Request body for the list ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRequest {
    pub url: String,
}

/// Response from a successful theme search.
#[derive(Debug, Deserialize)]
pub(crate) struct ThemeSearchResponse {
    #[serde(default)]
    pub movies: Vec<Candidate>,
}

// =============================================================================
// Collection Types
// =============================================================================

/// Request body for creating a curated collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCollectionRequest {
    pub collection_name: String,
    /// `Title (Year)` strings
    pub selected_movies: Vec<String>,
}

/// Request body for creating a collection from an external list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateListCollectionRequest {
    pub collection_name: String,
    pub selected_movies: Vec<ListEntry>,
    pub letterboxd_url: String,
}

/// Request body for deleting a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteCollectionRequest {
    pub name: String,
}

/// Acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}
