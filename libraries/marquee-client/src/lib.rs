//! Marquee Client
//!
//! HTTP client library for the Marquee backend API.
//!
//! # Features
//!
//! - **Settings**: Read the option lists and current settings, save edits
//! - **Search**: AI theme search and Letterboxd list ingestion
//! - **Collections**: Create, list and delete collections
//! - **Maintenance**: Clear the library cache, check the model server
//!
//! # Example
//!
//! ```ignore
//! use marquee_client::{MarqueeClient, ServerConfig};
//! use marquee_core::SearchMode;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarqueeClient::new(ServerConfig::new("http://localhost:9999"))?;
//!
//!     let candidates = client
//!         .search()
//!         .by_theme("heist movies", 5, SearchMode::Mixed)
//!         .await?;
//!     println!("Found {} movies", candidates.len());
//!
//!     for collection in client.collections().status().await? {
//!         println!("{}", collection.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod collections;
mod error;
mod response;
mod search;
mod settings;
mod types;

// Re-export main types
pub use api::CuratorApi;
pub use client::MarqueeClient;
pub use error::{ClientError, Result, Transport};
pub use types::{
    Ack, CreateCollectionRequest, CreateListCollectionRequest, DeleteCollectionRequest,
    ListRequest, ServerConfig, ThemeSearchRequest, DEFAULT_TIMEOUT,
};

// Re-export sub-clients for direct use if needed
pub use collections::CollectionsClient;
pub use search::SearchClient;
pub use settings::SettingsClient;
