//! Marquee Core
//!
//! Platform-agnostic domain types, input parsing and translations for Marquee.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Settings`, `Candidate`, `Collection`, `CollectionStatus`
//! - **Search Input**: `SearchRequest` parsing of the free-text search box
//! - **Failures**: `SearchFailure` taxonomy for structured backend errors
//! - **Translations**: `Translations` table and the `Language` set
//!
//! # Example
//!
//! ```rust
//! use marquee_core::{SearchMode, SearchRequest};
//!
//! let request = SearchRequest::parse("heist movies 5", SearchMode::Mixed);
//! assert_eq!(
//!     request,
//!     SearchRequest::Theme {
//!         theme: "heist movies".to_string(),
//!         count: 5,
//!         mode: SearchMode::Mixed,
//!     }
//! );
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod failure;
pub mod i18n;
pub mod query;
pub mod types;

pub use error::{CoreError, Result};
pub use failure::{ApiErrorBody, MissingCredential, SearchFailure};
pub use i18n::{Language, LanguagePack, Translations};
pub use query::{
    derive_collection_name, split_trailing_count, SearchMode, SearchRequest,
    DEFAULT_RESULT_COUNT, LETTERBOXD_PREFIX,
};
pub use types::{
    Candidate, Collection, CollectionRecord, CollectionStatus, CuratedCollection,
    ExternalCollection, ExternalList, ListEntry, SelectOption, Settings, SettingsResponse,
};
