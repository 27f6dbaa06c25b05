//! Parsing of the free-text search box.
//!
//! The same input field serves two purposes: a themed prompt such as
//! `"space westerns 8"` (theme plus requested result count), or the URL of a
//! Letterboxd list. The collection name for a curated collection is derived
//! from the same text.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inputs starting with this prefix are treated as external list URLs.
pub const LETTERBOXD_PREFIX: &str = "https://letterboxd.com/";

/// Result count used when the input carries no trailing number.
pub const DEFAULT_RESULT_COUNT: u32 = 10;

/// Which pool of movies a theme search draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Only movies already in the library
    Library,
    /// Library movies and new discoveries
    #[default]
    Mixed,
    /// Suggestions regardless of library membership
    Discovery,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Library, SearchMode::Mixed, SearchMode::Discovery];

    /// Wire value sent as `option`
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Library => "library",
            SearchMode::Mixed => "mixed",
            SearchMode::Discovery => "discovery",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownSearchMode(s.to_string()))
    }
}

/// A search derived from the raw input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// AI theme search
    Theme {
        theme: String,
        count: u32,
        mode: SearchMode,
    },
    /// Ingestion of an external list by URL
    ExternalList { url: String },
}

impl SearchRequest {
    /// Classify the input text. The list prefix always wins, even when the
    /// URL ends in digits.
    pub fn parse(input: &str, mode: SearchMode) -> Self {
        if input.starts_with(LETTERBOXD_PREFIX) {
            return SearchRequest::ExternalList {
                url: input.to_string(),
            };
        }

        let (theme, count) = split_trailing_count(input);
        SearchRequest::Theme {
            theme: theme.to_string(),
            count: count.unwrap_or(DEFAULT_RESULT_COUNT),
            mode,
        }
    }
}

/// Split a trailing run of ASCII digits (optionally followed by whitespace)
/// off the input.
///
/// Returns the remaining text with surrounding whitespace removed, and the
/// parsed count. A count of zero, or one too large for `u32`, yields `None`
/// while the digits are still stripped.
pub fn split_trailing_count(input: &str) -> (&str, Option<u32>) {
    let body = input.trim_end();
    let digits_start = body
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(index, _)| index);

    match digits_start {
        Some(start) => {
            let count = body[start..].parse::<u32>().ok().filter(|n| *n > 0);
            (body[..start].trim(), count)
        }
        None => (body.trim(), None),
    }
}

/// Collection name for a curated collection: the input with its trailing
/// numeric token removed. `None` when nothing is left.
pub fn derive_collection_name(input: &str) -> Option<String> {
    let (name, _) = split_trailing_count(input);
    (!name.is_empty()).then(|| name.to_string())
}
