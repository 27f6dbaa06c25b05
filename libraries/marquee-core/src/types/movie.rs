/// Movie candidate types
use serde::{Deserialize, Serialize};

/// A movie returned by a theme search or a list ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,

    /// Release year; the backend sends either a number or a numeric string
    #[serde(
        default,
        deserialize_with = "year::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,

    /// Whether the movie is already in the user's library
    #[serde(default)]
    pub in_library: bool,
}

impl Candidate {
    pub fn new(title: impl Into<String>, year: Option<i32>, in_library: bool) -> Self {
        Self {
            title: title.into(),
            year,
            imdb_id: None,
            in_library,
        }
    }

    /// `Title (Year)`, or just the title when the year is unknown.
    ///
    /// This is also the value the backend expects in `selected_movies`.
    pub fn display_title(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }
}

/// Entry of an ingested external list, in both directions of the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub title: String,

    #[serde(default)]
    pub in_plex: bool,
}

impl From<ListEntry> for Candidate {
    fn from(entry: ListEntry) -> Self {
        Candidate::new(entry.title, None, entry.in_plex)
    }
}

impl From<&Candidate> for ListEntry {
    fn from(candidate: &Candidate) -> Self {
        Self {
            title: candidate.title.clone(),
            in_plex: candidate.in_library,
        }
    }
}

/// Response of the list ingestion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalList {
    pub collection_name: String,

    #[serde(default)]
    pub movies: Vec<ListEntry>,

    pub letterboxd_url: String,
}

mod year {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(i64),
        Text(String),
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawYear>::deserialize(deserializer)?;
        Ok(raw.and_then(|raw| match raw {
            RawYear::Number(n) => i32::try_from(n).ok(),
            RawYear::Text(s) => s.trim().parse().ok(),
        }))
    }
}
