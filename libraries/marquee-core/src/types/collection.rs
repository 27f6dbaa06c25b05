/// Collection snapshot types
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Collection as the status endpoint returns it.
///
/// Curated and list-derived collections share one loosely typed record;
/// `Collection::from` turns it into the typed form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRecord {
    pub name: String,

    #[serde(default)]
    pub is_letterboxd: bool,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub movies: Option<Vec<String>>,

    #[serde(default)]
    pub last_updated: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub added_count: Option<u32>,

    #[serde(default)]
    pub total_count: Option<u32>,
}

/// Progress of a curated collection on the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CollectionStatus {
    /// Accepted, first availability check not run yet
    Queued,
    /// Waiting for missing movies to land in the library
    InProgress,
    /// Every movie has been added
    Complete,
    /// The server gave up on the collection
    Failed,
    /// Anything the client does not recognize, kept verbatim
    Unknown(String),
}

impl CollectionStatus {
    /// Parse a status label. Matching is case-insensitive and accepts the
    /// French labels the backend writes (`En cours`, `Terminé`).
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "queued" | "pending" | "en attente" => CollectionStatus::Queued,
            "in_progress" | "in progress" | "en cours" => CollectionStatus::InProgress,
            "complete" | "completed" | "done" | "terminé" | "termine" => {
                CollectionStatus::Complete
            }
            "failed" | "error" | "échec" | "echec" | "erreur" => CollectionStatus::Failed,
            _ => CollectionStatus::Unknown(raw.to_string()),
        }
    }

    /// Translation key of the display text
    pub fn translation_key(&self) -> &'static str {
        match self {
            CollectionStatus::Queued => "queued",
            CollectionStatus::InProgress => "in_progress",
            CollectionStatus::Complete => "complete",
            CollectionStatus::Failed => "failed",
            CollectionStatus::Unknown(_) => "unknown_status",
        }
    }

    /// Whether the status line carries a spinner
    pub fn shows_spinner(&self) -> bool {
        matches!(self, CollectionStatus::InProgress)
    }
}

impl From<&str> for CollectionStatus {
    fn from(raw: &str) -> Self {
        CollectionStatus::parse(raw)
    }
}

/// Collection built from search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuratedCollection {
    pub name: String,
    pub movies: Vec<String>,
    pub added_count: u32,
    pub total_count: u32,
    pub status: CollectionStatus,
}

/// Collection mirrored from an external list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCollection {
    pub name: String,
    pub url: String,
    pub movies: Vec<String>,
    /// Last synchronization, as sent by the server
    pub last_updated: Option<String>,
}

impl ExternalCollection {
    /// Parsed last synchronization time.
    ///
    /// Accepts RFC 3339 and offset-less ISO 8601 (read as UTC).
    pub fn last_updated_at(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.last_updated.as_deref()?.trim();
        DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive).into())
        })
    }
}

/// Typed, read-only view of a server-side collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    Curated(CuratedCollection),
    External(ExternalCollection),
}

impl Collection {
    pub fn name(&self) -> &str {
        match self {
            Collection::Curated(c) => &c.name,
            Collection::External(c) => &c.name,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Collection::External(_))
    }
}

impl From<CollectionRecord> for Collection {
    fn from(record: CollectionRecord) -> Self {
        let movies = record.movies.unwrap_or_default();

        if record.is_letterboxd {
            Collection::External(ExternalCollection {
                name: record.name,
                url: record.url.unwrap_or_default(),
                movies,
                last_updated: record.last_updated,
            })
        } else {
            let status = record
                .status
                .as_deref()
                .map(CollectionStatus::parse)
                .unwrap_or_else(|| CollectionStatus::Unknown(String::new()));

            Collection::Curated(CuratedCollection {
                name: record.name,
                total_count: record
                    .total_count
                    .unwrap_or_else(|| u32::try_from(movies.len()).unwrap_or(u32::MAX)),
                added_count: record.added_count.unwrap_or(0),
                movies,
                status,
            })
        }
    }
}
