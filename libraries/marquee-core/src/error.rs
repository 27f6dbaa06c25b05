/// Core error types for Marquee
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Marquee
#[derive(Error, Debug)]
pub enum CoreError {
    /// Language name outside the supported set
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Search mode outside `library`, `mixed` and `discovery`
    #[error("Unknown search mode: {0}")]
    UnknownSearchMode(String),

    /// Translation table could not be parsed
    #[error("Invalid translation table: {0}")]
    Translations(#[from] serde_json::Error),

    /// IO error while reading a translation file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
