//! Structured search failures and their user-facing descriptions.

use crate::i18n::{Language, Translations};
use serde::{Deserialize, Serialize};

/// Error body returned by the backend on a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error category, or a free-form message for unstructured failures
    pub error: String,

    /// Reason codes attached to a configuration error
    #[serde(default)]
    pub details: Vec<String>,
}

/// A backend credential reported as missing or invalid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MissingCredential {
    PlexToken,
    GroqApiKey,
    RadarrApiKey,
    /// Reason code this client does not know, kept verbatim
    Other(String),
}

impl MissingCredential {
    pub fn from_code(code: &str) -> Self {
        match code {
            "plex_token_missing" => MissingCredential::PlexToken,
            "groq_api_key_missing" => MissingCredential::GroqApiKey,
            "radarr_api_key_missing" => MissingCredential::RadarrApiKey,
            other => MissingCredential::Other(other.to_string()),
        }
    }

    /// Reason code, which doubles as the translation key
    pub fn code(&self) -> &str {
        match self {
            MissingCredential::PlexToken => "plex_token_missing",
            MissingCredential::GroqApiKey => "groq_api_key_missing",
            MissingCredential::RadarrApiKey => "radarr_api_key_missing",
            MissingCredential::Other(code) => code,
        }
    }
}

/// Why a theme search failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFailure {
    /// One or more backend credentials are missing
    Configuration(Vec<MissingCredential>),
    /// The LLM provider rate limit was hit
    RateLimited,
    /// The LLM provider rejected the API key
    InvalidApiKey,
    /// Anything else; the payload is kept for logs only
    Unknown(Option<String>),
}

impl SearchFailure {
    pub fn from_body(body: &ApiErrorBody) -> Self {
        match body.error.as_str() {
            "configuration_error" => SearchFailure::Configuration(
                body.details
                    .iter()
                    .map(|code| MissingCredential::from_code(code))
                    .collect(),
            ),
            "rate_limit_exceeded" => SearchFailure::RateLimited,
            "invalid_api_key" => SearchFailure::InvalidApiKey,
            other => SearchFailure::Unknown(Some(other.to_string())),
        }
    }

    /// Localized alert text
    pub fn describe(&self, translations: &Translations, language: Language) -> String {
        let text = |key: &str| translations.text(language, key);

        match self {
            SearchFailure::Configuration(missing) => {
                let mut message = text("config_errors_header");
                message.push('\n');
                for credential in missing {
                    let line = match credential {
                        MissingCredential::Other(code) => code.clone(),
                        known => text(known.code()),
                    };
                    message.push_str("- ");
                    message.push_str(&line);
                    message.push('\n');
                }
                message.push_str(&text("config_errors_footer"));
                message
            }
            SearchFailure::RateLimited => text("rate_limit_exceeded"),
            SearchFailure::InvalidApiKey => text("invalid_api_key"),
            SearchFailure::Unknown(_) => text("unknown_error"),
        }
    }
}
