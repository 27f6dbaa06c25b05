/// Backend settings types
use crate::i18n::Language;
use serde::{Deserialize, Serialize};

/// One entry of a selectable option list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Persisted configuration, owned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Radarr root folder for new downloads
    pub root_folder: String,

    /// Radarr quality profile name
    pub quality_profile: String,

    /// Plex library that receives collections
    pub plex_library: String,

    /// UI language, as the backend stores it
    pub language: String,

    /// LLM used for theme searches
    pub model: String,
}

impl Settings {
    /// Parsed language, `None` when the stored value is not supported
    pub fn parsed_language(&self) -> Option<Language> {
        self.language.parse().ok()
    }
}

/// Response of the settings endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsResponse {
    #[serde(default)]
    pub root_folders: Vec<SelectOption>,

    #[serde(default)]
    pub quality_profiles: Vec<SelectOption>,

    #[serde(default)]
    pub plex_libraries: Vec<SelectOption>,

    /// Available models (the backend names this list `model`)
    #[serde(default, rename = "model")]
    pub models: Vec<SelectOption>,

    #[serde(default)]
    pub current_settings: Settings,
}
