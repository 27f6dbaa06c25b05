/// Explicit UI state
use crate::ui::{CandidateList, Document};
use marquee_core::{Collection, Language, SearchMode, SelectOption, Settings, SettingsResponse};

/// Option lists and current values of the settings dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub root_folders: Vec<SelectOption>,
    pub quality_profiles: Vec<SelectOption>,
    pub plex_libraries: Vec<SelectOption>,
    pub models: Vec<SelectOption>,
    pub values: Settings,
}

impl SettingsForm {
    /// Replace every option list and value with what the backend sent.
    pub fn replace(&mut self, response: SettingsResponse) {
        self.root_folders = response.root_folders;
        self.quality_profiles = response.quality_profiles;
        self.plex_libraries = response.plex_libraries;
        self.models = response.models;
        self.values = response.current_settings;
    }
}

/// Everything the page shows, owned by the [`App`](crate::app::App)
#[derive(Debug, Clone)]
pub struct UiState {
    pub language: Language,
    pub document: Document,

    pub settings: SettingsForm,
    pub settings_open: bool,

    /// Text of the search box as last submitted
    pub search_input: String,
    pub search_mode: SearchMode,
    /// A search request is in flight
    pub searching: bool,
    /// Most recently rendered results
    pub results: Option<CandidateList>,
    /// A curated collection is being created
    pub create_busy: bool,

    pub collections: Vec<Collection>,
    /// Ticket of the collection snapshot on display
    pub collections_ticket: u64,

    pub example: Option<String>,
}

impl UiState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            document: Document::main_page(),
            settings: SettingsForm::default(),
            settings_open: false,
            search_input: String::new(),
            search_mode: SearchMode::default(),
            searching: false,
            results: None,
            create_busy: false,
            collections: Vec::new(),
            collections_ticket: 0,
            example: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
