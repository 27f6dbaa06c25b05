/// Shared handles every controller works against
use crate::controllers::{
    CollectionManager, ExamplePresenter, LanguageController, SearchController, SettingsController,
};
use crate::frontend::Frontend;
use crate::state::UiState;
use marquee_client::CuratorApi;
use marquee_core::{Language, Translations};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct Session {
    api: Arc<dyn CuratorApi>,
    frontend: Arc<dyn Frontend>,
    translations: Arc<Translations>,
    state: Arc<RwLock<UiState>>,
    tickets: Arc<AtomicU64>,
    shutdown: CancellationToken,
}

impl Session {
    pub fn new(
        api: Arc<dyn CuratorApi>,
        frontend: Arc<dyn Frontend>,
        translations: Translations,
        language: Language,
    ) -> Self {
        Self {
            api,
            frontend,
            translations: Arc::new(translations),
            state: Arc::new(RwLock::new(UiState::new(language))),
            tickets: Arc::new(AtomicU64::new(0)),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn api(&self) -> &dyn CuratorApi {
        self.api.as_ref()
    }

    pub fn frontend(&self) -> &dyn Frontend {
        self.frontend.as_ref()
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn state(&self) -> &RwLock<UiState> {
        &self.state
    }

    /// Copy of the current UI state.
    pub async fn snapshot(&self) -> UiState {
        self.state.read().await.clone()
    }

    pub async fn current_language(&self) -> Language {
        self.state.read().await.language
    }

    /// Localized message in the current language.
    pub async fn text(&self, key: &str) -> String {
        let language = self.current_language().await;
        self.translations.text(language, key)
    }

    /// Cancelled when the application shuts down.
    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown
    }

    pub(crate) fn next_ticket(&self) -> u64 {
        self.tickets.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn language(&self) -> LanguageController<'_> {
        LanguageController::new(self)
    }

    pub fn settings(&self) -> SettingsController<'_> {
        SettingsController::new(self)
    }

    pub fn search(&self) -> SearchController<'_> {
        SearchController::new(self)
    }

    pub fn collections(&self) -> CollectionManager<'_> {
        CollectionManager::new(self)
    }

    pub fn examples(&self) -> ExamplePresenter<'_> {
        ExamplePresenter::new(self)
    }
}
