//! Settings synchronization.
//!
//! Settings live on the backend; this controller mirrors them into the
//! settings form. Failures are logged only: the form keeps its previous
//! contents and nothing is retried.

use crate::session::Session;
use marquee_core::{Language, Settings};
use tracing::{error, info, warn};

pub struct SettingsController<'a> {
    session: &'a Session,
}

impl<'a> SettingsController<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Fetch option lists and current values, then apply the stored
    /// language.
    pub async fn load(&self) -> bool {
        let response = match self.session.api().get_settings().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Failed to load settings");
                return false;
            }
        };

        let language = response.current_settings.language.clone();
        let form = {
            let mut state = self.session.state().write().await;
            state.settings.replace(response);
            state.settings.clone()
        };
        self.session.frontend().render_settings(&form);

        self.apply_language(&language).await;
        info!("Settings loaded");
        true
    }

    pub async fn open(&self) {
        let form = {
            let mut state = self.session.state().write().await;
            state.settings_open = true;
            state.settings.clone()
        };
        self.session.frontend().render_settings(&form);
    }

    /// Change form values ahead of [`save`](Self::save).
    pub async fn edit<F>(&self, edit: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut state = self.session.state().write().await;
        edit(&mut state.settings.values);
    }

    /// Persist the form values. On success the language is re-applied and
    /// the dialog closes; on failure it stays open.
    pub async fn save(&self) -> bool {
        let values = self.session.state().read().await.settings.values.clone();

        if let Err(e) = self.session.api().save_settings(&values).await {
            error!(error = %e, "Failed to save settings");
            return false;
        }

        self.apply_language(&values.language).await;
        self.session.state().write().await.settings_open = false;
        self.session.frontend().close_settings();
        info!("Settings saved");
        true
    }

    async fn apply_language(&self, raw: &str) {
        match raw.parse::<Language>() {
            Ok(language) => self.session.language().change(language).await,
            Err(_) => warn!(language = raw, "Unsupported language in settings, keeping current"),
        }
    }
}
