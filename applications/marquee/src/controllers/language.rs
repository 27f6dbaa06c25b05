//! Language switching.

use crate::session::Session;
use crate::ui::{apply_translations, render_cards};
use marquee_core::Language;
use tracing::info;

pub struct LanguageController<'a> {
    session: &'a Session,
}

impl<'a> LanguageController<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Switch language: pirate theme, page text, result and collection
    /// labels, then a new example in the background.
    pub async fn change(&self, language: Language) {
        self.apply(language).await;
        self.spawn_example_rotation();
    }

    /// Re-apply the current language without rotating the example.
    pub async fn apply_current(&self) {
        let language = self.session.current_language().await;
        self.apply(language).await;
    }

    async fn apply(&self, language: Language) {
        let translations = self.session.translations();

        let (document, results, cards) = {
            let mut state = self.session.state().write().await;
            state.language = language;
            apply_translations(&mut state.document, translations, language);
            (
                state.document.clone(),
                state
                    .results
                    .as_ref()
                    .map(|list| list.view(translations, language)),
                render_cards(&state.collections, translations, language),
            )
        };

        let frontend = self.session.frontend();
        frontend.set_pirate_mode(language.is_pirate());
        frontend.render_document(&document);
        if let Some(view) = results {
            frontend.render_results(&view);
        }
        frontend.render_collections(&cards);

        info!(language = %language, "Language applied");
    }

    fn spawn_example_rotation(&self) {
        let session = self.session.clone();
        tokio::spawn(async move {
            let presenter = session.examples();
            tokio::select! {
                () = session.shutdown_token().cancelled() => {}
                _ = presenter.rotate() => {}
            }
        });
    }
}
