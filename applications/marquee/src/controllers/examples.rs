//! Rotating search examples.

use crate::frontend::FadePhase;
use crate::session::Session;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::debug;

/// Length of each half of the cross-fade
pub const FADE_STEP: Duration = Duration::from_millis(500);

pub struct ExamplePresenter<'a> {
    session: &'a Session,
}

impl<'a> ExamplePresenter<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Show the first example of the current language, without animation.
    pub async fn show_first(&self) -> Option<String> {
        let language = self.session.current_language().await;
        let Some(first) = self.session.translations().examples(language).first().cloned() else {
            debug!(language = %language, "No examples to show");
            return None;
        };

        self.session.state().write().await.example = Some(first.clone());
        self.session.frontend().show_example(FadePhase::Shown, &first);
        Some(first)
    }

    /// Cross-fade to a random example of the current language. Repeats are
    /// allowed.
    pub async fn rotate(&self) -> Option<String> {
        let language = self.session.current_language().await;
        let next = {
            let mut rng = rand::thread_rng();
            self.session
                .translations()
                .examples(language)
                .choose(&mut rng)
                .cloned()
        }?;

        let frontend = self.session.frontend();
        let current = self.session.state().read().await.example.clone();

        frontend.show_example(FadePhase::FadeOut, current.as_deref().unwrap_or_default());
        tokio::time::sleep(FADE_STEP).await;

        self.session.state().write().await.example = Some(next.clone());
        frontend.show_example(FadePhase::FadeIn, &next);
        tokio::time::sleep(FADE_STEP).await;

        frontend.show_example(FadePhase::Settled, &next);
        debug!(example = %next, "Example rotated");
        Some(next)
    }
}
