/// Application wiring
use crate::config::AppConfig;
use crate::controllers::PollerHandle;
use crate::error::Result;
use crate::frontend::Frontend;
use crate::session::Session;
use marquee_client::{CuratorApi, MarqueeClient};
use marquee_core::{Language, Translations};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Timer settings of the background task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intervals {
    pub poll: Duration,
    pub example: Duration,
}

impl Default for Intervals {
    fn default() -> Self {
        Self {
            poll: Duration::from_secs(5),
            example: Duration::from_secs(12),
        }
    }
}

pub struct App {
    session: Session,
    intervals: Intervals,
    poller: Option<PollerHandle>,
}

impl App {
    /// Build the app against the backend named in `config`.
    pub fn new(config: &AppConfig, frontend: Arc<dyn Frontend>) -> Result<Self> {
        let client = MarqueeClient::new(config.server_config())?;
        info!(url = %client.url(), "Using backend");

        Ok(Self::with_api(
            Arc::new(client),
            frontend,
            config.translations()?,
            config.ui.language,
            Intervals {
                poll: config.poll_interval(),
                example: config.example_interval(),
            },
        ))
    }

    pub fn with_api(
        api: Arc<dyn CuratorApi>,
        frontend: Arc<dyn Frontend>,
        translations: Translations,
        language: Language,
        intervals: Intervals,
    ) -> Self {
        Self {
            session: Session::new(api, frontend, translations, language),
            intervals,
            poller: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Translate the page, show the first example, load the backend
    /// settings and start background updates.
    pub async fn start(&mut self) {
        self.session.language().apply_current().await;
        self.session.examples().show_first().await;
        self.session.settings().load().await;

        if self.poller.is_none() {
            self.poller = Some(PollerHandle::spawn(
                self.session.clone(),
                self.intervals.poll,
                self.intervals.example,
            ));
        }
    }

    pub fn is_running(&self) -> bool {
        self.poller.as_ref().is_some_and(PollerHandle::is_running)
    }

    /// Stop background work, including example fades still in progress.
    pub async fn shutdown(mut self) {
        self.session.shutdown_token().cancel();
        if let Some(poller) = self.poller.take() {
            poller.shutdown().await;
        }
    }
}
