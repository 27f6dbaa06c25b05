//! Search orchestration.
//!
//! One entry point for the search box: a Letterboxd URL is ingested as an
//! external list, anything else is a theme search with an optional
//! trailing movie count.

use crate::session::Session;
use crate::ui::CandidateList;
use marquee_client::{ClientError, ThemeSearchRequest};
use marquee_core::{Language, SearchFailure, SearchMode, SearchRequest};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Another search was still in flight
    Ignored,
    /// Results were rendered
    Rendered { rows: usize },
    /// The search failed and an alert was shown
    Failed,
}

pub struct SearchController<'a> {
    session: &'a Session,
}

impl<'a> SearchController<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_mode(&self, mode: SearchMode) {
        self.session.state().write().await.search_mode = mode;
    }

    /// Run the search box contents.
    ///
    /// The loading overlay is shown for the duration of the request and
    /// hidden however it ends, including when the future is dropped early.
    pub async fn search(&self, input: &str) -> SearchOutcome {
        let (language, mode) = {
            let mut state = self.session.state().write().await;
            if state.searching {
                debug!(input, "Search already in flight, ignoring");
                return SearchOutcome::Ignored;
            }
            state.searching = true;
            state.search_input = input.to_string();
            (state.language, state.search_mode)
        };
        let mut in_flight = InFlight::new(self.session.clone());

        let frontend = self.session.frontend();
        let translations = self.session.translations();
        frontend.set_loading(true, &translations.text(language, "loading"));
        in_flight.overlay = true;

        let list = match SearchRequest::parse(input, mode) {
            SearchRequest::Theme { theme, count, mode } => {
                self.theme(
                    ThemeSearchRequest {
                        theme,
                        count,
                        option: mode,
                    },
                    language,
                )
                .await
            }
            SearchRequest::ExternalList { url } => self.external_list(&url, language).await,
        };

        frontend.set_loading(false, "");
        in_flight.overlay = false;

        let list = {
            let mut state = self.session.state().write().await;
            state.searching = false;
            in_flight.searching = false;
            if let Some(list) = &list {
                state.results = Some(list.clone());
            }
            list
        };

        match list {
            Some(list) => {
                frontend.render_results(&list.view(translations, language));
                SearchOutcome::Rendered { rows: list.len() }
            }
            None => SearchOutcome::Failed,
        }
    }

    async fn theme(&self, request: ThemeSearchRequest, language: Language) -> Option<CandidateList> {
        debug!(theme = %request.theme, count = request.count, mode = %request.option, "Theme search");

        match self.session.api().search_movies(&request).await {
            Ok(candidates) => {
                info!(theme = %request.theme, movies = candidates.len(), "Theme search returned");
                Some(CandidateList::from_theme(candidates))
            }
            Err(e) => {
                let failure = classify(&e);
                warn!(error = %e, failure = ?failure, "Theme search failed");
                self.session
                    .frontend()
                    .alert(&failure.describe(self.session.translations(), language));
                None
            }
        }
    }

    async fn external_list(&self, url: &str, language: Language) -> Option<CandidateList> {
        match self.session.api().process_list(url).await {
            Ok(list) => {
                info!(name = %list.collection_name, movies = list.movies.len(), "External list loaded");
                Some(CandidateList::from_external(list))
            }
            Err(e) => {
                warn!(error = %e, url, "External list failed");
                self.session
                    .frontend()
                    .alert(&self.session.translations().text(language, "letterboxd_error"));
                None
            }
        }
    }

    /// Flip every row of the rendered list (see [`CandidateList::toggle_all`]).
    pub async fn toggle_all(&self) -> bool {
        self.update_results(|list| {
            list.toggle_all();
            true
        })
        .await
    }

    /// Flip one row of the rendered list.
    pub async fn toggle(&self, index: usize) -> bool {
        self.update_results(|list| list.toggle(index)).await
    }

    async fn update_results<F>(&self, update: F) -> bool
    where
        F: FnOnce(&mut CandidateList) -> bool,
    {
        let view = {
            let mut state = self.session.state().write().await;
            let language = state.language;
            let Some(list) = state.results.as_mut() else {
                return false;
            };
            if !update(list) {
                return false;
            }
            list.view(self.session.translations(), language)
        };

        self.session.frontend().render_results(&view);
        true
    }
}

/// Undoes the in-flight markers of a search whose future was dropped
/// before it finished.
struct InFlight {
    session: Session,
    overlay: bool,
    searching: bool,
}

impl InFlight {
    fn new(session: Session) -> Self {
        Self {
            session,
            overlay: false,
            searching: true,
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.overlay {
            self.session.frontend().set_loading(false, "");
        }
        if !self.searching {
            return;
        }

        debug!("Search abandoned mid-flight, clearing flag");
        if let Ok(mut state) = self.session.state().try_write() {
            state.searching = false;
        } else if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let session = self.session.clone();
            handle.spawn(async move {
                session.state().write().await.searching = false;
            });
        } else {
            warn!("No runtime to clear the search flag");
        }
    }
}

/// Structured bodies map onto the failure taxonomy; transport errors and
/// unstructured bodies are unknown failures.
fn classify(error: &ClientError) -> SearchFailure {
    error
        .api_body()
        .map_or(SearchFailure::Unknown(None), SearchFailure::from_body)
}
