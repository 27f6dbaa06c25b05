//! Collection creation, listing and deletion.

use super::ActionOutcome;
use crate::session::Session;
use crate::ui::{render_cards, CreateAction};
use marquee_client::Transport;
use marquee_core::{derive_collection_name, Collection};
use tracing::{debug, error, info, warn};

pub struct CollectionManager<'a> {
    session: &'a Session,
}

impl<'a> CollectionManager<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Submit the checked rows of the rendered list, the way its create
    /// button would.
    pub async fn create_from_results(&self) -> ActionOutcome {
        let action = self
            .session
            .state()
            .read()
            .await
            .results
            .as_ref()
            .and_then(|list| list.create_action());

        match action {
            Some(CreateAction::Curated) => self.create().await,
            Some(CreateAction::External { name, url }) => self.create_external(&name, &url).await,
            None => {
                self.alert("no_movies_selected").await;
                ActionOutcome::Rejected
            }
        }
    }

    /// Create a curated collection from the checked rows, named after the
    /// search input.
    pub async fn create(&self) -> ActionOutcome {
        let (selected, input) = {
            let state = self.session.state().read().await;
            (
                state
                    .results
                    .as_ref()
                    .map(|list| list.selected_titles())
                    .unwrap_or_default(),
                state.search_input.clone(),
            )
        };

        if selected.is_empty() {
            self.alert("no_movies_selected").await;
            return ActionOutcome::Rejected;
        }
        let Some(name) = derive_collection_name(&input) else {
            self.alert("collection_name_required").await;
            return ActionOutcome::Rejected;
        };

        let frontend = self.session.frontend();
        self.session.state().write().await.create_busy = true;
        frontend.set_create_busy(true);

        let result = self.session.api().create_collection(&name, &selected).await;

        self.session.state().write().await.create_busy = false;
        frontend.set_create_busy(false);

        match result {
            Ok(_) => {
                info!(name = %name, movies = selected.len(), "Collection created");
                self.alert("collection_created").await;
                self.refresh().await;
                ActionOutcome::Done
            }
            Err(e) => {
                error!(name = %name, error = %e, "Failed to create collection");
                self.alert("collection_creation_error").await;
                ActionOutcome::Failed
            }
        }
    }

    /// Create a collection mirroring an external list from the checked rows.
    pub async fn create_external(&self, name: &str, url: &str) -> ActionOutcome {
        let selected = self
            .session
            .state()
            .read()
            .await
            .results
            .as_ref()
            .map(|list| list.selected_entries())
            .unwrap_or_default();

        if selected.is_empty() {
            self.alert("no_movies_selected").await;
            return ActionOutcome::Rejected;
        }

        let frontend = self.session.frontend();
        frontend.set_loading(true, &self.session.text("loading").await);

        let result = self
            .session
            .api()
            .create_list_collection(name, &selected, url)
            .await;

        frontend.set_loading(false, "");

        match result {
            Ok(_) => {
                info!(name, movies = selected.len(), "List collection created");
                self.alert("letterboxd_collection_created").await;
                self.refresh().await;
                ActionOutcome::Done
            }
            Err(e) => {
                error!(name, error = %e, "Failed to create list collection");
                self.alert("letterboxd_collection_creation_error").await;
                ActionOutcome::Failed
            }
        }
    }

    /// Fetch and render the collection snapshot.
    ///
    /// Every call takes a ticket; a response older than the snapshot on
    /// display is dropped. Returns whether the response was applied.
    pub async fn refresh(&self) -> bool {
        let ticket = self.session.next_ticket();

        let records = match self.session.api().collections_status().await {
            Ok(records) => records,
            Err(e) => {
                warn!(ticket, error = %e, "Failed to fetch collection status");
                return false;
            }
        };
        let collections: Vec<Collection> = records.into_iter().map(Collection::from).collect();

        let cards = {
            let mut state = self.session.state().write().await;
            if ticket < state.collections_ticket {
                debug!(
                    ticket,
                    current = state.collections_ticket,
                    "Discarding stale collection snapshot"
                );
                return false;
            }
            state.collections_ticket = ticket;
            state.collections = collections;
            render_cards(&state.collections, self.session.translations(), state.language)
        };

        debug!(ticket, collections = cards.len(), "Collection snapshot applied");
        self.session.frontend().render_collections(&cards);
        true
    }

    /// Delete a collection after confirmation.
    pub async fn delete(&self, name: &str) -> ActionOutcome {
        let frontend = self.session.frontend();

        if !frontend.confirm(&self.session.text("confirm_delete_collection").await) {
            debug!(name, "Deletion declined");
            return ActionOutcome::Declined;
        }

        match self.session.api().delete_collection(name).await {
            Ok(_) => {
                info!(name, "Collection deleted");
                self.alert("collection_deleted").await;
                self.refresh().await;
                ActionOutcome::Done
            }
            Err(e) => {
                error!(name, error = %e, "Failed to delete collection");
                let message = match e.transport() {
                    Transport::Responded => format!(
                        "{}: {}",
                        self.session.text("delete_collection_error").await,
                        e.server_message()
                    ),
                    Transport::NoResponse => {
                        self.session.text("delete_collection_network_error").await
                    }
                    Transport::NotSent => self.session.text("delete_collection_unknown_error").await,
                };
                frontend.alert(&message);
                ActionOutcome::Failed
            }
        }
    }

    async fn alert(&self, key: &str) {
        let message = self.session.text(key).await;
        self.session.frontend().alert(&message);
    }
}
