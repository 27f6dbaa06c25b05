//! Controllers.
//!
//! Each controller borrows the [`Session`](crate::session::Session) and turns
//! one user or timer action into backend calls, state updates and frontend
//! calls. Failures end at the controller: they are logged and, where the
//! user started the action, surfaced as a single alert.

pub mod collections;
pub mod examples;
pub mod language;
pub mod poller;
pub mod search;
pub mod settings;

pub use collections::CollectionManager;
pub use examples::{ExamplePresenter, FADE_STEP};
pub use language::LanguageController;
pub use poller::PollerHandle;
pub use search::{SearchController, SearchOutcome};
pub use settings::SettingsController;

/// Result of a user-initiated mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The backend accepted the request
    Done,
    /// The user declined the confirmation
    Declined,
    /// Rejected locally, nothing was sent
    Rejected,
    /// The request failed
    Failed,
}
