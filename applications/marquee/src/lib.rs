//! Marquee
//!
//! Movie discovery and collection management on top of a Marquee backend.
//!
//! The [`App`] owns an explicit [`UiState`] and a single background task.
//! Controllers, reached through the [`Session`], translate user actions
//! into backend calls and hand view models to a [`Frontend`].

pub mod app;
pub mod config;
pub mod controllers;
pub mod error;
pub mod frontend;
pub mod session;
pub mod state;
pub mod terminal;
pub mod ui;

// Re-export commonly used types for convenience
pub use app::{App, Intervals};
pub use config::AppConfig;
pub use controllers::{ActionOutcome, PollerHandle, SearchOutcome};
pub use error::{AppError, Result};
pub use frontend::{FadePhase, Frontend};
pub use session::Session;
pub use state::{SettingsForm, UiState};
pub use terminal::TerminalFrontend;
