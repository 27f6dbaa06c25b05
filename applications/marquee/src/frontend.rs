//! Frontend seam.
//!
//! Controllers never draw anything themselves; they hand finished view
//! models to a [`Frontend`]. The terminal frontend ships with the binary,
//! tests plug in a recording one.

use crate::state::SettingsForm;
use crate::ui::{CollectionCard, Document, ResultsView};

/// Step of the example cross-fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Shown without animation (first example)
    Shown,
    /// Current example starts fading out
    FadeOut,
    /// New example text is set and fades in
    FadeIn,
    /// Animation done
    Settled,
}

pub trait Frontend: Send + Sync {
    /// Blocking, dismissible message
    fn alert(&self, message: &str);

    /// Yes/no question; `false` when declined
    fn confirm(&self, message: &str) -> bool;

    /// Full-page loading overlay; the search control is disabled while it is
    /// visible.
    fn set_loading(&self, visible: bool, text: &str);

    /// Busy indicator scoped to the create button
    fn set_create_busy(&self, busy: bool);

    fn set_pirate_mode(&self, enabled: bool);

    fn render_document(&self, document: &Document);

    fn render_settings(&self, form: &SettingsForm);

    fn close_settings(&self);

    fn render_results(&self, view: &ResultsView);

    fn render_collections(&self, cards: &[CollectionCard]);

    fn show_example(&self, phase: FadePhase, text: &str);
}
