//! Presentation models handed to a [`Frontend`](crate::frontend::Frontend).

pub mod candidates;
pub mod collections;
pub mod document;

pub use candidates::{CandidateList, CandidateRow, CreateAction, ResultOrigin, ResultsView, RowView};
pub use collections::{render_cards, CardIcon, CardLine, CollectionCard};
pub use document::{apply_translations, Document, Element, ElementKind};
