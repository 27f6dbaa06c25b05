//! Translatable page model.
//!
//! Elements may carry a translation key; [`apply_translations`] rewrites
//! their visible text from the translation table.

use marquee_core::{Language, Translations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Heading, label or paragraph
    Text,
    /// Single-line text input; translations go to its placeholder
    TextInput,
    Button,
    /// Entry of a select list
    Choice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    pub translation_key: Option<String>,
    pub text: String,
    pub placeholder: String,
}

impl Element {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            translation_key: None,
            text: String::new(),
            placeholder: String::new(),
        }
    }

    /// Tag the element with a translation key.
    pub fn translated(mut self, key: impl Into<String>) -> Self {
        self.translation_key = Some(key.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// What a reader sees: the placeholder of an empty text input, the text
    /// otherwise.
    pub fn visible_text(&self) -> &str {
        if self.kind == ElementKind::TextInput && self.text.is_empty() {
            &self.placeholder
        } else {
            &self.text
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Static chrome of the main page.
    pub fn main_page() -> Self {
        use ElementKind::{Button, Choice, Text, TextInput};

        Self::new(vec![
            Element::new("app-title", Text).translated("app_title"),
            Element::new("theme-input", TextInput).translated("search_placeholder"),
            Element::new("search-option-library", Choice).translated("search_option_library"),
            Element::new("search-option-mixed", Choice).translated("search_option_mixed"),
            Element::new("search-option-discovery", Choice).translated("search_option_discovery"),
            Element::new("search-button", Button).translated("search_button"),
            Element::new("example-prefix", Text).translated("example_prefix"),
            Element::new("results-title", Text).translated("results_title"),
            Element::new("collections-title", Text).translated("collections_title"),
            Element::new("settings-title", Text).translated("settings_title"),
            Element::new("root-folder-label", Text).translated("root_folder_label"),
            Element::new("quality-profile-label", Text).translated("quality_profile_label"),
            Element::new("plex-library-label", Text).translated("plex_library_label"),
            Element::new("language-label", Text).translated("language_label"),
            Element::new("model-label", Text).translated("model_label"),
            Element::new("settings-save", Button).translated("settings_save"),
            Element::new("version", Text).with_text(concat!("v", env!("CARGO_PKG_VERSION"))),
        ])
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }
}

/// Rewrite every tagged element from the table. Elements whose key has no
/// entry for `language` keep their current text. Returns how many elements
/// changed.
pub fn apply_translations(
    document: &mut Document,
    translations: &Translations,
    language: Language,
) -> usize {
    let mut updated = 0;

    for element in &mut document.elements {
        let Some(key) = element.translation_key.as_deref() else {
            continue;
        };
        let Some(text) = translations.lookup(language, key) else {
            tracing::trace!(key, %language, "No translation");
            continue;
        };

        let target = match element.kind {
            ElementKind::TextInput => &mut element.placeholder,
            _ => &mut element.text,
        };
        if *target != text {
            *target = text.to_string();
            updated += 1;
        }
    }

    updated
}
