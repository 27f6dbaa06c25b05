//! Collection cards.

use marquee_core::{Collection, CollectionStatus, Language, Translations};

/// Origin icon of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    /// Built from search results
    Library,
    /// Mirrors an external list
    Letterboxd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub label: String,
    pub value: String,
    /// Status line of a collection still being filled
    pub spinner: bool,
}

impl CardLine {
    fn new(label: String, value: String) -> Self {
        Self {
            label,
            value,
            spinner: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionCard {
    pub icon: CardIcon,
    pub name: String,
    pub lines: Vec<CardLine>,
    pub delete_label: String,
}

impl CollectionCard {
    pub fn render(collection: &Collection, translations: &Translations, language: Language) -> Self {
        let text = |key: &str| translations.text(language, key);

        let (icon, lines) = match collection {
            Collection::External(external) => {
                let last_updated = match (external.last_updated_at(), &external.last_updated) {
                    (Some(at), _) => at.format("%Y-%m-%d %H:%M").to_string(),
                    (None, Some(raw)) => raw.clone(),
                    (None, None) => text("never"),
                };
                (
                    CardIcon::Letterboxd,
                    vec![
                        CardLine::new(text("url"), external.url.clone()),
                        CardLine::new(text("movies_count"), external.movies.len().to_string()),
                        CardLine::new(text("last_updated"), last_updated),
                    ],
                )
            }
            Collection::Curated(curated) => {
                let status = match &curated.status {
                    CollectionStatus::Unknown(raw) if !raw.is_empty() => {
                        format!("{} ({})", text("unknown_status"), raw)
                    }
                    other => text(other.translation_key()),
                };
                (
                    CardIcon::Library,
                    vec![
                        CardLine::new(
                            text("movies_added"),
                            format!("{}/{}", curated.added_count, curated.total_count),
                        ),
                        CardLine {
                            spinner: curated.status.shows_spinner(),
                            ..CardLine::new(text("status"), status)
                        },
                    ],
                )
            }
        };

        Self {
            icon,
            name: collection.name().to_string(),
            lines,
            delete_label: text("delete_collection"),
        }
    }
}

/// One card per collection, in snapshot order.
pub fn render_cards(
    collections: &[Collection],
    translations: &Translations,
    language: Language,
) -> Vec<CollectionCard> {
    collections
        .iter()
        .map(|collection| CollectionCard::render(collection, translations, language))
        .collect()
}
