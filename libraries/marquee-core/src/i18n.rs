//! Translation table.
//!
//! Maps language → key → localized string, plus the rotating search
//! examples of each language. A table is bundled with the crate; a
//! replacement can be loaded from a JSON file of the same shape:
//!
//! ```json
//! { "english": { "strings": { "loading": "Loading…" }, "examples": ["…"] } }
//! ```

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const BUNDLED: &str = include_str!("../assets/translations.json");

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
    /// Novelty mode; also switches the pirate theme on
    Pirate,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::French,
        Language::Spanish,
        Language::Pirate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Pirate => "pirate",
        }
    }

    pub fn is_pirate(&self) -> bool {
        matches!(self, Language::Pirate)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownLanguage(s.to_string()))
    }
}

/// Strings and examples of one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePack {
    #[serde(default)]
    pub strings: BTreeMap<String, String>,

    #[serde(default)]
    pub examples: Vec<String>,
}

impl LanguagePack {
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }
}

/// Language → key → localized string
#[derive(Debug, Clone, Default)]
pub struct Translations {
    packs: HashMap<Language, LanguagePack>,
}

impl Translations {
    /// The table shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Bundled translation table is invalid");
            Self::default()
        })
    }

    /// Parse a table. Every top-level key must name a supported language.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, LanguagePack> = serde_json::from_str(json)?;
        let packs = raw
            .into_iter()
            .map(|(name, pack)| name.parse::<Language>().map(|language| (language, pack)))
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Self { packs })
    }

    /// Read a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let translations = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), languages = translations.packs.len(), "Loaded translations");
        Ok(translations)
    }

    /// Add or replace the pack of a language.
    pub fn with_pack(mut self, language: Language, pack: LanguagePack) -> Self {
        self.packs.insert(language, pack);
        self
    }

    /// Exact lookup, no fallback language.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.packs
            .get(&language)
            .and_then(|pack| pack.strings.get(key))
            .map(String::as_str)
    }

    /// Lookup for messages: the key itself when the string is missing, so a
    /// message is never blank.
    pub fn text(&self, language: Language, key: &str) -> String {
        self.lookup(language, key)
            .map_or_else(|| key.to_string(), str::to_string)
    }

    /// Rotating search examples of a language (possibly empty).
    pub fn examples(&self, language: Language) -> &[String] {
        self.packs
            .get(&language)
            .map(|pack| pack.examples.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table_covers_every_language() {
        let translations = Translations::bundled();
        for language in Language::ALL {
            assert!(
                translations.lookup(language, "loading").is_some(),
                "{} has no loading string",
                language
            );
            assert!(
                !translations.examples(language).is_empty(),
                "{} has no examples",
                language
            );
        }
    }

    #[test]
    fn test_bundled_languages_share_keys() {
        let translations = Translations::bundled();
        let english: Vec<&String> = translations.packs[&Language::English]
            .strings
            .keys()
            .collect();

        for language in Language::ALL {
            let keys: Vec<&String> = translations.packs[&language].strings.keys().collect();
            assert_eq!(keys, english, "{} keys differ from english", language);
        }
    }

    #[test]
    fn test_lookup_has_no_fallback() {
        let translations = Translations::default().with_pack(
            Language::English,
            LanguagePack::default().with_string("loading", "Loading…"),
        );

        assert_eq!(
            translations.lookup(Language::English, "loading"),
            Some("Loading…")
        );
        assert_eq!(translations.lookup(Language::French, "loading"), None);
        assert_eq!(translations.text(Language::French, "loading"), "loading");
    }

    #[test]
    fn test_unknown_language_key_is_rejected() {
        let result = Translations::from_json(r#"{"klingon": {"strings": {}}}"#);
        assert!(matches!(result, Err(CoreError::UnknownLanguage(_))));
    }

    #[test]
    fn test_malformed_table_is_rejected() {
        let result = Translations::from_json("[1, 2, 3]");
        assert!(matches!(result, Err(CoreError::Translations(_))));
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("Pirate".parse::<Language>().unwrap(), Language::Pirate);
        assert_eq!(" french ".parse::<Language>().unwrap(), Language::French);
        assert!("".parse::<Language>().is_err());
        assert!(Language::Pirate.is_pirate());
        assert!(!Language::English.is_pirate());
    }
}
