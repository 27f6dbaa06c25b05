//! Rendered search results and their selection.
//!
//! The checked state lives on the rows of the list that was rendered last,
//! so whatever gets submitted for creation is always taken from it.

use marquee_core::{Candidate, ExternalList, Language, ListEntry, Translations};

/// Which search produced the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultOrigin {
    Theme,
    ExternalList { name: String, url: String },
}

/// What the create button submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateAction {
    /// Curated collection named after the search input
    Curated,
    /// Collection mirroring an external list
    External { name: String, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow {
    pub candidate: Candidate,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    origin: ResultOrigin,
    rows: Vec<CandidateRow>,
}

impl CandidateList {
    /// Rows are pre-checked when the movie is already in the library.
    pub fn new(origin: ResultOrigin, candidates: Vec<Candidate>) -> Self {
        let rows = candidates
            .into_iter()
            .map(|candidate| CandidateRow {
                checked: candidate.in_library,
                candidate,
            })
            .collect();
        Self { origin, rows }
    }

    pub fn from_theme(candidates: Vec<Candidate>) -> Self {
        Self::new(ResultOrigin::Theme, candidates)
    }

    pub fn from_external(list: ExternalList) -> Self {
        let origin = ResultOrigin::ExternalList {
            name: list.collection_name,
            url: list.letterboxd_url,
        };
        Self::new(origin, list.movies.into_iter().map(Candidate::from).collect())
    }

    pub fn rows(&self) -> &[CandidateRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True only for a non-empty list with every row checked.
    pub fn all_checked(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|row| row.checked)
    }

    /// Uncheck everything when all rows are checked, check everything
    /// otherwise.
    pub fn toggle_all(&mut self) {
        let check = !self.all_checked();
        for row in &mut self.rows {
            row.checked = check;
        }
    }

    /// Flip one row. Returns false when `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.checked = !row.checked;
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = &Candidate> {
        self.rows
            .iter()
            .filter(|row| row.checked)
            .map(|row| &row.candidate)
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Checked rows as `Title (Year)` strings.
    pub fn selected_titles(&self) -> Vec<String> {
        self.selected().map(Candidate::display_title).collect()
    }

    /// Checked rows with their library membership.
    pub fn selected_entries(&self) -> Vec<ListEntry> {
        self.selected().map(ListEntry::from).collect()
    }

    /// `None` for an empty list.
    pub fn create_action(&self) -> Option<CreateAction> {
        if self.rows.is_empty() {
            return None;
        }
        Some(match &self.origin {
            ResultOrigin::Theme => CreateAction::Curated,
            ResultOrigin::ExternalList { name, url } => CreateAction::External {
                name: name.clone(),
                url: url.clone(),
            },
        })
    }

    /// Localized view of the list.
    pub fn view(&self, translations: &Translations, language: Language) -> ResultsView {
        let text = |key: &str| translations.text(language, key);

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let tag = if row.candidate.in_library {
                    text("in_library")
                } else {
                    text("discovery")
                };
                let title = match self.origin {
                    ResultOrigin::Theme => row.candidate.display_title(),
                    ResultOrigin::ExternalList { .. } => row.candidate.title.clone(),
                };
                RowView {
                    label: format!("{} - {}", title, tag),
                    checked: row.checked,
                }
            })
            .collect();

        let heading = match &self.origin {
            ResultOrigin::Theme => None,
            ResultOrigin::ExternalList { name, .. } => Some(name.clone()),
        };

        let select_all_label = if self.all_checked() {
            text("deselect_all")
        } else {
            text("select_all")
        };

        ResultsView {
            heading,
            rows,
            empty_message: self.is_empty().then(|| text("no_movies_found")),
            select_all_label,
            create_label: self.create_action().map(|_| text("create_collection")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub label: String,
    pub checked: bool,
}

/// What the frontend draws for the results section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    /// List name, for external lists
    pub heading: Option<String>,
    pub rows: Vec<RowView>,
    pub empty_message: Option<String>,
    pub select_all_label: String,
    /// Present when there is something to create
    pub create_label: Option<String>,
}
