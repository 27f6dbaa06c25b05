//! Line-oriented frontend for the `marquee` binary.

use crate::frontend::{FadePhase, Frontend};
use crate::state::SettingsForm;
use crate::ui::{CardIcon, CollectionCard, Document, ResultsView};
use dialoguer::Confirm;
use marquee_core::SelectOption;
use std::sync::Mutex;
use tokio::runtime::{Handle, RuntimeFlavor};

pub struct TerminalFrontend {
    assume_yes: bool,
    show_examples: bool,
    last_cards: Mutex<Vec<CollectionCard>>,
}

impl TerminalFrontend {
    /// `assume_yes` answers every confirmation with yes.
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            show_examples: false,
            last_cards: Mutex::new(Vec::new()),
        }
    }

    /// Print rotating search examples (off by default).
    pub fn with_examples(mut self, show: bool) -> Self {
        self.show_examples = show;
        self
    }
}

impl Frontend for TerminalFrontend {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let prompt = || {
            Confirm::new()
                .with_prompt(message)
                .default(false)
                .interact()
                .unwrap_or(false)
        };

        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(prompt)
            }
            _ => prompt(),
        }
    }

    fn set_loading(&self, visible: bool, text: &str) {
        if visible {
            println!("{}", text);
        }
    }

    fn set_create_busy(&self, busy: bool) {
        if busy {
            println!("...");
        }
    }

    fn set_pirate_mode(&self, enabled: bool) {
        if enabled {
            println!("🏴‍☠️");
        }
    }

    fn render_document(&self, document: &Document) {
        if let Some(title) = document.element("app-title") {
            println!("== {} ==", title.visible_text());
        }
    }

    fn render_settings(&self, form: &SettingsForm) {
        let label = |options: &[SelectOption], value: &str| {
            options
                .iter()
                .find(|option| option.value == value)
                .map_or_else(|| value.to_string(), |option| option.label.clone())
        };

        let values = &form.values;
        println!("root_folder     = {}", label(&form.root_folders, &values.root_folder));
        println!("quality_profile = {}", label(&form.quality_profiles, &values.quality_profile));
        println!("plex_library    = {}", label(&form.plex_libraries, &values.plex_library));
        println!("language        = {}", values.language);
        println!("model           = {}", label(&form.models, &values.model));
    }

    fn close_settings(&self) {}

    fn render_results(&self, view: &ResultsView) {
        if let Some(heading) = &view.heading {
            println!("## {}", heading);
        }
        if let Some(message) = &view.empty_message {
            println!("{}", message);
        }
        for (index, row) in view.rows.iter().enumerate() {
            let mark = if row.checked { 'x' } else { ' ' };
            println!("{:>3}. [{}] {}", index + 1, mark, row.label);
        }
    }

    fn render_collections(&self, cards: &[CollectionCard]) {
        // Polling re-renders the same snapshot every few seconds
        if let Ok(mut last) = self.last_cards.lock() {
            if last.as_slice() == cards {
                return;
            }
            *last = cards.to_vec();
        }

        for card in cards {
            let icon = match card.icon {
                CardIcon::Library => "[library]",
                CardIcon::Letterboxd => "[letterboxd]",
            };
            println!("{} {}", icon, card.name);
            for line in &card.lines {
                let spinner = if line.spinner { " ⟳" } else { "" };
                println!("    {}: {}{}", line.label, line.value, spinner);
            }
        }
    }

    fn show_example(&self, phase: FadePhase, text: &str) {
        if self.show_examples && matches!(phase, FadePhase::Shown | FadePhase::FadeIn) {
            println!("» {}", text);
        }
    }
}
