/// Common test utilities: a frontend that records every call and a scripted
/// backend for timer tests
use async_trait::async_trait;
use marquee::ui::{CollectionCard, Document, ResultsView};
use marquee::{App, FadePhase, Frontend, Intervals, SettingsForm};
use marquee_client::{
    Ack, ClientError, CuratorApi, MarqueeClient, ServerConfig, ThemeSearchRequest,
};
use marquee_core::{
    Candidate, CollectionRecord, ExternalList, Language, ListEntry, Settings, SettingsResponse,
    Translations,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::MockServer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Alert(String),
    Confirm(String),
    Loading(bool),
    CreateBusy(bool),
    PirateMode(bool),
    Document(Document),
    Settings(SettingsForm),
    CloseSettings,
    Results(ResultsView),
    Collections(Vec<CollectionCard>),
    Example(FadePhase, String),
}

/// Frontend double that records every call
pub struct RecordingFrontend {
    events: Mutex<Vec<Event>>,
    confirm_answer: bool,
}

impl RecordingFrontend {
    /// Answers every confirmation with yes.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: true,
        })
    }

    /// Answers every confirmation with no.
    pub fn declining() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: false,
        })
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn last_results(&self) -> Option<ResultsView> {
        self.events().into_iter().rev().find_map(|event| match event {
            Event::Results(view) => Some(view),
            _ => None,
        })
    }

    pub fn collection_renders(&self) -> Vec<Vec<CollectionCard>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Collections(cards) => Some(cards),
                _ => None,
            })
            .collect()
    }

    pub fn example_phases(&self) -> Vec<FadePhase> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Example(phase, _) => Some(phase),
                _ => None,
            })
            .collect()
    }

    pub fn loading_events(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Loading(visible) => Some(visible),
                _ => None,
            })
            .collect()
    }
}

impl Frontend for RecordingFrontend {
    fn alert(&self, message: &str) {
        self.record(Event::Alert(message.to_string()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.record(Event::Confirm(message.to_string()));
        self.confirm_answer
    }

    fn set_loading(&self, visible: bool, _text: &str) {
        self.record(Event::Loading(visible));
    }

    fn set_create_busy(&self, busy: bool) {
        self.record(Event::CreateBusy(busy));
    }

    fn set_pirate_mode(&self, enabled: bool) {
        self.record(Event::PirateMode(enabled));
    }

    fn render_document(&self, document: &Document) {
        self.record(Event::Document(document.clone()));
    }

    fn render_settings(&self, form: &SettingsForm) {
        self.record(Event::Settings(form.clone()));
    }

    fn close_settings(&self) {
        self.record(Event::CloseSettings);
    }

    fn render_results(&self, view: &ResultsView) {
        self.record(Event::Results(view.clone()));
    }

    fn render_collections(&self, cards: &[CollectionCard]) {
        self.record(Event::Collections(cards.to_vec()));
    }

    fn show_example(&self, phase: FadePhase, text: &str) {
        self.record(Event::Example(phase, text.to_string()));
    }
}

/// App talking to a wiremock server, English, bundled translations.
pub fn app_for(server: &MockServer, frontend: &Arc<RecordingFrontend>) -> App {
    let client = MarqueeClient::new(ServerConfig::new(server.uri())).unwrap();
    App::with_api(
        Arc::new(client),
        frontend.clone(),
        Translations::bundled(),
        Language::English,
        Intervals::default(),
    )
}

pub fn english(key: &str) -> String {
    Translations::bundled().text(Language::English, key)
}

pub fn curated_record(name: &str) -> CollectionRecord {
    CollectionRecord {
        name: name.to_string(),
        movies: Some(vec!["Heat (1995)".to_string()]),
        status: Some("queued".to_string()),
        added_count: Some(0),
        total_count: Some(1),
        ..Default::default()
    }
}

/// In-process backend; collection status answers follow a script
pub struct ScriptedApi {
    settings: SettingsResponse,
    /// Delay and answer of each status call; the last entry repeats
    status_script: Vec<(Duration, Vec<CollectionRecord>)>,
    status_calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn new(status_script: Vec<(Duration, Vec<CollectionRecord>)>) -> Arc<Self> {
        Arc::new(Self {
            settings: SettingsResponse {
                current_settings: Settings {
                    language: "english".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            },
            status_script,
            status_calls: AtomicUsize::new(0),
        })
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

fn unscripted<T>() -> marquee_client::Result<T> {
    Err(ClientError::NotSent("not scripted".to_string()))
}

#[async_trait]
impl CuratorApi for ScriptedApi {
    async fn get_settings(&self) -> marquee_client::Result<SettingsResponse> {
        Ok(self.settings.clone())
    }

    async fn save_settings(&self, _settings: &Settings) -> marquee_client::Result<Ack> {
        Ok(Ack::default())
    }

    async fn search_movies(
        &self,
        _request: &ThemeSearchRequest,
    ) -> marquee_client::Result<Vec<Candidate>> {
        unscripted()
    }

    async fn process_list(&self, _url: &str) -> marquee_client::Result<ExternalList> {
        unscripted()
    }

    async fn create_collection(
        &self,
        _name: &str,
        _selected_movies: &[String],
    ) -> marquee_client::Result<Ack> {
        unscripted()
    }

    async fn create_list_collection(
        &self,
        _name: &str,
        _selected_movies: &[ListEntry],
        _list_url: &str,
    ) -> marquee_client::Result<Ack> {
        unscripted()
    }

    async fn collections_status(&self) -> marquee_client::Result<Vec<CollectionRecord>> {
        let call = self.status_calls.fetch_add(1, Ordering::SeqCst);
        let Some((delay, records)) = self
            .status_script
            .get(call)
            .or_else(|| self.status_script.last())
            .cloned()
        else {
            return Ok(Vec::new());
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(records)
    }

    async fn delete_collection(&self, _name: &str) -> marquee_client::Result<Ack> {
        unscripted()
    }

    async fn clear_cache(&self) -> marquee_client::Result<Ack> {
        Ok(Ack::default())
    }

    async fn test_model_server(&self) -> marquee_client::Result<serde_json::Value> {
        unscripted()
    }
}
