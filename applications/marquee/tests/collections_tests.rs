//! Collection creation, listing and deletion against a mock backend.

mod common;

use common::*;
use marquee::{ActionOutcome, App, Intervals};
use marquee_client::{MarqueeClient, ServerConfig};
use marquee_core::{Language, Translations};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_status(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/collections_status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_search(server: &MockServer, movies: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/search_movies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "movies": movies })))
        .mount(server)
        .await;
}

// =============================================================================
// Curated Collections
// =============================================================================

mod curated {
    use super::*;

    #[tokio::test]
    async fn test_create_submits_checked_titles_and_refreshes() {
        let mock_server = MockServer::start().await;

        mount_search(
            &mock_server,
            serde_json::json!([
                {"title": "Airplane!", "year": 1980, "in_library": true},
                {"title": "Step Brothers", "year": 2008, "in_library": false},
                {"title": "Hot Fuzz", "year": 2007, "in_library": true}
            ]),
        )
        .await;

        Mock::given(method("POST"))
            .and(path("/create_collection"))
            .and(body_json(serde_json::json!({
                "collection_name": "comedy",
                "selected_movies": ["Airplane! (1980)", "Hot Fuzz (2007)"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Collection created"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        mount_status(
            &mock_server,
            serde_json::json!([{
                "name": "comedy",
                "movies": ["Airplane! (1980)", "Hot Fuzz (2007)"],
                "status": "queued",
                "added_count": 0,
                "total_count": 2
            }]),
        )
        .await;

        let frontend = RecordingFrontend::new();
        let app = app_for(&mock_server, &frontend);
        let session = app.session();

        session.search().search("comedy 5").await;
        let outcome = session.collections().create_from_results().await;

        assert_eq!(outcome, ActionOutcome::Done);
        assert_eq!(frontend.alerts(), vec![english("collection_created")]);

        let busy: Vec<bool> = frontend
            .events()
            .into_iter()
            .filter_map(|event| match event {
                Event::CreateBusy(busy) => Some(busy),
                _ => None,
            })
            .collect();
        assert_eq!(busy, vec![true, false]);
        assert!(!session.snapshot().await.create_busy);

        let renders = frontend.collection_renders();
        assert_eq!(renders.len(), 1);
        assert_eq!(renders[0][0].name, "comedy");
        assert_eq!(session.snapshot().await.collections.len(), 1);
    }

    #[tokio::test]
    async fn test_numeric_only_input_has_no_collection_name() {
        let mock_server = MockServer::start().await;

        mount_search(
            &mock_server,
            serde_json::json!([{"title": "Heat", "year": 1995, "in_library": true}]),
        )
        .await;

        Mock::given(method("POST"))
            .and(path("/create_collection"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let frontend = RecordingFrontend::new();
        let app = app_for(&mock_server, &frontend);
        let session = app.session();

        session.search().search("42").await;
        let outcome = session.collections().create_from_results().await;

        assert_eq!(outcome, ActionOutcome::Rejected);
        assert_eq!(frontend.alerts(), vec![english("collection_name_required")]);
    }

    #[tokio::test]
    async fn test_nothing_checked_is_rejected() {
        let mock_server = MockServer::start().await;

        mount_search(
            &mock_server,
            serde_json::json!([{"title": "Thief", "year": 1981, "in_library": false}]),
        )
        .await;

        Mock::given(method("POST"))
            .and(path("/create_collection"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let frontend = RecordingFrontend::new();
        let app = app_for(&mock_server, &frontend);
        let session = app.session();

        session.search().search("neo noir").await;
        let outcome = session.collections().create_from_results().await;

        assert_eq!(outcome, ActionOutcome::Rejected);
        assert_eq!(frontend.alerts(), vec![english("no_movies_selected")]);
    }

    #[tokio::test]
    async fn test_create_failure_alerts_without_refresh() {
        let mock_server = MockServer::start().await;

        mount_search(
            &mock_server,
            serde_json::json!([{"title": "Heat", "year": 1995, "in_library": true}]),
        )
        .await;

        Mock::given(method("POST"))
            .and(path("/create_collection"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": "Radarr unreachable"
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/collections_status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let frontend = RecordingFrontend::new();
        let app = app_for(&mock_server, &frontend);
        let session = app.session();

        session.search().search("heists").await;
        let outcome = session.collections().create_from_results().await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(frontend.alerts(), vec![english("collection_creation_error")]);
        assert!(!session.snapshot().await.create_busy);
    }
}

// =============================================================================
// List Collections
// =============================================================================

mod list_collections {
    use super::*;

    const LIST_URL: &str = "https://letterboxd.com/someone/list/space/";

    #[tokio::test]
    async fn test_checked_rows_keep_their_membership() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/process_letterboxd_list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "collection_name": "Space",
                "movies": [
                    {"title": "Moon", "in_plex": true},
                    {"title": "Sunshine", "in_plex": false},
                    {"title": "Solaris", "in_plex": true}
                ],
                "letterboxd_url": LIST_URL
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/create_letterboxd_collection"))
            .and(body_json(serde_json::json!({
                "collection_name": "Space",
                "selected_movies": [
                    {"title": "Moon", "in_plex": true},
                    {"title": "Sunshine", "in_plex": false},
                    {"title": "Solaris", "in_plex": true}
                ],
                "letterboxd_url": LIST_URL
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "ok"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        mount_status(
            &mock_server,
            serde_json::json!([{
                "name": "Space",
                "is_letterboxd": true,
                "url": LIST_URL,
                "movies": ["Moon", "Sunshine", "Solaris"],
                "last_updated": "2024-03-01T10:15:00"
            }]),
        )
        .await;

        let frontend = RecordingFrontend::new();
        let app = app_for(&mock_server, &frontend);
        let session = app.session();

        session.search().search(LIST_URL).await;
        // Sunshine is unchecked by default; check it so every row is sent
        assert!(session.search().toggle(1).await);
        frontend.clear();

        let outcome = session.collections().create_from_results().await;

        assert_eq!(outcome, ActionOutcome::Done);
        assert_eq!(frontend.alerts(), vec![english("letterboxd_collection_created")]);
        assert_eq!(frontend.loading_events(), vec![true, false]);
        assert_eq!(frontend.collection_renders().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_list_cannot_be_created() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/process_letterboxd_list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "collection_name": "Nothing",
                "movies": [],
                "letterboxd_url": LIST_URL
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/create_letterboxd_collection"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let frontend = RecordingFrontend::new();
        let app = app_for(&mock_server, &frontend);
        let session = app.session();

        session.search().search(LIST_URL).await;
        let view = frontend.last_results().unwrap();
        assert_eq!(view.empty_message, Some(english("no_movies_found")));
        assert!(view.create_label.is_none());

        let outcome = session.collections().create_from_results().await;
        assert_eq!(outcome, ActionOutcome::Rejected);
    }
}

// =============================================================================
// Deletion
// =============================================================================

mod deletion {
    use super::*;

    #[tokio::test]
    async fn test_server_error_message_is_shown() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/delete_collection"))
            .and(body_json(serde_json::json!({"name": "Horror Night"})))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": "locked"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/collections_status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let frontend = RecordingFrontend::new();
        let app = app_for(&mock_server, &frontend);

        let outcome = app.session().collections().delete("Horror Night").await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(
            frontend.alerts(),
            vec![format!("{}: locked", english("delete_collection_error"))]
        );
    }

    #[tokio::test]
    async fn test_declined_confirmation_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/delete_collection"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let frontend = RecordingFrontend::declining();
        let app = app_for(&mock_server, &frontend);

        let outcome = app.session().collections().delete("Horror Night").await;

        assert_eq!(outcome, ActionOutcome::Declined);
        assert_eq!(
            frontend.events(),
            vec![Event::Confirm(english("confirm_delete_collection"))]
        );
    }

    #[tokio::test]
    async fn test_successful_delete_refreshes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/delete_collection"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "deleted"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/collections_status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let frontend = RecordingFrontend::new();
        let app = app_for(&mock_server, &frontend);

        let outcome = app.session().collections().delete("Horror Night").await;

        assert_eq!(outcome, ActionOutcome::Done);
        assert_eq!(frontend.alerts(), vec![english("collection_deleted")]);
        assert_eq!(frontend.collection_renders(), vec![Vec::new()]);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_network_error() {
        let frontend = RecordingFrontend::new();
        let config = ServerConfig::new("http://127.0.0.1:1").with_timeout(Duration::from_secs(2));
        let app = App::with_api(
            Arc::new(MarqueeClient::new(config).unwrap()),
            frontend.clone(),
            Translations::bundled(),
            Language::English,
            Intervals::default(),
        );

        let outcome = app.session().collections().delete("Horror Night").await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(
            frontend.alerts(),
            vec![english("delete_collection_network_error")]
        );
    }

    #[tokio::test]
    async fn test_unsent_request_is_an_unknown_error() {
        let api = ScriptedApi::new(Vec::new());
        let frontend = RecordingFrontend::new();
        let app = App::with_api(
            api.clone(),
            frontend.clone(),
            Translations::bundled(),
            Language::English,
            Intervals::default(),
        );

        let outcome = app.session().collections().delete("Horror Night").await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(
            frontend.alerts(),
            vec![english("delete_collection_unknown_error")]
        );
        assert_eq!(api.status_calls(), 0);
    }
}

// =============================================================================
// Listing
// =============================================================================

mod listing {
    use super::*;

    #[tokio::test]
    async fn test_refresh_renders_both_kinds() {
        let mock_server = MockServer::start().await;

        mount_status(
            &mock_server,
            serde_json::json!([
                {
                    "name": "Heists",
                    "movies": ["Heat (1995)", "Thief (1981)"],
                    "status": "En cours",
                    "added_count": 1,
                    "total_count": 2
                },
                {
                    "name": "Space",
                    "is_letterboxd": true,
                    "url": "https://letterboxd.com/someone/list/space/",
                    "movies": ["Moon"]
                }
            ]),
        )
        .await;

        let frontend = RecordingFrontend::new();
        let app = app_for(&mock_server, &frontend);

        assert!(app.session().collections().refresh().await);

        let renders = frontend.collection_renders();
        assert_eq!(renders.len(), 1);
        let names: Vec<&str> = renders[0].iter().map(|card| card.name.as_str()).collect();
        assert_eq!(names, vec!["Heists", "Space"]);
        assert!(renders[0][0].lines.iter().any(|line| line.spinner));
        assert!(renders[0][1].lines.iter().all(|line| !line.spinner));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/collections_status"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let frontend = RecordingFrontend::new();
        let app = app_for(&mock_server, &frontend);

        assert!(!app.session().collections().refresh().await);
        assert!(frontend.collection_renders().is_empty());
        assert!(frontend.alerts().is_empty());
    }
}
