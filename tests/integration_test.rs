//! Integration tests for the stars-viewer HTTP surface.
//!
//! Each test writes a small data file, loads it through the same path the
//! binary uses, and drives a real server bound to an ephemeral port.

use std::io::Write;
use std::path::PathBuf;

use reqwest::StatusCode;
use tokio::net::TcpListener;

use stars_viewer::api;
use stars_viewer::config::Config;
use stars_viewer::errors::StoreError;
use stars_viewer::render::{Templates, INDEX_TEMPLATE};
use stars_viewer::state::AppState;
use stars_viewer::store::RepoStore;

/// Helper: one exported record as JSON.
fn record(name: &str, language: &str, stars: u64, starred_at: &str, description: &str) -> String {
    format!(
        r#"{{
            "name_with_owner": "{name}",
            "name": "{short}",
            "description": "{description}",
            "language": "{language}",
            "url": "https://github.com/{name}",
            "stargazer_count": {stars},
            "fork_count": 3,
            "pushed_at": "2024-02-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z",
            "starred_at": "{starred_at}",
            "is_private": false,
            "topics": ["cli"]
        }}"#,
        short = name.rsplit('/').next().unwrap(),
    )
}

/// Helper: a data file shaped like a real export.
fn sample_export() -> tempfile::NamedTempFile {
    let data = format!(
        "[{}]",
        [
            record("alice/xylo", "Go", 10, "2024-01-10T00:00:00Z", "music toolkit"),
            record("bob/yarn", "Go", 50, "2024-01-20T00:00:00Z", "package manager"),
            record("carol/zebra", "Rust", 5, "2024-01-01T00:00:00Z", "striped terminal"),
            record("dave/quux", "", 7, "2024-01-05T00:00:00Z", "no language here"),
        ]
        .join(",")
    );
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(data.as_bytes()).unwrap();
    file
}

struct TestApp {
    address: String,
    client: reqwest::Client,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Load the sample export exactly the way the binary does.
    async fn spawn() -> Self {
        let data = sample_export();
        let config = Config {
            addr: "127.0.0.1:0".to_string(),
            data_file: data.path().to_path_buf(),
        };
        let state = AppState::new(&config).unwrap();
        Self::spawn_with_state(state).await
    }

    async fn spawn_with_state(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        tokio::spawn(async move {
            axum::serve(listener, api::router(state))
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            address,
            client: reqwest::Client::new(),
            shutdown_tx: Some(shutdown_tx),
        }
    }

    async fn get(&self, path: &str) -> (StatusCode, Option<String>, String) {
        let resp = self
            .client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await.unwrap();
        (status, content_type, body)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Positions of repo names in a rendered page, in document order.
fn order_of(body: &str, names: &[&str]) -> Vec<usize> {
    names
        .iter()
        .map(|n| body.find(n).unwrap_or_else(|| panic!("{n} missing from body")))
        .collect()
}

fn is_ascending(positions: &[usize]) -> bool {
    positions.windows(2).all(|w| w[0] < w[1])
}

#[tokio::test]
async fn test_index_renders_languages_and_starred_order() {
    let app = TestApp::spawn().await;
    let (status, content_type, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("<html"));
    assert!(body.contains(r#"<option value="Go">Go</option>"#));
    assert!(body.contains(r#"<option value="Rust">Rust</option>"#));
    assert!(body.contains("4 repositories"));

    // Most recently starred first
    let positions = order_of(&body, &["yarn", "xylo", "quux", "zebra"]);
    assert!(is_ascending(&positions), "{positions:?}");
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_index() {
    let app = TestApp::spawn().await;
    let (status, _, body) = app.get("/some/other/page").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html"));
}

#[tokio::test]
async fn test_search_language_filter_and_star_sort() {
    let app = TestApp::spawn().await;
    let (status, _, body) = app.get("/search?lang=Go&sort=stars").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<html"));
    assert!(body.contains("2 repositories"));
    assert!(!body.contains("zebra"));
    assert!(!body.contains("quux"));
    let positions = order_of(&body, &["yarn", "xylo"]);
    assert!(is_ascending(&positions));
}

#[tokio::test]
async fn test_search_name_sort() {
    let app = TestApp::spawn().await;
    let (_, _, body) = app.get("/search?sort=name").await;
    let positions = order_of(&body, &["xylo", "yarn", "zebra", "quux"]);
    // alice < bob < carol < dave
    assert!(is_ascending(&positions), "{positions:?}");
}

#[tokio::test]
async fn test_search_fuzzy_query() {
    let app = TestApp::spawn().await;
    let (status, _, body) = app.get("/search?q=strpd&sort=stars").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1 repository"));
    assert!(body.contains("zebra"));
    assert!(!body.contains("yarn"));
}

#[tokio::test]
async fn test_search_without_params_equals_starred_sort() {
    let app = TestApp::spawn().await;
    let (_, _, bare) = app.get("/search").await;
    let (_, _, starred) = app.get("/search?sort=starred").await;
    let (_, _, bogus) = app.get("/search?sort=bogus").await;
    assert_eq!(
        order_of(&bare, &["yarn", "xylo", "quux", "zebra"]),
        order_of(&starred, &["yarn", "xylo", "quux", "zebra"])
    );
    assert_eq!(
        order_of(&bogus, &["yarn", "xylo", "quux", "zebra"]),
        order_of(&starred, &["yarn", "xylo", "quux", "zebra"])
    );
}

#[tokio::test]
async fn test_search_repeated_params_keep_first_value() {
    let app = TestApp::spawn().await;

    let (status, _, body) = app.get("/search?q=strpd&q=yarn").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1 repository"));
    assert!(body.contains("zebra"));

    let (status, _, body) = app
        .get("/search?lang=Go&lang=Rust&sort=name&sort=stars")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2 repositories"));
    assert!(!body.contains("zebra"));
    let positions = order_of(&body, &["xylo", "yarn"]);
    assert!(is_ascending(&positions));
}

#[tokio::test]
async fn test_search_ignores_unknown_params() {
    let app = TestApp::spawn().await;
    let (status, _, body) = app.get("/search?page=3&lang=Rust").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1 repository"));
    assert!(body.contains("zebra"));
}

#[tokio::test]
async fn test_fallback_serves_page_for_any_method() {
    let app = TestApp::spawn().await;
    for path in ["/", "/some/other/page"] {
        let resp = app
            .client
            .post(format!("{}{}", app.address, path))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
        assert!(resp.text().await.unwrap().contains("<html"));
    }
}

#[tokio::test]
async fn test_render_failure_is_500_for_that_request_only() {
    // Only the page template: the results fragment cannot render
    let templates =
        Templates::from_sources(&[(INDEX_TEMPLATE, "<html>{{ languages|length }}</html>")])
            .map_err(|e| e.to_string())
            .unwrap();
    let store = RepoStore::load(sample_export().path()).unwrap();
    let app = TestApp::spawn_with_state(AppState::from_parts(store, templates)).await;

    let (status, content_type, body) = app.get("/search?q=yarn").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, "failed to render results.html");

    // The server keeps answering other requests
    let (status, _, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<html>2</html>");
}

#[tokio::test]
async fn test_search_no_matches() {
    let app = TestApp::spawn().await;
    let (status, _, body) = app.get("/search?q=zzzzzz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("0 repositories"));
    assert!(body.contains("No repositories match"));
}

#[tokio::test]
async fn test_favicon() {
    let app = TestApp::spawn().await;
    let resp = app
        .client
        .get(format!("{}/favicon.ico", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
        "image/x-icon"
    );
    let bytes = resp.bytes().await.unwrap();
    // ICO header: reserved 0, type 1
    assert_eq!(&bytes[..4], &[0, 0, 1, 0]);
}

#[test]
fn test_startup_fails_on_missing_data_file() {
    let config = Config {
        data_file: PathBuf::from("/definitely/not/here/stars.json"),
        ..Config::default()
    };
    let err = AppState::new(&config).err().unwrap();
    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::Load { .. })
    ));
}

#[test]
fn test_startup_fails_on_malformed_data_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[{"name_with_owner": 42}]"#).unwrap();
    let config = Config {
        data_file: file.path().to_path_buf(),
        ..Config::default()
    };
    let err = AppState::new(&config).err().unwrap();
    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::Parse { .. })
    ));
}

#[test]
fn test_store_shared_across_requests_is_unchanged() {
    let file = sample_export();
    let store = RepoStore::load(file.path()).unwrap();
    let before: Vec<String> = store.repos().iter().map(|r| r.name_with_owner.clone()).collect();
    let _ = store.search("", "", "name");
    let _ = store.search("yarn", "Go", "stars");
    let after: Vec<String> = store.repos().iter().map(|r| r.name_with_owner.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(store.languages(), ["Go", "Rust"]);
}
