//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chargen_dialog::DialogManager;
use chargen_preferences::PreferenceStore;
use chargen_test_support::{CannedGenerator, InMemoryPreferenceStore, MockRng};
use http_body_util::BodyExt;
use tower::ServiceExt;

use chargen_api::routes;
use chargen_api::state::AppState;

/// Canned generator output used across all integration tests.
pub fn canned_generator() -> CannedGenerator {
    CannedGenerator::new(
        "Shit, this one's good. It's a",
        "chaotic evil elf bard who cries during bar fights",
        "Another classic.",
    )
}

/// Build the full app router with an in-memory store, canned generator,
/// and deterministic RNG. Uses the same route structure as `main.rs`.
pub fn build_test_app(profanity_mode: bool) -> Router {
    build_test_app_with_store(Arc::new(InMemoryPreferenceStore::new()), profanity_mode)
}

/// Build the full app router over a caller-owned preference store, for
/// tests that assert on persisted state.
pub fn build_test_app_with_store(
    store: Arc<dyn PreferenceStore>,
    profanity_mode: bool,
) -> Router {
    let manager = DialogManager::new(
        store,
        Arc::new(canned_generator()),
        Arc::new(Mutex::new(MockRng)),
        profanity_mode,
    );
    let app_state = AppState::new(Arc::new(manager));

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/dialog", routes::dialog::router())
        .with_state(app_state)
}

/// Send a POST request with a JSON body. Returns the status and the parsed
/// body, or `None` for bodyless responses such as 204.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, Option<serde_json::Value>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&body_bytes).unwrap())
    };

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
