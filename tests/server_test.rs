mod common;

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use common::{MockState, mock_spotify, session, spawn, test_config};
use moodlist::server::app_router;

/// Starts the mock Web API and the form application in front of it.
async fn start() -> (String, Arc<Mutex<MockState>>) {
    let state = Arc::new(Mutex::new(MockState::default()));
    let api = spawn(mock_spotify(Arc::clone(&state))).await;
    let app = spawn(app_router(Arc::new(session(test_config(&api))))).await;
    (app, state)
}

#[tokio::test]
async fn test_form_page_lists_moods() {
    let (app, _) = start().await;

    let body = reqwest::get(format!("{}/", app)).await.unwrap().text().await.unwrap();

    for mood in ["Acoustic", "Danceable", "Instrumental", "Live", "Speechy", "Loud"] {
        assert!(body.contains(&format!(r#"<option value="{0}">{0}</option>"#, mood)));
    }
    assert!(body.contains(r#"name="num_songs""#));
    assert!(body.contains(r#"max="100""#));
}

#[tokio::test]
async fn test_submit_creates_playlist() {
    let (app, state) = start().await;

    let response = reqwest::Client::new()
        .post(format!("{}/", app))
        .form(&[("num_songs", "10"), ("playlist_type", "Acoustic")])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();

    assert!(body.contains(
        "Your playlist has been created with title Top Artist Acoustic Recommendations"
    ));
    assert!(body.contains("alert-success"));

    let state = state.lock().unwrap();
    assert_eq!(
        state.recommendation_queries[0].get("seed_artists").map(String::as_str),
        Some("artist1,artist2,artist3,artist4,artist5")
    );
    assert_eq!(
        state.recommendation_queries[0].get("target_acousticness").map(String::as_str),
        Some("1.0")
    );

    let (user_id, created) = &state.created[0];
    assert_eq!(user_id, "user-1");
    assert_eq!(created["name"], json!("Top Artist Acoustic Recommendations"));
    assert_eq!(
        created["description"],
        json!("Recommended Acoustic Tracks based on Top Artists")
    );
    assert_eq!(created["public"], json!(false));

    assert_eq!(state.added.len(), 1);
    assert_eq!(state.added[0].0, "playlist-1");
    assert_eq!(state.added[0].1.len(), 10);
}

#[tokio::test]
async fn test_invalid_submission_makes_no_api_calls() {
    let (app, state) = start().await;
    let client = reqwest::Client::new();

    for (fields, expected) in [
        (vec![("num_songs", "0"), ("playlist_type", "Live")], "between 1 and 100"),
        (vec![("num_songs", "101"), ("playlist_type", "Live")], "between 1 and 100"),
        (vec![("num_songs", "abc"), ("playlist_type", "Live")], "whole number"),
        (vec![("playlist_type", "Live")], "how many songs"),
        (vec![("num_songs", "5")], "choose a playlist type"),
        (vec![("num_songs", "5"), ("playlist_type", "Zzz")], "listed playlist types"),
    ] {
        let body = client
            .post(format!("{}/", app))
            .form(&fields)
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(body.contains(expected), "expected {:?} for {:?}", expected, fields);
        assert!(body.contains("alert-danger"));
    }

    let state = state.lock().unwrap();
    assert!(state.auth_headers.is_empty());
    assert!(state.created.is_empty());
}

#[tokio::test]
async fn test_repeated_field_uses_first_value() {
    let (app, state) = start().await;

    let response = reqwest::Client::new()
        .post(format!("{}/", app))
        .form(&[("num_songs", "5"), ("num_songs", "6"), ("playlist_type", "Live")])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();

    assert!(body.contains("Top Artist Live Recommendations"));
    let state = state.lock().unwrap();
    assert_eq!(state.added[0].1.len(), 5);
}

#[tokio::test]
async fn test_unreadable_body_renders_form_with_error() {
    let (app, state) = start().await;

    let response = reqwest::Client::new()
        .post(format!("{}/", app))
        .header("content-type", "application/json")
        .body(r#"{"num_songs": 5}"#)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();

    assert!(body.contains("alert-danger"));
    assert!(body.contains("Please submit the playlist form."));
    assert!(body.contains(r#"name="num_songs""#));
    assert!(state.lock().unwrap().auth_headers.is_empty());
}

#[tokio::test]
async fn test_unreachable_api_reports_step_message() {
    // nothing listens on the mock port once the listener is dropped
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let app = spawn(app_router(Arc::new(session(test_config(&dead))))).await;
    let body = reqwest::Client::new()
        .post(format!("{}/", app))
        .form(&[("num_songs", "10"), ("playlist_type", "Live")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Could not retrieve top artists"));
}

#[tokio::test]
async fn test_health() {
    let (app, _) = start().await;

    let json: Value = reqwest::get(format!("{}/health", app))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "moodlist");
}
