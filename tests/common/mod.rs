#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::{Value, json};

use moodlist::{
    config::{Config, DEFAULT_AUTH_URL, DEFAULT_SCOPE},
    management::TokenManager,
    spotify::SpotifySession,
    types::Token,
};

pub const TEST_TOKEN: &str = "test-token";

/// What the mock Web API saw.
#[derive(Debug, Default)]
pub struct MockState {
    pub auth_headers: Vec<String>,
    pub top_artist_queries: Vec<HashMap<String, String>>,
    pub recommendation_queries: Vec<HashMap<String, String>>,
    pub created: Vec<(String, Value)>,
    pub added: Vec<(String, Vec<String>)>,
}

pub type Shared = Arc<Mutex<MockState>>;

fn record_auth(state: &Shared, headers: &HeaderMap) {
    let value = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.lock().unwrap().auth_headers.push(value);
}

async fn top_artists(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    record_auth(&state, &headers);
    state.lock().unwrap().top_artist_queries.push(query);

    // more than requested, the client has to cap
    let items: Vec<Value> = (1..=7)
        .map(|i| {
            json!({
                "id": format!("artist{}", i),
                "name": format!("Artist {}", i),
                "genres": ["indie", "rock"]
            })
        })
        .collect();
    Json(json!({ "items": items }))
}

async fn recommendations(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    record_auth(&state, &headers);
    let limit: usize = query
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(20);
    state.lock().unwrap().recommendation_queries.push(query);

    let tracks: Vec<Value> = (1..=limit)
        .map(|i| {
            json!({
                "id": format!("t{}", i),
                "name": format!("Track {}", i),
                "uri": format!("spotify:track:t{}", i)
            })
        })
        .collect();
    Json(json!({ "tracks": tracks }))
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Json<Value> {
    record_auth(&state, &headers);
    Json(json!({ "id": "user-1", "display_name": "Test User" }))
}

async fn create_playlist(
    State(state): State<Shared>,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let response = json!({
        "id": "playlist-1",
        "name": body["name"],
        "description": body["description"],
        "public": body["public"],
        "collaborative": body["collaborative"]
    });
    state.lock().unwrap().created.push((user_id, body));
    Json(response)
}

async fn add_tracks(
    State(state): State<Shared>,
    Path(playlist_id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let uris = body["uris"]
        .as_array()
        .map(|a| {
            a.iter()
                .filter_map(|u| u.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    state.lock().unwrap().added.push((playlist_id, uris));
    Json(json!({ "snapshot_id": "snapshot-1" }))
}

/// Router imitating the Web API endpoints moodlist uses.
pub fn mock_spotify(state: Shared) -> Router {
    Router::new()
        .route("/me/top/artists", get(top_artists))
        .route("/recommendations", get(recommendations))
        .route("/me", get(me))
        .route("/users/{user_id}/playlists", post(create_playlist))
        .route("/playlists/{playlist_id}/tracks", post(add_tracks))
        .with_state(state)
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn test_config(api_url: &str) -> Config {
    Config {
        client_id: "client-id".to_string(),
        redirect_uri: "http://127.0.0.1:8080/callback".to_string(),
        scope: DEFAULT_SCOPE.to_string(),
        auth_url: DEFAULT_AUTH_URL.to_string(),
        token_url: format!("{}/api/token", api_url),
        api_url: api_url.to_string(),
        server_address: "127.0.0.1:0".to_string(),
        request_timeout: Duration::from_secs(5),
    }
}

pub fn token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: TEST_TOKEN.to_string(),
        refresh_token: "refresh-token".to_string(),
        scope: DEFAULT_SCOPE.to_string(),
        expires_in,
        obtained_at,
    }
}

pub fn fresh_token() -> Token {
    token(Utc::now().timestamp() as u64, 3600)
}

pub fn session(config: Config) -> SpotifySession {
    SpotifySession::new(config, TokenManager::new(fresh_token())).unwrap()
}

/// A token cache path under the system temp dir, unique per test.
pub fn temp_token_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "moodlist-test-{}-{}-{}",
        name,
        std::process::id(),
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    path.push("token.json");
    path
}
