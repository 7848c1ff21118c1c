//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API that moodlist needs: the
//! user's top artists, seeded recommendations, the current user profile and
//! playlist creation. Authentication uses the OAuth 2.0 PKCE flow in [`auth`].
//!
//! ## Client session
//!
//! All calls go through a [`SpotifySession`], which is constructed once at
//! startup from the [`Config`] and a [`TokenManager`] and then passed to
//! whoever needs it. The session owns:
//! - one `reqwest::Client` with the configured per-request timeout
//! - the token manager behind an async mutex, so an expiring access token is
//!   refreshed exactly once even when several form submissions arrive together
//!
//! The recommendation workflow does not depend on the session directly but on
//! the [`StreamingClient`] trait, which the session implements.
//!
//! ## Error mapping
//!
//! Every remote failure is reduced to one of three [`ApiError`] kinds:
//!
//! | Failure | Kind |
//! |---|---|
//! | HTTP 401, failed token refresh | [`ApiError::Authorization`] |
//! | request exceeded the client timeout | [`ApiError::Timeout`] |
//! | any other status, transport or decode error | [`ApiError::Service`] |
//!
//! Nothing is retried here.
//!
//! ## API Coverage
//!
//! - `GET /me/top/artists` - user's top artists
//! - `GET /recommendations` - seeded track recommendations
//! - `GET /me` - current user profile
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - append tracks
//! - `POST /api/token` - token exchange and refresh

pub mod artists;
pub mod auth;
pub mod playlist;
pub mod recommendations;

use std::fmt;

use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use crate::{
    Res,
    config::Config,
    management::TokenManager,
    types::{
        Artist, CreatePlaylistRequest, CreatePlaylistResponse, RecommendationQuery, TimeRange,
        Track, TrackUri, User,
    },
};

/// Failure kinds of a streaming-service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The service rejected the stored credentials or they could not be refreshed.
    Authorization(String),
    /// The service was reachable but the call failed.
    Service(String),
    /// The call did not complete within the configured timeout.
    Timeout,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Authorization(msg) => write!(f, "authorization failed: {}", msg),
            ApiError::Service(msg) => write!(f, "service error: {}", msg),
            ApiError::Timeout => write!(f, "request timed out"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.status() == Some(StatusCode::UNAUTHORIZED) {
            ApiError::Authorization(err.to_string())
        } else {
            ApiError::Service(err.to_string())
        }
    }
}

/// Operations the recommendation workflow needs from a streaming service.
pub trait StreamingClient: Send + Sync {
    /// The current user's top artists over `time_range`, at most `limit`.
    fn top_artists(
        &self,
        limit: u32,
        time_range: TimeRange,
    ) -> impl Future<Output = Result<Vec<Artist>, ApiError>> + Send;

    fn recommendations(
        &self,
        query: &RecommendationQuery,
    ) -> impl Future<Output = Result<Vec<Track>, ApiError>> + Send;

    fn current_user(&self) -> impl Future<Output = Result<User, ApiError>> + Send;

    fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> impl Future<Output = Result<CreatePlaylistResponse, ApiError>> + Send;

    /// Appends `uris` to the end of the playlist, keeping their order.
    fn add_items(
        &self,
        playlist_id: &str,
        uris: &[TrackUri],
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Authenticated Spotify Web API session.
pub struct SpotifySession {
    http: Client,
    config: Config,
    tokens: Mutex<TokenManager>,
}

impl SpotifySession {
    pub fn new(config: Config, tokens: TokenManager) -> Res<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            config,
            tokens: Mutex::new(tokens),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a usable access token, refreshing it first when it is about to expire.
    pub async fn access_token(&self) -> Result<String, ApiError> {
        let mut tokens = self.tokens.lock().await;
        tokens.get_valid_token(&self.http, &self.config).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let token = self.access_token().await?;
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let token = self.access_token().await?;
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

impl StreamingClient for SpotifySession {
    async fn top_artists(&self, limit: u32, time_range: TimeRange) -> Result<Vec<Artist>, ApiError> {
        artists::get_top_artists(self, limit, time_range).await
    }

    async fn recommendations(&self, query: &RecommendationQuery) -> Result<Vec<Track>, ApiError> {
        recommendations::get_recommendations(self, query).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        playlist::get_current_user(self).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, ApiError> {
        playlist::create(self, user_id, request).await
    }

    async fn add_items(&self, playlist_id: &str, uris: &[TrackUri]) -> Result<(), ApiError> {
        playlist::add_tracks(self, playlist_id, uris).await
    }
}
