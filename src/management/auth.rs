use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{config, config::Config, spotify::ApiError, spotify::auth, types::Token, warning};

/// Seconds before the nominal expiry at which a token is treated as expired.
const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    token: Token,
    path: PathBuf,
}

impl TokenManager {
    /// Manages `token`, cached under the data directory.
    pub fn new(token: Token) -> Self {
        Self::with_path(token, Self::default_path())
    }

    /// Manages `token`, cached at `path` instead of the data directory.
    pub fn with_path(token: Token, path: PathBuf) -> Self {
        TokenManager { token, path }
    }

    pub async fn load() -> Result<Self, String> {
        Self::load_from(Self::default_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self, String> {
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self::with_path(token, path))
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = &self.path;
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Returns an access token that is valid for at least a few more minutes.
    ///
    /// An expiring token is refreshed through the token endpoint and the
    /// result is persisted. A refresh that fails is reported as
    /// [`ApiError::Authorization`]; the stale token is kept so a later call
    /// can try again.
    pub async fn get_valid_token(&mut self, http: &Client, config: &Config) -> Result<String, ApiError> {
        if self.is_expired() {
            let new_token = auth::refresh_token(http, config, &self.token)
                .await
                .map_err(ApiError::Authorization)?;
            self.token = new_token;
            if let Err(e) = self.persist().await {
                warning!("Failed to save refreshed token: {}", e);
            }
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn default_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
