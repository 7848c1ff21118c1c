//! Configuration management for moodlist.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory (`<data_local_dir>/moodlist/.env`)
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::Res;

pub const DEFAULT_SCOPE: &str = "playlist-modify-private user-library-read user-top-read";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from a `.env` file.
///
/// Looks in the platform-specific local data directory first:
/// - Linux: `~/.local/share/moodlist/.env`
/// - macOS: `~/Library/Application Support/moodlist/.env`
/// - Windows: `%LOCALAPPDATA%/moodlist/.env`
///
/// When that file does not exist, a `.env` in the working directory is used if
/// present. Variables already set in the process environment are never
/// overwritten.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    } else {
        // no local .env is fine, plain environment variables still work
        let _ = dotenv::dotenv();
    }
    Ok(())
}

/// Returns the application's local data directory (`<data_local_dir>/moodlist`).
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodlist");
    path
}

/// Typed runtime configuration, established once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub server_address: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated like missing ones, so a blank line in `.env`
    /// falls back to the default (or fails for required keys).
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| get(key).ok_or_else(|| format!("{} must be set", key));
        let optional = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let timeout_secs = match get("SPOTIFY_API_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(format!(
                        "SPOTIFY_API_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                        raw
                    )
                    .into());
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
            scope: optional("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            auth_url: optional("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            server_address: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
