use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{
    config::Config,
    management::TokenManager,
    server::start_callback_server,
    types::{PkceToken, Token},
    utils, warning,
};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    scope: Option<String>,
    expires_in: Option<u64>,
}

/// Runs the complete OAuth 2.0 PKCE authentication flow with Spotify.
///
/// 1. Generates a code verifier and its S256 challenge
/// 2. Starts the local callback server on `config.server_address`
/// 3. Opens the authorization URL in the default browser
/// 4. Waits up to 60 seconds for the callback to exchange the code
/// 5. Persists the obtained token for later runs
///
/// If the browser cannot be opened, the URL is printed so the user can open
/// it manually.
///
/// # Errors
///
/// Returns an error message when the authorization URL cannot be built, the
/// flow times out, or the token cannot be written to disk.
pub async fn auth(config: &Config, shared_state: Arc<Mutex<Option<PkceToken>>>) -> Result<Token, String> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let auth_url = utils::build_authorize_url(config, &code_challenge)?;

    // verifier must be in place before the browser can hit the callback
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    let server_state = Arc::clone(&shared_state);
    let server_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) = start_callback_server(server_config, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    match wait_for_token(shared_state).await {
        Some(token) => {
            TokenManager::new(token.clone())
                .persist()
                .await
                .map_err(|e| format!("Failed to save token to cache: {}", e))?;
            Ok(token)
        }
        None => Err("Authentication failed or timed out.".to_string()),
    }
}

/// Polls the shared state once per second until the callback stored a token
/// or 60 seconds have passed.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an expiring token's refresh token for a fresh access token.
///
/// Spotify may or may not rotate the refresh token; when the response carries
/// none, the previous one is kept so later refreshes keep working. The same
/// applies to the granted scope.
pub async fn refresh_token(http: &Client, config: &Config, current: &Token) -> Result<Token, String> {
    let res = http
        .post(&config.token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", current.refresh_token.as_str()),
            ("client_id", config.client_id.as_str()),
        ])
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let json = res.json::<TokenResponse>().await.map_err(|e| e.to_string())?;

    Ok(Token {
        access_token: json.access_token,
        refresh_token: json
            .refresh_token
            .unwrap_or_else(|| current.refresh_token.clone()),
        scope: json.scope.unwrap_or_else(|| current.scope.clone()),
        expires_in: json.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// `verifier` must be the verifier whose challenge was sent in the
/// authorization request. Authorization codes are single use.
pub async fn exchange_code_pkce(config: &Config, code: &str, verifier: &str) -> Result<Token, String> {
    let client = Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| e.to_string())?;

    let res = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", config.client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let json = res.json::<TokenResponse>().await.map_err(|e| e.to_string())?;

    Ok(Token {
        access_token: json.access_token,
        refresh_token: json.refresh_token.unwrap_or_default(),
        scope: json.scope.unwrap_or_default(),
        expires_in: json.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
