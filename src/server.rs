use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{
    Res, api,
    api::CallbackState,
    config::Config,
    info,
    spotify::SpotifySession,
    types::PkceToken,
};

/// Routes of the playlist form application.
pub fn app_router(session: Arc<SpotifySession>) -> Router {
    Router::new()
        .route("/", get(api::home).post(api::submit))
        .route("/health", get(api::health))
        .layer(Extension(session))
}

/// Routes needed while `moodlist auth` waits for the OAuth redirect.
pub fn callback_router(config: Config, pkce: Arc<Mutex<Option<PkceToken>>>) -> Router {
    let state = Arc::new(CallbackState { config, pkce });
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)))
}

fn parse_addr(addr: &str) -> Res<SocketAddr> {
    SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address '{}': {}", addr, e).into())
}

/// Serves the playlist form until the process is stopped.
pub async fn start_app_server(session: Arc<SpotifySession>) -> Res<()> {
    let addr = parse_addr(&session.config().server_address)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving playlist form on http://{}", addr);
    axum::serve(listener, app_router(session)).await?;
    Ok(())
}

pub async fn start_callback_server(config: Config, pkce: Arc<Mutex<Option<PkceToken>>>) -> Res<()> {
    let addr = parse_addr(&config.server_address)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, callback_router(config, pkce)).await?;
    Ok(())
}
