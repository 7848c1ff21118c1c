//! # CLI Module
//!
//! User-facing commands of the `moodlist` binary. Each command loads the
//! configuration, builds what it needs and reports progress with the
//! crate's `info!`/`success!`/`warning!`/`error!` macros.
//!
//! ## Commands
//!
//! - [`auth`] - runs the OAuth PKCE flow and stores the token
//! - [`serve`] - hosts the playlist form
//! - [`recommend`] - runs one recommendation workflow from the terminal
//! - [`artists`] - shows the top artists that seed recommendations
//!
//! ## Typical usage
//!
//! ```bash
//! moodlist auth                               # once, opens the browser
//! moodlist serve                              # form on SERVER_ADDRESS
//! moodlist recommend --count 25 --mood Live   # same workflow without the form
//! ```

mod artists;
mod auth;
mod recommend;
mod serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::Config, error, management::TokenManager, spotify::SpotifySession};

pub use artists::artists;
pub use auth::auth;
pub use recommend::recommend;
pub use serve::serve;

/// Loads the configuration or exits with an error.
fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    }
}

/// Builds the authenticated session from the stored token or exits with an error.
async fn load_session() -> SpotifySession {
    let config = load_config();

    let token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run moodlist auth\n Error: {}",
                e
            );
        }
    };

    match SpotifySession::new(config, token_mgr) {
        Ok(session) => session,
        Err(e) => error!("Failed to create Spotify session: {}", e),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
