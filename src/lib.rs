//! moodlist library
//!
//! Builds private Spotify playlists from a user's top artists and a chosen
//! mood. A mood maps to one recommendation attribute (acousticness,
//! danceability, ...); the user's top artists seed a recommendation query
//! pushed fully towards that attribute, and the resulting tracks become a new
//! private playlist.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the form, the OAuth callback and health checks
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token storage and refresh
//! - `server` - axum routers and server startup
//! - `spotify` - Spotify Web API client session
//! - `types` - Data structures and wire types
//! - `utils` - PKCE and HTML helpers
//! - `workflow` - The recommendation workflow and its orchestrator
//!
//! # Example
//!
//! ```
//! use moodlist::{config::Config, management::TokenManager, spotify::SpotifySession, workflow};
//!
//! #[tokio::main]
//! async fn main() -> moodlist::Res<()> {
//!     moodlist::config::load_env().await?;
//!     let session = SpotifySession::new(Config::from_env()?, TokenManager::load().await?)?;
//!     let request = workflow::RecommendationRequest::new(20, workflow::Mood::Live)?;
//!     println!("{}", workflow::run(&session, &request).await.message());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod workflow;

/// A convenient Result type alias for operations that may fail.
///
/// Boxed dynamic error with Send + Sync bounds so it can cross `.await`
/// points and task boundaries.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Fetched {} top artists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits the process with status 1.
///
/// Diagnostics stay off stdout, which carries command output such as
/// completion scripts. Only for the binary's edge (startup, CLI commands).
/// Library code returns errors instead.
///
/// ```
/// error!("Invalid configuration: {}", err);
/// // unreachable
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line to stderr for recoverable problems.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
