//! # API Module
//!
//! HTTP endpoints served by moodlist's axum server.
//!
//! ## Endpoints
//!
//! - [`home`] - `GET /`, renders the playlist form
//! - [`submit`] - `POST /`, validates the form, runs one recommendation
//!   workflow and renders its status message on the same page
//! - [`callback`] - `GET /callback`, completes the OAuth PKCE flow started by
//!   `moodlist auth`
//! - [`health`] - `GET /health`, status and version for monitoring
//!
//! Form handlers receive the shared [`SpotifySession`](crate::spotify::SpotifySession)
//! as an `Extension`; the callback receives a [`CallbackState`].

mod callback;
mod form;
mod health;
pub mod page;

pub use callback::{CallbackState, callback};
pub use form::{PlaylistForm, home, submit};
pub use health::health;
