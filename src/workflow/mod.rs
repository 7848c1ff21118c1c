//! # Recommendation Workflow
//!
//! Turns one validated [`RecommendationRequest`] into a private playlist:
//!
//! ```text
//! mood label ──map_mood──▶ target attribute
//!                               │
//! top artists (≤5) ──▶ recommendations (count, attribute = 1.0) ──▶ playlist
//! ```
//!
//! Every remote step goes through a [`StreamingClient`](crate::spotify::StreamingClient)
//! passed in by the caller, so the same code runs against the live
//! [`SpotifySession`](crate::spotify::SpotifySession) and against test doubles.
//! [`orchestrator::run`] sequences the steps and reduces the result to one
//! status message.

pub mod artists;
pub mod attributes;
pub mod orchestrator;
pub mod playlist;
pub mod recommendations;
pub mod request;

pub use artists::fetch_top_artists;
pub use attributes::{AttributeParameter, Mood, UnknownMood, map_mood};
pub use orchestrator::{Outcome, RunState, Step, run};
pub use playlist::create_playlist;
pub use recommendations::fetch_recommendations;
pub use request::{FormError, RecommendationRequest};
