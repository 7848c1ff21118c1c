use crate::{
    info,
    spotify::{ApiError, StreamingClient},
    types::{ArtistId, Playlist, TrackUri},
    warning,
    workflow::{
        RecommendationRequest, artists::fetch_top_artists, map_mood, playlist::create_playlist,
        playlist::playlist_title, recommendations::fetch_recommendations,
    },
};

pub const MSG_AUTHORIZATION: &str = "Could not authorize user";
pub const MSG_TIMEOUT: &str = "API request timed out. Please try again.";
pub const MSG_TOP_ARTISTS: &str = "Could not retrieve top artists";
pub const MSG_RECOMMENDATIONS: &str = "Could not retrieve recommended tracks";
pub const MSG_PLAYLIST: &str = "Could not create playlist";

/// The remote step a run was executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    TopArtists,
    Recommendations,
    Playlist,
}

/// Progress of one recommendation run.
///
/// `Start -> ArtistsFetched -> TracksFetched -> PlaylistCreated`, or `Failed`
/// from any non-terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum RunState {
    Start,
    ArtistsFetched(Vec<ArtistId>),
    TracksFetched(Vec<TrackUri>),
    PlaylistCreated(Playlist),
    Failed { step: Step, error: ApiError },
}

/// Terminal result of a run, carrying the title the playlist was given.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    PlaylistCreated {
        title: String,
        playlist: Playlist,
    },
    Failed {
        title: String,
        step: Step,
        error: ApiError,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::PlaylistCreated { .. })
    }

    pub fn title(&self) -> &str {
        match self {
            Outcome::PlaylistCreated { title, .. } | Outcome::Failed { title, .. } => title,
        }
    }

    /// The single status line shown to the user for this run.
    pub fn message(&self) -> String {
        match self {
            Outcome::PlaylistCreated { title, .. } => {
                format!("Your playlist has been created with title {}", title)
            }
            Outcome::Failed { step, error, .. } => match (step, error) {
                (_, ApiError::Authorization(_)) => MSG_AUTHORIZATION.to_string(),
                (_, ApiError::Timeout) => MSG_TIMEOUT.to_string(),
                (Step::TopArtists, ApiError::Service(_)) => MSG_TOP_ARTISTS.to_string(),
                (Step::Recommendations, ApiError::Service(_)) => MSG_RECOMMENDATIONS.to_string(),
                (Step::Playlist, ApiError::Service(_)) => MSG_PLAYLIST.to_string(),
            },
        }
    }
}

/// Runs top artists -> recommendations -> playlist once for `request`.
///
/// Each step starts only after the previous one succeeded. The first failure
/// ends the run; nothing is retried and nothing created so far is undone.
pub async fn run<C: StreamingClient>(client: &C, request: &RecommendationRequest) -> Outcome {
    let mood_label = request.mood().label();
    let attribute = map_mood(mood_label);
    let title = playlist_title(mood_label);

    let mut state = RunState::Start;
    loop {
        state = match state {
            RunState::Start => match fetch_top_artists(client).await {
                Ok(artists) => {
                    info!("Fetched {} top artists", artists.len());
                    RunState::ArtistsFetched(artists)
                }
                Err(error) => RunState::Failed {
                    step: Step::TopArtists,
                    error,
                },
            },
            RunState::ArtistsFetched(artists) => {
                match fetch_recommendations(client, &artists, request.track_count(), attribute)
                    .await
                {
                    Ok(tracks) => {
                        info!("Fetched {} recommended tracks ({})", tracks.len(), attribute);
                        RunState::TracksFetched(tracks)
                    }
                    Err(error) => RunState::Failed {
                        step: Step::Recommendations,
                        error,
                    },
                }
            }
            RunState::TracksFetched(tracks) => {
                match create_playlist(client, &title, mood_label, &tracks).await {
                    Ok(playlist) => {
                        info!("Created playlist {} ({})", playlist.name, playlist.id);
                        RunState::PlaylistCreated(playlist)
                    }
                    Err(error) => RunState::Failed {
                        step: Step::Playlist,
                        error,
                    },
                }
            }
            RunState::PlaylistCreated(playlist) => {
                return Outcome::PlaylistCreated { title, playlist };
            }
            RunState::Failed { step, error } => {
                warning!("Recommendation run failed at {:?}: {}", step, error);
                return Outcome::Failed { title, step, error };
            }
        };
    }
}
