use crate::{
    spotify::{ApiError, StreamingClient},
    types::{CreatePlaylistRequest, Playlist, TrackUri},
};

pub fn playlist_title(mood_label: &str) -> String {
    format!("Top Artist {} Recommendations", mood_label)
}

pub fn playlist_description(mood_label: &str) -> String {
    format!("Recommended {} Tracks based on Top Artists", mood_label)
}

/// Creates a private playlist for the current user and fills it with `tracks`.
///
/// Tracks are appended in the given order. If appending fails the playlist
/// already exists remotely and is left as it is, empty or partly filled.
pub async fn create_playlist<C: StreamingClient>(
    client: &C,
    title: &str,
    mood_label: &str,
    tracks: &[TrackUri],
) -> Result<Playlist, ApiError> {
    let user = client.current_user().await?;

    let request = CreatePlaylistRequest {
        name: title.to_string(),
        description: playlist_description(mood_label),
        public: false,
        collaborative: false,
    };
    let created = client.create_playlist(&user.id, &request).await?;

    client.add_items(&created.id, tracks).await?;

    Ok(Playlist {
        id: created.id,
        name: created.name,
        description: created.description.unwrap_or(request.description),
    })
}
