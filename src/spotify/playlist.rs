use crate::{
    spotify::{ApiError, SpotifySession},
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, TrackUri, User,
    },
};

/// Maximum number of URIs the service accepts per append request.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

/// Fetches the profile of the user the session is authorized for.
pub async fn get_current_user(session: &SpotifySession) -> Result<User, ApiError> {
    session.get_json::<User>("/me", &[]).await
}

/// Creates a playlist owned by `user_id`.
///
/// Visibility, collaboration flag, name and description are taken verbatim
/// from `request`. The returned id is what [`add_tracks`] expects.
pub async fn create(
    session: &SpotifySession,
    user_id: &str,
    request: &CreatePlaylistRequest,
) -> Result<CreatePlaylistResponse, ApiError> {
    session
        .post_json::<_, CreatePlaylistResponse>(&format!("/users/{}/playlists", user_id), request)
        .await
}

/// Appends tracks to the end of a playlist.
///
/// URIs are sent in chunks of [`MAX_TRACKS_PER_REQUEST`], preserving order.
/// The first failing chunk aborts the remaining ones; chunks that were
/// already added stay in the playlist.
pub async fn add_tracks(
    session: &SpotifySession,
    playlist_id: &str,
    uris: &[TrackUri],
) -> Result<(), ApiError> {
    let path = format!("/playlists/{}/tracks", playlist_id);

    for chunk in uris.chunks(MAX_TRACKS_PER_REQUEST) {
        let body = AddTrackToPlaylistRequest {
            uris: chunk.to_vec(),
        };
        session
            .post_json::<_, AddTrackToPlaylistResponse>(&path, &body)
            .await?;
    }

    Ok(())
}
