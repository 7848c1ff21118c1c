use crate::{
    spotify::{ApiError, SpotifySession},
    types::{Artist, TimeRange, TopArtistsResponse},
};

/// Retrieves the current user's top artists from the Spotify Web API.
///
/// Calls `GET /me/top/artists` with the given `limit` (1-50) and
/// `time_range`. Artists are returned in the order the service ranks them,
/// most listened first. The service decides what "top" means inside the
/// chosen window.
///
/// # Errors
///
/// - [`ApiError::Authorization`] when the token is rejected or cannot be refreshed
/// - [`ApiError::Timeout`] when the request exceeds the configured timeout
/// - [`ApiError::Service`] for any other HTTP, network or decoding failure
///
/// # Example
///
/// ```
/// let artists = get_top_artists(&session, 5, TimeRange::MediumTerm).await?;
/// for artist in artists {
///     println!("{}", artist.name);
/// }
/// ```
pub async fn get_top_artists(
    session: &SpotifySession,
    limit: u32,
    time_range: TimeRange,
) -> Result<Vec<Artist>, ApiError> {
    let query = [
        ("limit".to_string(), limit.to_string()),
        ("time_range".to_string(), time_range.as_str().to_string()),
    ];

    let res = session
        .get_json::<TopArtistsResponse>("/me/top/artists", &query)
        .await?;

    Ok(res.items)
}
