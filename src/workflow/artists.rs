use crate::{
    spotify::{ApiError, StreamingClient},
    types::{ArtistId, TimeRange},
};

/// Most seed artists the recommendations endpoint accepts.
pub const MAX_SEED_ARTISTS: usize = 5;

/// Ids of the user's top artists over the medium-term window, best first.
///
/// Never more than [`MAX_SEED_ARTISTS`], even if the service ignores the limit.
pub async fn fetch_top_artists<C: StreamingClient>(client: &C) -> Result<Vec<ArtistId>, ApiError> {
    let artists = client
        .top_artists(MAX_SEED_ARTISTS as u32, TimeRange::MediumTerm)
        .await?;

    Ok(artists
        .into_iter()
        .take(MAX_SEED_ARTISTS)
        .map(|a| a.id)
        .collect())
}
