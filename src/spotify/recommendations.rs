use crate::{
    spotify::{ApiError, SpotifySession},
    types::{RecommendationQuery, RecommendationsResponse, Track},
};

/// Requests seeded track recommendations.
///
/// Sends `GET /recommendations` with the seed artists joined by commas, the
/// result limit and the single `target_*` attribute from `query`. An empty
/// seed list is forwarded as-is; the service decides how to answer it.
pub async fn get_recommendations(
    session: &SpotifySession,
    query: &RecommendationQuery,
) -> Result<Vec<Track>, ApiError> {
    let res = session
        .get_json::<RecommendationsResponse>("/recommendations", &query.to_query_pairs())
        .await?;

    Ok(res.tracks)
}
