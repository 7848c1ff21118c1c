use crate::{
    spotify::{ApiError, StreamingClient},
    types::{ArtistId, RecommendationQuery, TrackUri},
    workflow::{AttributeParameter, artists::MAX_SEED_ARTISTS},
};

/// Value sent for the target attribute: always the extreme, never a midpoint.
pub const TARGET_VALUE: f32 = 1.0;

/// Builds the recommendation query for the given seeds, count and attribute.
pub fn build_query(seeds: &[ArtistId], count: u32, attribute: AttributeParameter) -> RecommendationQuery {
    RecommendationQuery {
        seed_artists: seeds.iter().take(MAX_SEED_ARTISTS).cloned().collect(),
        limit: count,
        target: attribute,
        target_value: TARGET_VALUE,
    }
}

/// URIs of tracks recommended for `seeds`, biased fully towards `attribute`.
///
/// The result has at most `count` entries in the order returned by the
/// service; fewer is possible when the service has fewer matches.
pub async fn fetch_recommendations<C: StreamingClient>(
    client: &C,
    seeds: &[ArtistId],
    count: u32,
    attribute: AttributeParameter,
) -> Result<Vec<TrackUri>, ApiError> {
    let query = build_query(seeds, count, attribute);
    let tracks = client.recommendations(&query).await?;

    Ok(tracks.into_iter().map(|t| t.uri).collect())
}
