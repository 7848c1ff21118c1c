use tabled::Table;

use crate::{
    spotify::StreamingClient,
    types::{ArtistTableRow, TimeRange},
    warning,
    workflow::artists::MAX_SEED_ARTISTS,
};

/// Prints the top artists that seed the recommendations.
pub async fn artists() {
    let session = super::load_session().await;

    let pb = super::spinner("Fetching top artists...");
    let result = session
        .top_artists(MAX_SEED_ARTISTS as u32, TimeRange::MediumTerm)
        .await;
    pb.finish_and_clear();

    match result {
        Ok(artists) => {
            let table_rows: Vec<ArtistTableRow> = artists
                .into_iter()
                .enumerate()
                .map(|(i, a)| ArtistTableRow {
                    rank: i + 1,
                    name: a.name,
                    genres: a
                        .genres
                        .iter()
                        .take(3)
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(","),
                })
                .collect();

            println!("{}", Table::new(table_rows));
        }
        Err(e) => warning!("Failed to load top artists. Err: {}", e),
    }
}
