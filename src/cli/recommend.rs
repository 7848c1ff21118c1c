use crate::{error, info, success, warning, workflow};

pub async fn recommend(count: u32, mood: workflow::Mood) {
    let request = match workflow::RecommendationRequest::new(count, mood) {
        Ok(request) => request,
        Err(e) => error!("{}", e),
    };

    let session = super::load_session().await;

    info!(
        "Building {} {} recommendations from your top artists",
        request.track_count(),
        request.mood()
    );

    let pb = super::spinner("Talking to Spotify...");
    let outcome = workflow::run(&session, &request).await;
    pb.finish_and_clear();

    if outcome.is_success() {
        success!("{}", outcome.message());
    } else {
        warning!("{}", outcome.message());
    }
}
