use std::sync::Arc;

use axum::{Extension, Form, extract::rejection::FormRejection, response::Html};

use crate::{
    api::page::{Notice, render_form},
    spotify::SpotifySession,
    success, warning,
    workflow::{self, RecommendationRequest},
};

const MSG_BAD_FORM: &str = "Please submit the playlist form.";

/// Raw form fields; both are optional here so that missing values produce a
/// validation message instead of a rejected request.
#[derive(Debug, Default)]
pub struct PlaylistForm {
    pub num_songs: Option<String>,
    pub playlist_type: Option<String>,
}

impl PlaylistForm {
    /// Picks the fields out of decoded form pairs. A repeated field keeps its
    /// first value; unknown fields are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = PlaylistForm::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "num_songs" => &mut form.num_songs,
                "playlist_type" => &mut form.playlist_type,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }
}

pub async fn home() -> Html<String> {
    Html(render_form(None))
}

pub async fn submit(
    Extension(session): Extension<Arc<SpotifySession>>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String> {
    let form = match body {
        Ok(Form(pairs)) => PlaylistForm::from_pairs(pairs),
        Err(rejection) => {
            warning!("Unreadable form submission: {}", rejection.body_text());
            return Html(render_form(Some(&Notice::Error(MSG_BAD_FORM.to_string()))));
        }
    };

    let request =
        match RecommendationRequest::parse(form.num_songs.as_deref(), form.playlist_type.as_deref()) {
            Ok(request) => request,
            Err(e) => {
                warning!("Rejected form submission: {:?}", e);
                return Html(render_form(Some(&Notice::Error(e.to_string()))));
            }
        };

    let outcome = workflow::run(session.as_ref(), &request).await;
    let notice = if outcome.is_success() {
        success!("{}", outcome.message());
        Notice::Success(outcome.message())
    } else {
        Notice::Error(outcome.message())
    };

    Html(render_form(Some(&notice)))
}
