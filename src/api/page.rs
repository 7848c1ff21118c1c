use crate::{
    utils::escape_html,
    workflow::{Mood, request::TRACK_COUNT_RANGE},
};

/// Flash-style message rendered above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Renders the playlist form page, optionally with one notice.
pub fn render_form(notice: Option<&Notice>) -> String {
    let notice_html = match notice {
        Some(Notice::Success(msg)) => format!(
            r#"<div class="alert alert-success" role="alert">{}</div>"#,
            escape_html(msg)
        ),
        Some(Notice::Error(msg)) => format!(
            r#"<div class="alert alert-danger" role="alert">{}</div>"#,
            escape_html(msg)
        ),
        None => String::new(),
    };

    let options = Mood::ALL
        .iter()
        .map(|m| format!(r#"<option value="{0}">{0}</option>"#, m.label()))
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Top Artist Recommendations</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body>
  <main class="container py-5" style="max-width: 40rem">
    <h1 class="mb-4">Top Artist Recommendations</h1>
    {notice}
    <form method="post" action="/">
      <div class="mb-3">
        <label class="form-label" for="num_songs">How many recommended songs do you want? (max. {max})</label>
        <input class="form-control" type="number" id="num_songs" name="num_songs" min="{min}" max="{max}" required>
      </div>
      <div class="mb-3">
        <label class="form-label" for="playlist_type">What type of playlist would you like?</label>
        <select class="form-select" id="playlist_type" name="playlist_type" required>
            {options}
        </select>
      </div>
      <button class="btn btn-primary" type="submit">Get playlist</button>
    </form>
  </main>
</body>
</html>
"#,
        notice = notice_html,
        min = TRACK_COUNT_RANGE.start(),
        max = TRACK_COUNT_RANGE.end(),
        options = options,
    )
}
