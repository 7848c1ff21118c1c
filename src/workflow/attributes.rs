use std::{fmt, str::FromStr};

/// Moods offered on the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Acoustic,
    Danceable,
    Instrumental,
    Live,
    Speechy,
    Loud,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Acoustic,
        Mood::Danceable,
        Mood::Instrumental,
        Mood::Live,
        Mood::Speechy,
        Mood::Loud,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Acoustic => "Acoustic",
            Mood::Danceable => "Danceable",
            Mood::Instrumental => "Instrumental",
            Mood::Live => "Live",
            Mood::Speechy => "Speechy",
            Mood::Loud => "Loud",
        }
    }

    pub fn attribute(&self) -> AttributeParameter {
        match self {
            Mood::Acoustic => AttributeParameter::Acousticness,
            Mood::Danceable => AttributeParameter::Danceability,
            Mood::Instrumental => AttributeParameter::Instrumentalness,
            Mood::Live => AttributeParameter::Liveness,
            Mood::Speechy => AttributeParameter::Speechiness,
            Mood::Loud => AttributeParameter::Loudness,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMood(pub String);

impl fmt::Display for UnknownMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = Mood::ALL.map(|m| m.label()).join(", ");
        write!(f, "unknown mood '{}', expected one of: {}", self.0, labels)
    }
}

impl std::error::Error for UnknownMood {}

impl FromStr for Mood {
    type Err = UnknownMood;

    /// Labels are matched exactly, `"acoustic"` is not a mood.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// Target attribute understood by the recommendations endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeParameter {
    Acousticness,
    Danceability,
    Instrumentalness,
    Liveness,
    Speechiness,
    Loudness,
}

impl AttributeParameter {
    /// Query parameter name, e.g. `target_acousticness`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeParameter::Acousticness => "target_acousticness",
            AttributeParameter::Danceability => "target_danceability",
            AttributeParameter::Instrumentalness => "target_instrumentalness",
            AttributeParameter::Liveness => "target_liveness",
            AttributeParameter::Speechiness => "target_speechiness",
            AttributeParameter::Loudness => "target_loudness",
        }
    }
}

impl fmt::Display for AttributeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a mood label to the recommendation attribute it targets.
///
/// Never fails: anything that is not one of the six labels, including the
/// empty string or a differently cased label, targets loudness. Callers
/// validate input before it gets here.
pub fn map_mood(mood_label: &str) -> AttributeParameter {
    mood_label
        .parse::<Mood>()
        .map(|m| m.attribute())
        .unwrap_or(AttributeParameter::Loudness)
}
