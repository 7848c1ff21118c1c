use std::{fmt, ops::RangeInclusive};

use crate::workflow::Mood;

/// Accepted number of recommended tracks per playlist.
pub const TRACK_COUNT_RANGE: RangeInclusive<u32> = 1..=100;

/// Why a submission was rejected before any remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingTrackCount,
    InvalidTrackCount(String),
    TrackCountOutOfRange(u32),
    MissingMood,
    UnknownMood(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingTrackCount => write!(f, "Please enter how many songs you want."),
            FormError::InvalidTrackCount(_) => write!(f, "The number of songs must be a whole number."),
            FormError::TrackCountOutOfRange(_) => write!(
                f,
                "The number of songs must be between {} and {}.",
                TRACK_COUNT_RANGE.start(),
                TRACK_COUNT_RANGE.end()
            ),
            FormError::MissingMood => write!(f, "Please choose a playlist type."),
            FormError::UnknownMood(_) => write!(f, "Please choose one of the listed playlist types."),
        }
    }
}

impl std::error::Error for FormError {}

/// A validated request for one recommendation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    track_count: u32,
    mood: Mood,
}

impl RecommendationRequest {
    pub fn new(track_count: u32, mood: Mood) -> Result<Self, FormError> {
        if !TRACK_COUNT_RANGE.contains(&track_count) {
            return Err(FormError::TrackCountOutOfRange(track_count));
        }
        Ok(Self { track_count, mood })
    }

    /// Validates raw form values. Both fields are required.
    pub fn parse(track_count: Option<&str>, mood: Option<&str>) -> Result<Self, FormError> {
        let raw_count = track_count
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(FormError::MissingTrackCount)?;
        let count = raw_count
            .parse::<u32>()
            .map_err(|_| FormError::InvalidTrackCount(raw_count.to_string()))?;

        let raw_mood = mood
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(FormError::MissingMood)?;
        let mood = raw_mood
            .parse::<Mood>()
            .map_err(|e| FormError::UnknownMood(e.0))?;

        Self::new(count, mood)
    }

    pub fn track_count(&self) -> u32 {
        self.track_count
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }
}
