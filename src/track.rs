//! Track records as stored in the playlist file.

use crate::reorder::ScoredItem;
use serde::Deserialize;

/// Column headers of the playlist file, in order
pub const COLUMNS: [&str; 5] = ["Name", "Artist", "ID", "DateAdded", "Composite Value"];

/// One row of the playlist file.
///
/// `composite_value` is `None` when the row's cell is empty, which happens
/// for tracks the music service had no audio features for.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "ID")]
    pub id: String,
    /// Kept verbatim (ISO-8601 from the service)
    #[serde(rename = "DateAdded")]
    pub date_added: String,
    #[serde(rename = "Composite Value")]
    pub composite_value: Option<f64>,
}

impl Track {
    /// Score used for reordering. Missing values read as NaN so the
    /// reorderer rejects them instead of guessing a position.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.composite_value.unwrap_or(f64::NAN)
    }

    #[must_use]
    pub fn into_scored(self) -> ScoredItem<Self> {
        let score = self.score();
        ScoredItem::new(self, score)
    }
}

impl From<Track> for ScoredItem<Track> {
    fn from(track: Track) -> Self {
        track.into_scored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(value: Option<f64>) -> Track {
        Track {
            name: "Mr. Blue Sky".to_string(),
            artist: "Electric Light Orchestra".to_string(),
            id: "2RlgNHKcydI9sayD2Df2xp".to_string(),
            date_added: "2023-04-01T10:00:00Z".to_string(),
            composite_value: value,
        }
    }

    #[test]
    fn test_score_uses_composite_value() {
        assert_eq!(track(Some(0.412)).score(), 0.412);
    }

    #[test]
    fn test_missing_composite_scores_as_nan() {
        assert!(track(None).score().is_nan());
    }

    #[test]
    fn test_into_scored_keeps_payload() {
        let scored: ScoredItem<Track> = track(Some(0.2)).into();
        assert_eq!(scored.score, 0.2);
        assert_eq!(scored.payload.name, "Mr. Blue Sky");
    }
}
