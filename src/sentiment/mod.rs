// Sentiment scoring — a lexicon scorer behind a swappable trait, plus the
// fixed polarity thresholds that turn a score into a mood label.

pub mod lexicon;
pub mod traits;

use serde::{Deserialize, Serialize};

pub use lexicon::LexiconScorer;
pub use traits::{SentimentScore, SentimentScorer};

use crate::error::Result;

/// Polarity above this is Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity below this is Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Discrete sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
}

impl Mood {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Mood::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "Positive",
            Mood::Neutral => "Neutral",
            Mood::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub overview: Mood,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl From<SentimentScore> for SentimentResult {
    fn from(score: SentimentScore) -> Self {
        Self {
            overview: Mood::from_polarity(score.polarity),
            polarity: score.polarity,
            subjectivity: score.subjectivity,
        }
    }
}

/// Score `text` with `scorer` and attach the mood label.
pub fn analyze(scorer: &dyn SentimentScorer, text: &str) -> Result<SentimentResult> {
    scorer.score(text).map(SentimentResult::from)
}
