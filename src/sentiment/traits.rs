// Sentiment scorer trait — the swap-ready abstraction.
//
// The orchestrator only ever sees text in, polarity and subjectivity out.
// The default implementation is the word lexicon in `lexicon.rs`; any other
// scorer (a different lexicon, a model) plugs in behind the same trait.

use crate::error::Result;

/// Raw scores produced by a sentiment scorer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentScore {
    /// -1.0 (negative) to 1.0 (positive)
    pub polarity: f64,
    /// 0.0 (factual) to 1.0 (opinionated)
    pub subjectivity: f64,
}

/// Trait for scoring the sentiment of a piece of text.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<SentimentScore>;
}
