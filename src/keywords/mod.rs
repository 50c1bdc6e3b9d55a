// Keyword frequency extraction over a corpus of normalized texts.

pub mod extractor;

use serde::{Deserialize, Serialize};

pub use extractor::KeywordExtractor;

/// One vocabulary feature and its aggregate count across the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub term: String,
    pub freq: u64,
}

/// Top keywords, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keywords {
    pub vocabulary: Vec<VocabularyEntry>,
}
