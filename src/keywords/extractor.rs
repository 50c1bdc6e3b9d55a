// Count-based keyword extraction.
//
// Features are counted in the order they are first seen so that equal
// frequencies always rank the earlier term first. A stable sort on the
// count alone gives that tie-break for free.

use std::collections::HashMap;

use tracing::debug;

use super::{Keywords, VocabularyEntry};
use crate::error::{AnalysisError, Result};
use crate::text::Tokenizer;

pub const DEFAULT_TOP_N: usize = 50;
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Extracts the most frequent unigrams and bigrams from a corpus.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    /// How many keywords to return
    pub top_n: usize,
    /// Distinct features kept in the vocabulary before ranking
    pub max_features: usize,
    pub tokenizer: Tokenizer,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            max_features: DEFAULT_MAX_FEATURES,
            tokenizer: Tokenizer::english(),
        }
    }
}

impl KeywordExtractor {
    pub fn with_top_n(top_n: usize) -> Self {
        Self {
            top_n,
            ..Self::default()
        }
    }

    /// Rank vocabulary features by aggregate frequency across `corpus`.
    ///
    /// Returns `EmptyVocabulary` when no term survives filtering.
    pub fn extract<S: AsRef<str>>(&self, corpus: &[S]) -> Result<Keywords> {
        let counted = count_terms(&self.tokenizer, corpus);
        if counted.is_empty() {
            return Err(AnalysisError::EmptyVocabulary);
        }

        let distinct = counted.len();
        let mut ranked = counted;
        ranked.sort_by(|a, b| b.freq.cmp(&a.freq));
        ranked.truncate(self.max_features.min(self.top_n));

        debug!(
            distinct_features = distinct,
            returned = ranked.len(),
            "Ranked keyword vocabulary"
        );

        Ok(Keywords { vocabulary: ranked })
    }
}

/// Aggregate term counts over the corpus, in first-seen order.
fn count_terms<S: AsRef<str>>(tokenizer: &Tokenizer, corpus: &[S]) -> Vec<VocabularyEntry> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<VocabularyEntry> = Vec::new();

    for doc in corpus {
        for term in tokenizer.terms(doc.as_ref()) {
            match index.get(&term) {
                Some(&i) => entries[i].freq += 1,
                None => {
                    index.insert(term.clone(), entries.len());
                    entries.push(VocabularyEntry { term, freq: 1 });
                }
            }
        }
    }

    entries
}
