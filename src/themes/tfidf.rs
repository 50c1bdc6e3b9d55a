// TF-IDF featurization of paragraphs.
//
// Each paragraph is a document. Weights are raw term counts times the
// smoothed inverse document frequency ln((1 + n) / (1 + df)) + 1, and every
// row is scaled to unit L2 length. Columns are ordered alphabetically, which
// keeps the matrix (and everything derived from it) independent of hash
// iteration order.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::text::Tokenizer;

pub const DEFAULT_MAX_FEATURES: usize = 3500;

/// Builds a dense TF-IDF matrix. Constructed per request and dropped after.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    pub max_features: usize,
    pub tokenizer: Tokenizer,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            tokenizer: Tokenizer::english(),
        }
    }
}

/// Paragraph-by-term weight matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfMatrix {
    /// Feature names, one per column
    pub terms: Vec<String>,
    /// One row per document, each of length `terms.len()`
    pub rows: Vec<Vec<f64>>,
}

impl TfIdfMatrix {
    pub fn n_features(&self) -> usize {
        self.terms.len()
    }
}

impl TfIdfVectorizer {
    pub fn fit_transform<S: AsRef<str>>(&self, docs: &[S]) -> Result<TfIdfMatrix> {
        let doc_counts: Vec<HashMap<String, u64>> = docs
            .iter()
            .map(|doc| {
                let mut counts = HashMap::new();
                for term in self.tokenizer.terms(doc.as_ref()) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        // Corpus-wide term frequency and document frequency
        let mut totals: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
        for counts in &doc_counts {
            for (term, &count) in counts {
                let entry = totals.entry(term.as_str()).or_insert((0, 0));
                entry.0 += count;
                entry.1 += 1;
            }
        }

        if totals.is_empty() {
            return Err(AnalysisError::EmptyVocabulary);
        }

        let mut selected: Vec<(&str, u64, usize)> = totals
            .into_iter()
            .map(|(term, (tf, df))| (term, tf, df))
            .collect();
        if selected.len() > self.max_features {
            // Stable sort keeps alphabetical order among equal counts
            selected.sort_by(|a, b| b.1.cmp(&a.1));
            selected.truncate(self.max_features);
            selected.sort_by(|a, b| a.0.cmp(b.0));
        }

        let n_docs = docs.len() as f64;
        let idf: Vec<f64> = selected
            .iter()
            .map(|&(_, _, df)| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows: Vec<Vec<f64>> = doc_counts
            .iter()
            .map(|counts| {
                let mut row: Vec<f64> = selected
                    .iter()
                    .zip(&idf)
                    .map(|(&(term, _, _), &w)| counts.get(term).copied().unwrap_or(0) as f64 * w)
                    .collect();
                l2_normalize(&mut row);
                row
            })
            .collect();

        debug!(
            documents = docs.len(),
            features = selected.len(),
            "Built TF-IDF matrix"
        );

        Ok(TfIdfMatrix {
            terms: selected.into_iter().map(|(t, _, _)| t.to_string()).collect(),
            rows,
        })
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in row.iter_mut() {
            *x /= norm;
        }
    }
}
