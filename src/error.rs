// Error taxonomy for the analysis core.
//
// Analyzers return these typed errors so the orchestrator can decide per
// section what to do with them. The binary and the HTTP boundary wrap them
// in anyhow with context.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Every token was filtered out before featurization (empty input, or
    /// nothing but stopwords and punctuation).
    #[error("empty vocabulary: no terms survived stopword and pattern filtering")]
    EmptyVocabulary,

    /// Fewer usable samples or features than the requested cluster count.
    #[error(
        "cannot form {requested} clusters from {samples} paragraphs and {features} features"
    )]
    DegenerateCluster {
        requested: usize,
        samples: usize,
        features: usize,
    },

    /// Upload bytes contained no decodable UTF-8 text.
    #[error("input is not valid UTF-8 text")]
    InvalidEncoding,

    /// Upload larger than the configured boundary cap.
    #[error("input is {size} bytes, limit is {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
