// Analysis orchestrator.
//
// Normalizes the text once, then runs the four analyzers independently over
// it. Each analyzer is isolated: an error or panic in one becomes an
// `{"error": ...}` section in the report while the others still return
// their results.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::document::Document;
use crate::error::{AnalysisError, Result};
use crate::keywords::{self, KeywordExtractor, Keywords};
use crate::sensory::{self, SensoryProfile};
use crate::sentiment::{self, LexiconScorer, SentimentResult, SentimentScorer};
use crate::text::{clean_text, word_count};
use crate::themes::{self, kmeans, ThemeClusterer, Themes};

/// Tunables for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    /// Keywords returned (default 50)
    pub top_n: usize,
    /// Upper bound on theme clusters (default 4)
    pub max_clusters: usize,
    /// Seed for k-means initialization (default 42)
    pub cluster_seed: u64,
    /// k-means restarts (default 10)
    pub cluster_restarts: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_n: keywords::extractor::DEFAULT_TOP_N,
            max_clusters: themes::DEFAULT_MAX_K,
            cluster_seed: kmeans::DEFAULT_SEED,
            cluster_restarts: kmeans::DEFAULT_N_INIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub filename: String,
    pub word_count: usize,
}

/// One report section: the analyzer's output, or the reason it failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section<T> {
    Ok(T),
    Failed { error: String },
}

impl<T> Section<T> {
    pub fn ok(&self) -> Option<&T> {
        match self {
            Section::Ok(value) => Some(value),
            Section::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Section::Failed { .. })
    }
}

/// The full analysis of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub meta: Meta,
    pub original_text: String,
    pub keywords: Section<Keywords>,
    pub themes: Section<Themes>,
    pub sentiment: Section<SentimentResult>,
    pub sensory: Section<SensoryProfile>,
}

/// Runs the analysis pipeline.
///
/// Holds settings and the sentiment scorer only. Keyword extractors,
/// vectorizers and clusterers are built per call, so one `Analyzer` can
/// serve concurrent requests without locking.
pub struct Analyzer {
    settings: AnalysisSettings,
    sentiment: Box<dyn SentimentScorer>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalysisSettings::default())
    }
}

impl Analyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self::with_scorer(settings, Box::new(LexiconScorer::new()))
    }

    /// Use a different sentiment scorer.
    pub fn with_scorer(settings: AnalysisSettings, sentiment: Box<dyn SentimentScorer>) -> Self {
        Self {
            settings,
            sentiment,
        }
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    pub fn analyze_document(&self, doc: &Document) -> AnalysisReport {
        self.analyze(&doc.filename, &doc.raw_text)
    }

    pub fn analyze(&self, filename: &str, raw_text: &str) -> AnalysisReport {
        let text = clean_text(raw_text);
        let words = word_count(&text);

        let keywords = run_section("keywords", || {
            let extractor = KeywordExtractor::with_top_n(self.settings.top_n);
            match extractor.extract(std::slice::from_ref(&text)) {
                Err(AnalysisError::EmptyVocabulary) => Ok(Keywords::default()),
                other => other,
            }
        });

        let themes = run_section("themes", || {
            let clusterer = ThemeClusterer {
                max_k: self.settings.max_clusters,
                seed: self.settings.cluster_seed,
                n_init: self.settings.cluster_restarts,
                ..ThemeClusterer::default()
            };
            clusterer.cluster(&text)
        });

        let sentiment = run_section("sentiment", || {
            sentiment::analyze(self.sentiment.as_ref(), &text)
        });

        let sensory = run_section("sensory", || Ok(sensory::profile(&text)));

        info!(
            filename,
            word_count = words,
            keywords = keywords.ok().map(|k| k.vocabulary.len()),
            themes = themes.ok().map(|t| t.clusters.len()),
            "Analyzed document"
        );

        AnalysisReport {
            meta: Meta {
                filename: filename.to_string(),
                word_count: words,
            },
            original_text: text,
            keywords,
            themes,
            sentiment,
            sensory,
        }
    }
}

/// Run one analyzer, turning an error or a panic into a failed section.
fn run_section<T>(name: &str, analyzer: impl FnOnce() -> Result<T>) -> Section<T> {
    match catch_unwind(AssertUnwindSafe(analyzer)) {
        Ok(Ok(value)) => Section::Ok(value),
        Ok(Err(e)) => {
            warn!(section = name, error = %e, "Analyzer failed");
            Section::Failed {
                error: e.to_string(),
            }
        }
        Err(panic) => {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "analyzer panicked".to_string());
            warn!(section = name, error = %message, "Analyzer panicked");
            Section::Failed { error: message }
        }
    }
}
