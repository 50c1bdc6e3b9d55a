// Paragraph-level theme clustering: TF-IDF features, seeded k-means, and
// the top centroid terms of each cluster.

pub mod kmeans;
pub mod tfidf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AnalysisError, Result};
use crate::text::{split_paragraphs, Tokenizer};
use kmeans::KMeans;
use tfidf::TfIdfVectorizer;

pub const DEFAULT_MAX_K: usize = 4;
const TOP_TERMS_PER_CLUSTER: usize = 10;

/// One theme: a group of paragraphs and the terms that characterize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeCluster {
    pub label: String,
    /// Number of paragraphs assigned to this theme
    pub size: usize,
    /// Highest-weighted centroid terms, strongest first
    pub top_terms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Themes {
    pub clusters: Vec<ThemeCluster>,
}

/// Clusters the paragraphs of one document into themes.
///
/// Holds configuration only. The vectorizer and k-means model are built
/// inside `cluster` and dropped when it returns.
#[derive(Debug, Clone)]
pub struct ThemeClusterer {
    pub max_k: usize,
    pub max_features: usize,
    pub n_init: usize,
    pub seed: u64,
    pub tokenizer: Tokenizer,
}

impl Default for ThemeClusterer {
    fn default() -> Self {
        Self {
            max_k: DEFAULT_MAX_K,
            max_features: tfidf::DEFAULT_MAX_FEATURES,
            n_init: kmeans::DEFAULT_N_INIT,
            seed: kmeans::DEFAULT_SEED,
            tokenizer: Tokenizer::english(),
        }
    }
}

impl ThemeClusterer {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Cluster count before feasibility limits: half the paragraphs, kept
    /// within [2, max_k] once there are more than two paragraphs.
    pub fn requested_k(&self, paragraphs: usize) -> usize {
        let cap = self.max_k.max(1);
        if paragraphs > 2 {
            (paragraphs / 2).max(2).min(cap)
        } else {
            2.min(cap)
        }
    }

    pub fn cluster(&self, text: &str) -> Result<Themes> {
        let paragraphs = split_paragraphs(text);

        let vectorizer = TfIdfVectorizer {
            max_features: self.max_features,
            tokenizer: self.tokenizer,
        };
        let matrix = match vectorizer.fit_transform(&paragraphs) {
            Ok(m) => m,
            Err(AnalysisError::EmptyVocabulary) => {
                debug!(
                    paragraphs = paragraphs.len(),
                    "No usable terms, returning a single empty theme"
                );
                return Ok(Themes {
                    clusters: vec![ThemeCluster {
                        label: theme_label(0),
                        size: paragraphs.len(),
                        top_terms: Vec::new(),
                    }],
                });
            }
            Err(e) => return Err(e),
        };

        let requested = self.requested_k(paragraphs.len());
        let k = requested
            .min(paragraphs.len())
            .min(matrix.n_features())
            .max(1);
        if k < requested {
            debug!(requested, k, "Reduced cluster count to fit the document");
        }

        let fit = KMeans::new(k, self.seed)
            .with_n_init(self.n_init)
            .fit(&matrix.rows)?;
        let sizes = fit.sizes();

        let clusters: Vec<ThemeCluster> = fit
            .centroids
            .iter()
            .enumerate()
            .map(|(i, centroid)| ThemeCluster {
                label: theme_label(i),
                size: sizes[i],
                top_terms: top_terms(centroid, &matrix.terms),
            })
            .collect();

        info!(
            paragraphs = paragraphs.len(),
            features = matrix.n_features(),
            clusters = clusters.len(),
            inertia = fit.inertia,
            "Clustered themes"
        );

        Ok(Themes { clusters })
    }
}

fn theme_label(index: usize) -> String {
    format!("Theme {}", index + 1)
}

/// The strongest non-zero centroid dimensions, descending by weight.
/// Equal weights keep column order.
fn top_terms(centroid: &[f64], terms: &[String]) -> Vec<String> {
    let mut order: Vec<usize> = (0..centroid.len()).filter(|&j| centroid[j] > 0.0).collect();
    order.sort_by(|&a, &b| centroid[b].total_cmp(&centroid[a]));
    order
        .into_iter()
        .take(TOP_TERMS_PER_CLUSTER)
        .map(|j| terms[j].clone())
        .collect()
}
