use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::pipeline::document::DEFAULT_MAX_INPUT_BYTES;
use crate::pipeline::AnalysisSettings;

/// Central configuration loaded from environment variables.
///
/// Every value has a default, so an empty environment is valid. The .env
/// file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of keywords returned (INK_TOP_N)
    pub top_n: usize,
    /// Upper bound on theme clusters (INK_MAX_CLUSTERS)
    pub max_clusters: usize,
    /// k-means seed (INK_CLUSTER_SEED)
    pub cluster_seed: u64,
    /// k-means restarts (INK_CLUSTER_RESTARTS)
    pub cluster_restarts: usize,
    /// Uploads larger than this are rejected before analysis (INK_MAX_INPUT_BYTES)
    pub max_input_bytes: usize,
    /// Address the web server binds to (INK_BIND)
    pub bind: String,
    /// Port the web server listens on (INK_PORT)
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        let settings = AnalysisSettings::default();
        Self {
            top_n: settings.top_n,
            max_clusters: settings.max_clusters,
            cluster_seed: settings.cluster_seed,
            cluster_restarts: settings.cluster_restarts,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            bind: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; set but malformed ones are an
    /// error rather than being silently ignored.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            top_n: parse_var("INK_TOP_N", defaults.top_n)?,
            max_clusters: parse_var("INK_MAX_CLUSTERS", defaults.max_clusters)?,
            cluster_seed: parse_var("INK_CLUSTER_SEED", defaults.cluster_seed)?,
            cluster_restarts: parse_var("INK_CLUSTER_RESTARTS", defaults.cluster_restarts)?,
            max_input_bytes: parse_var("INK_MAX_INPUT_BYTES", defaults.max_input_bytes)?,
            bind: env::var("INK_BIND").unwrap_or(defaults.bind),
            port: parse_var("INK_PORT", defaults.port)?,
        })
    }

    /// Check that the analysis settings can actually run.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            anyhow::bail!("INK_TOP_N must be at least 1");
        }
        if self.max_clusters == 0 {
            anyhow::bail!("INK_MAX_CLUSTERS must be at least 1");
        }
        if self.cluster_restarts == 0 {
            anyhow::bail!("INK_CLUSTER_RESTARTS must be at least 1");
        }
        Ok(())
    }

    /// The subset of configuration the analysis core needs.
    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            top_n: self.top_n,
            max_clusters: self.max_clusters,
            cluster_seed: self.cluster_seed,
            cluster_restarts: self.cluster_restarts,
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} is not a valid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}
