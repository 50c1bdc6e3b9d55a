// Ink Insights: single-document text analytics.
//
// This is the library root. Each analyzer lives in its own module and the
// pipeline module composes them into one report.

pub mod config;
pub mod error;
pub mod keywords;
pub mod output;
pub mod pipeline;
pub mod sensory;
pub mod sentiment;
pub mod text;
pub mod themes;

#[cfg(feature = "web")]
pub mod web;

pub use error::AnalysisError;
pub use pipeline::{AnalysisReport, AnalysisSettings, Analyzer, Document};
