// Analysis pipeline — the document model and the orchestrator that runs
// every analyzer over one normalized text.

pub mod analysis;
pub mod document;

pub use analysis::{AnalysisReport, AnalysisSettings, Analyzer, Meta, Section};
pub use document::Document;
