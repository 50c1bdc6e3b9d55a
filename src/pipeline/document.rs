// Input document and the boundary-side decoding of uploaded bytes.

use crate::error::{AnalysisError, Result};

/// Default cap on upload size, enforced before any analysis runs.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// One document to analyze. Immutable and scoped to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub raw_text: String,
}

impl Document {
    pub fn new(filename: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            raw_text: raw_text.into(),
        }
    }

    /// Decode uploaded bytes as UTF-8, dropping invalid sequences.
    ///
    /// Fails when the upload exceeds `max_bytes`, or when it is non-empty
    /// but contains no valid UTF-8 at all.
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8], max_bytes: usize) -> Result<Self> {
        if bytes.len() > max_bytes {
            return Err(AnalysisError::InputTooLarge {
                size: bytes.len(),
                limit: max_bytes,
            });
        }

        let mut text = String::with_capacity(bytes.len());
        for chunk in bytes.utf8_chunks() {
            text.push_str(chunk.valid());
        }

        if text.is_empty() && !bytes.is_empty() {
            return Err(AnalysisError::InvalidEncoding);
        }

        Ok(Self::new(filename, text))
    }
}
