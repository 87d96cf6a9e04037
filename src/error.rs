//! Error types for the search core
//!
//! Structural faults abort the running operation with enough context to locate
//! them; degenerate numeric cases (zero-length documents, unknown query terms,
//! empty queries) are handled locally by the scorers and never surface here.

use std::fmt;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, EngineError>;

/// Section of a persisted index file, used to pinpoint corruption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Header metadata (document count, average length)
    Header,
    /// Term postings body
    IndexBody,
    /// Document length table
    DocLengths,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Header => "header",
            Section::IndexBody => "index",
            Section::DocLengths => "doc_lengths",
        };
        f.write_str(name)
    }
}

/// Search core errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed input document record; the build aborts and publishes nothing
    #[error("invalid document record ({doc}): {message}")]
    Schema { doc: String, message: String },

    /// Persisted index file could not be parsed
    #[error("corrupt index file ({section} section): {message}")]
    CorruptIndex { section: Section, message: String },

    /// Unknown persistence format tag
    #[error("unsupported index format: {0}")]
    UnsupportedFormat(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Build a schema error for the document identified by `doc`
    pub fn schema(doc: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Schema {
            doc: doc.into(),
            message: message.into(),
        }
    }

    /// Build a corruption error located in `section`
    pub fn corrupt(section: Section, message: impl Into<String>) -> Self {
        EngineError::CorruptIndex {
            section,
            message: message.into(),
        }
    }
}
