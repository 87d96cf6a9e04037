//! Index persistence codecs
//!
//! Three interchangeable encodings of the same index behind one save/load
//! contract: binary (bincode blob, production source of truth), text
//! (human-readable dump), and structured (JSON). The codec is always picked
//! by an explicit format tag; file contents and extensions are never sniffed.

mod binary;
mod structured;
mod text;

pub use binary::BinaryCodec;
pub use structured::StructuredCodec;
pub use text::TextCodec;

use crate::error::{EngineError, Result};
use crate::index::InvertedIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Save/load contract shared by all index encodings.
///
/// `load(save(idx))` reproduces the index mapping, the length table,
/// `num_docs`, and `avg_doc_length` (the text format rounds the average to
/// two decimals; the other two are lossless).
pub trait IndexCodec {
    /// Persist `index` to `path`
    fn save(&self, index: &InvertedIndex, path: &Path) -> Result<()>;

    /// Load an index from `path`
    fn load(&self, path: &Path) -> Result<InvertedIndex>;
}

/// Persistence format tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexFormat {
    /// Single opaque bincode blob, full type fidelity
    Binary,
    /// Human-readable dump, near-lossless
    Text,
    /// JSON with string doc-id keys, coerced back to integers on load
    Structured,
}

impl IndexFormat {
    /// The codec implementing this format
    pub fn codec(&self) -> Box<dyn IndexCodec> {
        match self {
            IndexFormat::Binary => Box::new(BinaryCodec),
            IndexFormat::Text => Box::new(TextCodec::new()),
            IndexFormat::Structured => Box::new(StructuredCodec),
        }
    }
}

impl fmt::Display for IndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexFormat::Binary => "binary",
            IndexFormat::Text => "text",
            IndexFormat::Structured => "structured",
        };
        f.write_str(name)
    }
}

impl FromStr for IndexFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(IndexFormat::Binary),
            "text" | "txt" => Ok(IndexFormat::Text),
            "structured" | "json" => Ok(IndexFormat::Structured),
            other => Err(EngineError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Save `index` to `path` in the given format
pub fn save_index(index: &InvertedIndex, path: &Path, format: IndexFormat) -> Result<()> {
    format.codec().save(index, path)
}

/// Load an index from `path` in the given format
pub fn load_index(path: &Path, format: IndexFormat) -> Result<InvertedIndex> {
    format.codec().load(path)
}
