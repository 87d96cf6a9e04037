//! dualrank: batch inverted-index search core with dual ranked retrieval
//!
//! This library builds an immutable inverted index from an already-tokenized
//! corpus snapshot, persists it in three interchangeable formats, ranks
//! documents with either TF-IDF or Okapi BM25, and compares the two rankings.
//!
//! # Features
//!
//! - Single-pass batch index construction over a materialized corpus
//! - Binary (bincode), text (human-readable), and structured (JSON)
//!   persistence behind one codec contract
//! - TF-IDF and Okapi BM25 scoring (k1/b configurable; idf used exactly as
//!   the formula produces it, no clamping)
//! - Deterministic top-k retrieval: score descending, ascending doc id on ties
//! - Ranking comparison: overlap, score distribution, source diversity,
//!   Spearman rank correlation
//!
//! Crawling, tokenization, and the interactive command surface are external
//! collaborators; this crate consumes finished token sequences and returns
//! ranked results.
//!
//! # Modules
//!
//! - `config`: search configuration (top-k, BM25 parameters, snippet length)
//! - `error`: typed error taxonomy
//! - `loader`: input document records and corpus-file loading
//! - `index`: the inverted index, its builder, and the document store
//! - `codec`: the three persistence formats
//! - `score`: TF-IDF and BM25 scorers
//! - `search`: ranked retrieval, result materialization, and analytics

pub mod codec;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod score;
pub mod search;

// Re-export commonly used types
pub use codec::{load_index, save_index, IndexCodec, IndexFormat};
pub use config::SearchConfig;
pub use error::{EngineError, Result, Section};
pub use index::{Docstore, IndexBuilder, IndexStats, InvertedIndex, Posting};
pub use loader::{DocId, Document};
pub use score::{Bm25, Scorer, TfIdf};
pub use search::{
    AnalyticsEngine, ComparisonReport, QueryEngine, RankedPair, SearchEngine, SearchResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_exists() {
        assert_eq!(NAME, "dualrank");
    }
}
