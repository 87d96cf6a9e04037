//! Search configuration structures
//!
//! Defines the tunable knobs for ranked retrieval: result count, BM25
//! parameters, and snippet length.

use serde::{Deserialize, Serialize};

/// Default number of results returned by a search
pub const DEFAULT_TOP_K: usize = 10;

/// Default BM25 term-frequency saturation parameter
pub const DEFAULT_K1: f64 = 1.5;

/// Default BM25 length-normalization parameter
pub const DEFAULT_B: f64 = 0.75;

/// Default maximum snippet length in characters
pub const DEFAULT_SNIPPET_MAX_LENGTH: usize = 200;

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of results to return
    pub top_k: usize,
    /// BM25 term-frequency saturation parameter
    pub k1: f64,
    /// BM25 length-normalization parameter (0 = no normalization, 1 = full)
    pub b: f64,
    /// Maximum snippet length in characters before truncation
    pub snippet_max_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            k1: DEFAULT_K1,
            b: DEFAULT_B,
            snippet_max_length: DEFAULT_SNIPPET_MAX_LENGTH,
        }
    }
}

impl SearchConfig {
    /// Create a new search configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of results to return
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the BM25 parameters
    pub fn with_bm25_params(mut self, k1: f64, b: f64) -> Self {
        self.k1 = k1;
        self.b = b;
        self
    }

    /// Set the maximum snippet length
    pub fn with_snippet_max_length(mut self, max_length: usize) -> Self {
        self.snippet_max_length = max_length;
        self
    }
}
