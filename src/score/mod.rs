//! Relevance scoring
//!
//! Pure, stateless scoring functions over a built index. Both scorers return
//! 0 for a zero-length document and silently skip query terms that are not in
//! the index; those are neutral outcomes, not errors.

use crate::config::{DEFAULT_B, DEFAULT_K1};
use crate::index::InvertedIndex;
use crate::loader::DocId;

/// Relevance scorer over an immutable index
pub trait Scorer {
    /// Score `doc_id` against the query tokens
    fn score(&self, index: &InvertedIndex, query_tokens: &[String], doc_id: DocId) -> f64;

    /// Human-readable algorithm label carried on search results
    fn label(&self) -> &'static str;
}

/// TF-IDF scoring: `(tf / doc_length) * ln(N / df)` summed over query terms.
///
/// A term with document frequency 0 contributes nothing; a term found in
/// every document contributes exactly 0 (`ln(1)`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdf;

impl Scorer for TfIdf {
    fn score(&self, index: &InvertedIndex, query_tokens: &[String], doc_id: DocId) -> f64 {
        let doc_length = index.doc_length(doc_id);
        if doc_length == 0 {
            return 0.0;
        }

        let mut score = 0.0;
        for term in query_tokens {
            if !index.contains_term(term) {
                continue;
            }
            let df = index.document_frequency(term);
            if df == 0 {
                continue;
            }
            let tf = index.term_frequency(term, doc_id) as f64 / doc_length as f64;
            let idf = (index.num_docs() as f64 / df as f64).ln();
            score += tf * idf;
        }
        score
    }

    fn label(&self) -> &'static str {
        "TF-IDF"
    }
}

/// Okapi BM25 scoring with saturation parameter `k1` and length
/// normalization `b`.
///
/// Uses the Okapi idf `ln((N - df + 0.5) / (df + 0.5) + 1)`. Idf values are
/// used exactly as the formula produces them, with no clamping or floor;
/// for terms found in nearly every document the contribution approaches 0.
#[derive(Debug, Clone, Copy)]
pub struct Bm25 {
    /// Term-frequency saturation parameter
    pub k1: f64,
    /// Length-normalization parameter
    pub b: f64,
}

impl Default for Bm25 {
    fn default() -> Self {
        Self {
            k1: DEFAULT_K1,
            b: DEFAULT_B,
        }
    }
}

impl Bm25 {
    /// Create a BM25 scorer with the default parameters (k1 = 1.5, b = 0.75)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a BM25 scorer with explicit parameters
    pub fn with_params(k1: f64, b: f64) -> Self {
        Self { k1, b }
    }
}

impl Scorer for Bm25 {
    fn score(&self, index: &InvertedIndex, query_tokens: &[String], doc_id: DocId) -> f64 {
        let doc_length = index.doc_length(doc_id);
        if doc_length == 0 {
            return 0.0;
        }

        let length_ratio = doc_length as f64 / index.avg_doc_length();
        let mut score = 0.0;
        for term in query_tokens {
            if !index.contains_term(term) {
                continue;
            }
            let tf = index.term_frequency(term, doc_id) as f64;
            let idf = index.okapi_idf(term);

            let numerator = tf * (self.k1 + 1.0);
            let denominator = tf + self.k1 * (1.0 - self.b + self.b * length_ratio);
            score += idf * (numerator / denominator);
        }
        score
    }

    fn label(&self) -> &'static str {
        "BM25"
    }
}
