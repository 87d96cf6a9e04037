//! Search module
//!
//! Ranked retrieval over a built index and comparison of the two rankings.

pub mod analytics;
mod engine;
mod query;

pub use analytics::{AnalyticsEngine, ComparisonReport, ScoreDistribution, SourceDiversity};
pub use engine::{RankedPair, SearchEngine};
pub use query::QueryEngine;

use crate::loader::DocId;
use serde::{Deserialize, Serialize};

/// One ranked search result with display fields resolved from the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Document id
    pub doc_id: DocId,
    /// Relevance score; ranked results are filtered to strictly positive
    /// scores
    pub score: f64,
    /// Document title
    pub title: String,
    /// Source URL
    pub url: String,
    /// Source label (publisher / site name)
    pub source: String,
    /// Truncated excerpt of the original content
    pub snippet: String,
    /// Label of the algorithm that produced the score
    pub algorithm: String,
}

impl SearchResult {
    /// Create a bare result with only id and score filled in
    pub fn new(doc_id: DocId, score: f64) -> Self {
        Self {
            doc_id,
            score,
            title: String::new(),
            url: String::new(),
            source: String::new(),
            snippet: String::new(),
            algorithm: String::new(),
        }
    }

    /// Set the source label
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}
