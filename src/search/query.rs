//! Ranked retrieval
//!
//! Finds candidate documents for a tokenized query and produces a ranked
//! top-k list with a chosen scorer.

use crate::index::InvertedIndex;
use crate::loader::DocId;
use crate::score::Scorer;
use std::collections::HashSet;

/// Query engine over an immutable index.
///
/// Holds only a shared reference; any number of query engines may run
/// against the same index concurrently.
pub struct QueryEngine<'a> {
    index: &'a InvertedIndex,
}

impl<'a> QueryEngine<'a> {
    /// Create a query engine over `index`
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }

    /// Rank documents for an already-tokenized query.
    ///
    /// The candidate set is the union of posting doc ids over query terms
    /// present in the index; an empty query or a query with no known terms
    /// yields an empty list. Candidates with non-positive scores are
    /// dropped. Results are ordered by score descending, with ascending
    /// document id as the deterministic tie-break, and truncated to `top_k`.
    pub fn search(
        &self,
        query_tokens: &[String],
        top_k: usize,
        scorer: &dyn Scorer,
    ) -> Vec<(DocId, f64)> {
        let mut candidates: HashSet<DocId> = HashSet::new();
        for term in query_tokens {
            if let Some(posting) = self.index.posting(term) {
                candidates.extend(posting.doc_ids());
            }
        }
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(DocId, f64)> = candidates
            .into_iter()
            .map(|doc_id| (doc_id, scorer.score(self.index, query_tokens, doc_id)))
            .filter(|&(_, score)| score > 0.0)
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(top_k);
        scored
    }
}
