//! Index builder
//!
//! Single-pass batch construction of an [`InvertedIndex`] from a fully
//! materialized corpus snapshot. A build either publishes a complete index or
//! fails with a schema error; there is no partial result.

use super::{InvertedIndex, Posting};
use crate::error::{EngineError, Result};
use crate::loader::{load_corpus, DocId, Document};
use std::collections::HashMap;
use std::path::Path;

/// Batch index builder
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexBuilder;

impl IndexBuilder {
    /// Create a new index builder
    pub fn new() -> Self {
        Self
    }

    /// Build an index from a corpus snapshot.
    ///
    /// An empty corpus yields an empty index (queries against it return no
    /// results). A duplicate document id aborts the build with a schema
    /// error.
    pub fn build(&self, documents: &[Document]) -> Result<InvertedIndex> {
        let mut index: HashMap<String, Posting> = HashMap::new();
        let mut doc_lengths: HashMap<DocId, usize> = HashMap::new();
        let mut total_length = 0usize;

        for doc in documents {
            let length = doc.tokens.len();
            if doc_lengths.insert(doc.id, length).is_some() {
                return Err(EngineError::schema(
                    format!("id {}", doc.id),
                    "duplicate document id",
                ));
            }
            total_length += length;

            // Count term occurrences locally, then merge into the postings.
            let mut term_freqs: HashMap<&str, u32> = HashMap::new();
            for token in &doc.tokens {
                *term_freqs.entry(token.as_str()).or_insert(0) += 1;
            }
            for (term, freq) in term_freqs {
                index
                    .entry(term.to_string())
                    .or_insert_with(Posting::new)
                    .add(doc.id, freq);
            }
        }

        let num_docs = documents.len();
        let avg_doc_length = if num_docs > 0 {
            total_length as f64 / num_docs as f64
        } else {
            0.0
        };

        tracing::info!(
            num_docs,
            unique_terms = index.len(),
            avg_doc_length,
            "index built"
        );

        Ok(InvertedIndex::from_parts(
            index,
            doc_lengths,
            num_docs,
            avg_doc_length,
        ))
    }

    /// Load a preprocessed corpus file and build an index from it
    pub fn build_from_json<P: AsRef<Path>>(&self, path: P) -> Result<InvertedIndex> {
        let documents = load_corpus(path)?;
        self.build(&documents)
    }
}
