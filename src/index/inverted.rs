//! Inverted index data structures
//!
//! The central owned entity of the crate: a term-to-posting map plus the
//! per-document length table and corpus statistics. An index is built once
//! from a complete corpus snapshot and is immutable afterwards; querying
//! never mutates it, so a published index is safe for unlimited concurrent
//! readers.

use crate::loader::DocId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Posting list for one term: document id mapped to term frequency.
///
/// A document absent from the map has frequency 0; stored frequencies are
/// always at least 1. Entries are created explicitly on insert, never by
/// default-on-access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Posting {
    frequencies: HashMap<DocId, u32>,
}

impl Posting {
    /// Create an empty posting list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of the term in `doc_id`
    pub fn add(&mut self, doc_id: DocId, count: u32) {
        *self.frequencies.entry(doc_id).or_insert(0) += count;
    }

    /// Term frequency in `doc_id`, 0 when the document is absent
    pub fn tf(&self, doc_id: DocId) -> u32 {
        self.frequencies.get(&doc_id).copied().unwrap_or(0)
    }

    /// Number of distinct documents containing the term (document frequency)
    pub fn doc_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether `doc_id` contains the term
    pub fn contains(&self, doc_id: DocId) -> bool {
        self.frequencies.contains_key(&doc_id)
    }

    /// Iterate over (doc id, term frequency) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (DocId, u32)> + '_ {
        self.frequencies.iter().map(|(&d, &tf)| (d, tf))
    }

    /// Document ids containing the term, in no particular order
    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.frequencies.keys().copied()
    }

    /// (doc id, term frequency) pairs sorted by ascending document id
    pub fn sorted(&self) -> Vec<(DocId, u32)> {
        let mut pairs: Vec<(DocId, u32)> = self.iter().collect();
        pairs.sort_by_key(|&(doc_id, _)| doc_id);
        pairs
    }

    /// Whether the posting list is empty
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Summary statistics over a built index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of unique terms
    pub num_unique_terms: usize,
    /// Number of documents
    pub num_documents: usize,
    /// Average document length in tokens
    pub avg_doc_length: f64,
    /// Smallest posting-list size
    pub min_postings: usize,
    /// Largest posting-list size
    pub max_postings: usize,
    /// Mean posting-list size
    pub mean_postings: f64,
}

/// Batch-built inverted index with per-document lengths and corpus statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvertedIndex {
    index: HashMap<String, Posting>,
    doc_lengths: HashMap<DocId, usize>,
    num_docs: usize,
    avg_doc_length: f64,
}

impl InvertedIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble an index from its parts.
    ///
    /// Used by the builder and the codecs; callers are responsible for the
    /// structural invariants (every posting doc id has a length entry,
    /// `avg_doc_length` consistent with the length table).
    pub fn from_parts(
        index: HashMap<String, Posting>,
        doc_lengths: HashMap<DocId, usize>,
        num_docs: usize,
        avg_doc_length: f64,
    ) -> Self {
        Self {
            index,
            doc_lengths,
            num_docs,
            avg_doc_length,
        }
    }

    /// Posting list for `term`, if the term is indexed
    pub fn posting(&self, term: &str) -> Option<&Posting> {
        self.index.get(term)
    }

    /// Whether `term` is indexed
    pub fn contains_term(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Number of distinct documents containing `term`
    pub fn document_frequency(&self, term: &str) -> usize {
        self.index.get(term).map_or(0, Posting::doc_count)
    }

    /// Frequency of `term` in `doc_id`, 0 when either is unknown
    pub fn term_frequency(&self, term: &str, doc_id: DocId) -> u32 {
        self.index.get(term).map_or(0, |p| p.tf(doc_id))
    }

    /// Okapi idf: `ln((N - df + 0.5) / (df + 0.5) + 1)`.
    ///
    /// Returns 0 for an unindexed term. No clamping is applied; the +1
    /// shift of this variant keeps the value positive even for terms found
    /// in every document, where it approaches 0.
    pub fn okapi_idf(&self, term: &str) -> f64 {
        let df = self.document_frequency(term);
        if df == 0 {
            return 0.0;
        }
        let n = self.num_docs as f64;
        let df = df as f64;
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
    }

    /// Length of `doc_id` in tokens, 0 when the document is unknown
    pub fn doc_length(&self, doc_id: DocId) -> usize {
        self.doc_lengths.get(&doc_id).copied().unwrap_or(0)
    }

    /// The full document length table
    pub fn doc_lengths(&self) -> &HashMap<DocId, usize> {
        &self.doc_lengths
    }

    /// Iterate over indexed terms in no particular order
    pub fn terms(&self) -> impl Iterator<Item = &String> {
        self.index.keys()
    }

    /// Iterate over (term, posting) pairs in no particular order
    pub fn postings(&self) -> impl Iterator<Item = (&String, &Posting)> {
        self.index.iter()
    }

    /// Number of unique terms
    pub fn num_unique_terms(&self) -> usize {
        self.index.len()
    }

    /// Number of indexed documents
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Average document length in tokens (0 for an empty index)
    pub fn avg_doc_length(&self) -> f64 {
        self.avg_doc_length
    }

    /// Whether the index holds no documents
    pub fn is_empty(&self) -> bool {
        self.num_docs == 0
    }

    /// Summary statistics over the index
    pub fn stats(&self) -> IndexStats {
        let sizes: Vec<usize> = self.index.values().map(Posting::doc_count).collect();
        let (min_postings, max_postings, mean_postings) = if sizes.is_empty() {
            (0, 0, 0.0)
        } else {
            let min = sizes.iter().copied().min().unwrap_or(0);
            let max = sizes.iter().copied().max().unwrap_or(0);
            let mean = sizes.iter().sum::<usize>() as f64 / sizes.len() as f64;
            (min, max, mean)
        };

        IndexStats {
            num_unique_terms: self.index.len(),
            num_documents: self.num_docs,
            avg_doc_length: self.avg_doc_length,
            min_postings,
            max_postings,
            mean_postings,
        }
    }
}
