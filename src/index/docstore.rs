//! Document store
//!
//! Holds the full corpus records keyed by document id so ranked doc ids can
//! be turned into displayable results (title, URL, source, snippet text).

use crate::loader::{DocId, Document};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Document store for retrieving full document content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Docstore {
    documents: HashMap<DocId, Document>,
}

impl Docstore {
    /// Create a new empty document store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a corpus snapshot; later duplicates win
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut store = Self::new();
        for doc in documents {
            store.add(doc.clone());
        }
        store
    }

    /// Add a document to the store
    pub fn add(&mut self, doc: Document) {
        self.documents.insert(doc.id, doc);
    }

    /// Get a document by id
    pub fn get(&self, doc_id: DocId) -> Option<&Document> {
        self.documents.get(&doc_id)
    }

    /// Whether a document exists
    pub fn contains(&self, doc_id: DocId) -> bool {
        self.documents.contains_key(&doc_id)
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All distinct source labels, sorted
    pub fn sources(&self) -> Vec<String> {
        let mut sources: Vec<String> = self
            .documents
            .values()
            .map(|doc| doc.source.clone())
            .collect();
        sources.sort();
        sources.dedup();
        sources
    }
}
