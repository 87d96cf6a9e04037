//! Search engine
//!
//! Wraps ranked retrieval with the document store so ranked doc ids come
//! back as displayable results: title, URL, source, and a snippet of the
//! original content.

use super::{QueryEngine, SearchResult};
use crate::codec::{load_index, IndexFormat};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::{Docstore, InvertedIndex};
use crate::loader::{load_corpus, DocId};
use crate::score::{Bm25, Scorer, TfIdf};
use std::path::Path;

/// TF-IDF and BM25 rankings for the same query and top-k
#[derive(Debug, Clone)]
pub struct RankedPair {
    /// TF-IDF ranking
    pub tfidf: Vec<SearchResult>,
    /// BM25 ranking
    pub bm25: Vec<SearchResult>,
}

/// Search engine over a built index and its corpus
pub struct SearchEngine {
    index: InvertedIndex,
    docstore: Docstore,
}

impl SearchEngine {
    /// Create a search engine from a built index and document store
    pub fn new(index: InvertedIndex, docstore: Docstore) -> Self {
        Self { index, docstore }
    }

    /// Load a persisted index and corpus file
    pub fn from_files<P: AsRef<Path>>(
        index_path: P,
        format: IndexFormat,
        corpus_path: P,
    ) -> Result<Self> {
        let index = load_index(index_path.as_ref(), format)?;
        let documents = load_corpus(corpus_path)?;
        let docstore = Docstore::from_documents(&documents);
        tracing::info!(
            num_docs = index.num_docs(),
            corpus_docs = docstore.len(),
            "search engine ready"
        );
        Ok(Self::new(index, docstore))
    }

    /// The underlying index
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// The underlying document store
    pub fn docstore(&self) -> &Docstore {
        &self.docstore
    }

    /// BM25 ranking for an already-tokenized query
    pub fn search_bm25(&self, query_tokens: &[String], config: &SearchConfig) -> Vec<SearchResult> {
        let scorer = Bm25::with_params(config.k1, config.b);
        self.search_with(query_tokens, config, &scorer)
    }

    /// TF-IDF ranking for an already-tokenized query
    pub fn search_tfidf(
        &self,
        query_tokens: &[String],
        config: &SearchConfig,
    ) -> Vec<SearchResult> {
        self.search_with(query_tokens, config, &TfIdf)
    }

    /// Both rankings for the same query, for side-by-side comparison
    pub fn search_both(&self, query_tokens: &[String], config: &SearchConfig) -> RankedPair {
        RankedPair {
            tfidf: self.search_tfidf(query_tokens, config),
            bm25: self.search_bm25(query_tokens, config),
        }
    }

    /// Rank with an arbitrary scorer and resolve display fields
    pub fn search_with(
        &self,
        query_tokens: &[String],
        config: &SearchConfig,
        scorer: &dyn Scorer,
    ) -> Vec<SearchResult> {
        let ranked = QueryEngine::new(&self.index).search(query_tokens, config.top_k, scorer);
        self.materialize(ranked, scorer.label(), config.snippet_max_length)
    }

    fn materialize(
        &self,
        ranked: Vec<(DocId, f64)>,
        algorithm: &str,
        snippet_max_length: usize,
    ) -> Vec<SearchResult> {
        let mut results = Vec::with_capacity(ranked.len());
        for (doc_id, score) in ranked {
            let Some(doc) = self.docstore.get(doc_id) else {
                tracing::warn!(doc_id, "ranked document missing from docstore, skipping");
                continue;
            };
            results.push(SearchResult {
                doc_id,
                score,
                title: doc.title.clone(),
                url: doc.url.clone(),
                source: doc.source.clone(),
                snippet: make_snippet(&doc.original_content, snippet_max_length),
                algorithm: algorithm.to_string(),
            });
        }
        results
    }
}

/// Prefix of `content` limited to `max_length` characters, with an ellipsis
/// marker appended when anything was cut off
fn make_snippet(content: &str, max_length: usize) -> String {
    let mut snippet: String = content.chars().take(max_length).collect();
    if content.chars().count() > max_length {
        snippet.push_str("...");
    }
    snippet
}
