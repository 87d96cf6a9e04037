//! Document data structures
//!
//! Defines the input document record produced by the external
//! crawler/tokenizer pipeline. Tokenization, stemming, and stopword removal
//! happen upstream; this crate only consumes the finished token sequence.

use serde::{Deserialize, Serialize};

/// Document identifier
pub type DocId = u32;

/// A tokenized document ready for indexing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier
    pub id: DocId,
    /// Document title
    pub title: String,
    /// Source URL
    pub url: String,
    /// Source label (publisher / site name)
    pub source: String,
    /// Raw article text, used for snippet extraction
    pub original_content: String,
    /// Normalized token sequence produced by the external preprocessor
    pub tokens: Vec<String>,
    /// Tokens joined back into a single string
    pub processed_text: String,
    /// Number of tokens
    pub token_count: usize,
}

impl Document {
    /// Create a document from an id, title, and token list
    pub fn new(id: DocId, title: impl Into<String>, tokens: Vec<String>) -> Self {
        let processed_text = tokens.join(" ");
        let token_count = tokens.len();
        Self {
            id,
            title: title.into(),
            url: String::new(),
            source: String::new(),
            original_content: String::new(),
            tokens,
            processed_text,
            token_count,
        }
    }

    /// Set the source label
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the source URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the raw article text
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.original_content = content.into();
        self
    }

    /// Document length in tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the document has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_document_creation() {
        let doc = Document::new(3, "Scam ring dismantled", toks(&["scam", "ring"]))
            .with_source("antaranews")
            .with_url("https://example.com/a")
            .with_content("A scam ring was dismantled...");

        assert_eq!(doc.id, 3);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.token_count, 2);
        assert_eq!(doc.processed_text, "scam ring");
        assert_eq!(doc.source, "antaranews");
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_document_empty_tokens() {
        let doc = Document::new(0, "Empty", vec![]);
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
        assert_eq!(doc.processed_text, "");
    }

    #[test]
    fn test_document_serialization() {
        let doc = Document::new(7, "Title", toks(&["a", "b"])).with_source("detik");
        let json = serde_json::to_string(&doc).unwrap();
        let deserialized: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, doc);
    }
}
