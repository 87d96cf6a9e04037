//! Preprocessed corpus loading
//!
//! Parses the JSON corpus file emitted by the external preprocessing pipeline
//! into validated [`Document`] records. A record missing its `id` or `tokens`
//! fails the whole load; nothing partial is returned.

use super::{DocId, Document};
use crate::error::{EngineError, Result};
use std::fs;
use std::path::Path;

/// Raw corpus record with optional fields, validated before use
#[derive(serde::Deserialize)]
struct RawRecord {
    id: Option<DocId>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    original_content: String,
    tokens: Option<Vec<String>>,
    #[serde(default)]
    processed_text: String,
    token_count: Option<usize>,
}

/// Load a preprocessed corpus from a JSON file
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let content = fs::read_to_string(path.as_ref())?;
    let documents = parse_corpus(&content)?;
    tracing::info!(
        count = documents.len(),
        path = %path.as_ref().display(),
        "corpus loaded"
    );
    Ok(documents)
}

/// Parse a JSON array of corpus records
pub fn parse_corpus(json: &str) -> Result<Vec<Document>> {
    let records: Vec<RawRecord> = serde_json::from_str(json)
        .map_err(|e| EngineError::schema("corpus", format!("not a valid corpus array: {e}")))?;

    let mut documents = Vec::with_capacity(records.len());
    for (pos, record) in records.into_iter().enumerate() {
        let id = record
            .id
            .ok_or_else(|| EngineError::schema(format!("record #{pos}"), "missing field `id`"))?;
        let tokens = record.tokens.ok_or_else(|| {
            EngineError::schema(format!("record #{pos} (id {id})"), "missing field `tokens`")
        })?;
        let token_count = record.token_count.unwrap_or(tokens.len());
        let processed_text = if record.processed_text.is_empty() {
            tokens.join(" ")
        } else {
            record.processed_text
        };

        documents.push(Document {
            id,
            title: record.title,
            url: record.url,
            source: record.source,
            original_content: record.original_content,
            tokens,
            processed_text,
            token_count,
        });
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corpus_complete_record() {
        let json = r#"[{
            "id": 0,
            "title": "Judi online",
            "url": "https://example.com/judi",
            "source": "kompas",
            "original_content": "Full article text",
            "tokens": ["judi", "online"],
            "processed_text": "judi online",
            "token_count": 2
        }]"#;

        let docs = parse_corpus(json).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, 0);
        assert_eq!(docs[0].tokens, vec!["judi", "online"]);
        assert_eq!(docs[0].source, "kompas");
    }

    #[test]
    fn test_parse_corpus_fills_derived_fields() {
        let json = r#"[{"id": 1, "tokens": ["a", "b", "c"]}]"#;
        let docs = parse_corpus(json).unwrap();
        assert_eq!(docs[0].token_count, 3);
        assert_eq!(docs[0].processed_text, "a b c");
        assert_eq!(docs[0].title, "");
    }

    #[test]
    fn test_parse_corpus_missing_id_fails() {
        let json = r#"[{"tokens": ["a"]}]"#;
        let err = parse_corpus(json).unwrap_err();
        match err {
            EngineError::Schema { doc, message } => {
                assert_eq!(doc, "record #0");
                assert!(message.contains("id"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_corpus_missing_tokens_fails() {
        let json = r#"[{"id": 0, "tokens": ["x"]}, {"id": 5, "title": "No tokens"}]"#;
        let err = parse_corpus(json).unwrap_err();
        match err {
            EngineError::Schema { doc, message } => {
                assert!(doc.contains("record #1"));
                assert!(doc.contains("id 5"));
                assert!(message.contains("tokens"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_corpus_invalid_json_fails() {
        let err = parse_corpus("not json").unwrap_err();
        assert!(matches!(err, EngineError::Schema { .. }));
    }

    #[test]
    fn test_parse_corpus_empty_array() {
        let docs = parse_corpus("[]").unwrap();
        assert!(docs.is_empty());
    }
}
