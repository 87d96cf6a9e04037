//! Structured (JSON) index codec
//!
//! Cross-platform backup format: `{metadata, index, doc_lengths}` with
//! document-id keys written as strings (JSON object keys must be strings)
//! and coerced back to integers on load.

use super::IndexCodec;
use crate::error::{EngineError, Result, Section};
use crate::index::{InvertedIndex, Posting};
use crate::loader::DocId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct Metadata {
    num_docs: usize,
    num_unique_terms: usize,
    avg_doc_length: f64,
}

/// Wire shape of the structured format
#[derive(Debug, Serialize)]
struct Wire {
    metadata: Metadata,
    index: BTreeMap<String, BTreeMap<String, u32>>,
    doc_lengths: BTreeMap<String, usize>,
}

/// JSON codec
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredCodec;

impl StructuredCodec {
    /// Render the index as pretty-printed JSON
    pub fn render(&self, index: &InvertedIndex) -> String {
        let wire = Wire {
            metadata: Metadata {
                num_docs: index.num_docs(),
                num_unique_terms: index.num_unique_terms(),
                avg_doc_length: index.avg_doc_length(),
            },
            index: index
                .postings()
                .map(|(term, posting)| {
                    let postings = posting
                        .iter()
                        .map(|(doc_id, tf)| (doc_id.to_string(), tf))
                        .collect();
                    (term.clone(), postings)
                })
                .collect(),
            doc_lengths: index
                .doc_lengths()
                .iter()
                .map(|(doc_id, &length)| (doc_id.to_string(), length))
                .collect(),
        };
        // Wire only holds maps, numbers, and strings; serialization cannot fail.
        serde_json::to_string_pretty(&wire).unwrap()
    }

    /// Parse the structured JSON back into an index
    pub fn parse(&self, content: &str) -> Result<InvertedIndex> {
        let value: Value = serde_json::from_str(content).map_err(|e| {
            EngineError::corrupt(Section::Header, format!("not valid JSON: {e}"))
        })?;

        let metadata: Metadata = value
            .get("metadata")
            .cloned()
            .ok_or_else(|| EngineError::corrupt(Section::Header, "missing `metadata` object"))
            .and_then(|m| {
                serde_json::from_value(m).map_err(|e| {
                    EngineError::corrupt(Section::Header, format!("bad metadata: {e}"))
                })
            })?;

        let index_obj = value
            .get("index")
            .and_then(Value::as_object)
            .ok_or_else(|| EngineError::corrupt(Section::IndexBody, "missing `index` object"))?;
        let mut index: HashMap<String, Posting> = HashMap::with_capacity(index_obj.len());
        for (term, postings) in index_obj {
            let postings_obj = postings.as_object().ok_or_else(|| {
                EngineError::corrupt(
                    Section::IndexBody,
                    format!("postings for '{term}' are not an object"),
                )
            })?;
            let mut posting = Posting::new();
            for (doc_key, tf) in postings_obj {
                let doc_id = parse_doc_key(doc_key, Section::IndexBody)?;
                let tf = tf.as_u64().ok_or_else(|| {
                    EngineError::corrupt(
                        Section::IndexBody,
                        format!("bad term frequency for '{term}' doc {doc_key}"),
                    )
                })?;
                posting.add(doc_id, tf as u32);
            }
            index.insert(term.clone(), posting);
        }

        let lengths_obj = value
            .get("doc_lengths")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                EngineError::corrupt(Section::DocLengths, "missing `doc_lengths` object")
            })?;
        let mut doc_lengths: HashMap<DocId, usize> = HashMap::with_capacity(lengths_obj.len());
        for (doc_key, length) in lengths_obj {
            let doc_id = parse_doc_key(doc_key, Section::DocLengths)?;
            let length = length.as_u64().ok_or_else(|| {
                EngineError::corrupt(
                    Section::DocLengths,
                    format!("bad length for doc {doc_key}"),
                )
            })?;
            doc_lengths.insert(doc_id, length as usize);
        }

        Ok(InvertedIndex::from_parts(
            index,
            doc_lengths,
            metadata.num_docs,
            metadata.avg_doc_length,
        ))
    }
}

/// Coerce a string doc-id key back to an integer
fn parse_doc_key(key: &str, section: Section) -> Result<DocId> {
    key.parse().map_err(|_| {
        EngineError::corrupt(section, format!("doc id key `{key}` is not an integer"))
    })
}

impl IndexCodec for StructuredCodec {
    fn save(&self, index: &InvertedIndex, path: &Path) -> Result<()> {
        fs::write(path, self.render(index))?;
        tracing::info!(path = %path.display(), "structured index saved");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<InvertedIndex> {
        let content = fs::read_to_string(path)?;
        let index = self.parse(&content)?;
        tracing::info!(
            path = %path.display(),
            num_docs = index.num_docs(),
            unique_terms = index.num_unique_terms(),
            "structured index loaded"
        );
        Ok(index)
    }
}
