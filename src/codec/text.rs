//! Text index codec
//!
//! Human-readable dump of the index, kept byte-compatible with the existing
//! persisted files: a banner and metadata header, one block per term sorted
//! lexicographically with its postings sorted by ascending document id, then
//! the document length table sorted by ascending document id.
//!
//! Near-lossless: `avg_doc_length` is written with two decimals, everything
//! else round-trips exactly. Insertion order is not preserved; retrieval
//! never depends on it.

use super::IndexCodec;
use crate::error::{EngineError, Result, Section};
use crate::index::{InvertedIndex, Posting};
use crate::loader::DocId;
use regex::Regex;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

fn heavy_rule() -> String {
    "=".repeat(80)
}

fn light_rule() -> String {
    "-".repeat(80)
}

/// Human-readable dump codec
#[derive(Debug)]
pub struct TextCodec {
    posting_re: Regex,
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCodec {
    /// Create a new text codec
    pub fn new() -> Self {
        // Posting pairs look like `(Doc12: 3)`
        let posting_re = Regex::new(r"\(Doc(\d+):\s*(\d+)\)").unwrap();
        Self { posting_re }
    }

    /// Render the index into the text layout
    pub fn render(&self, index: &InvertedIndex) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", heavy_rule());
        let _ = writeln!(out, "INVERTED INDEX - TEXT FORMAT");
        let _ = writeln!(out, "{}\n", heavy_rule());

        let _ = writeln!(out, "Total Documents: {}", index.num_docs());
        let _ = writeln!(out, "Total Unique Terms: {}", index.num_unique_terms());
        let _ = writeln!(
            out,
            "Average Document Length: {:.2} tokens",
            index.avg_doc_length()
        );
        let _ = writeln!(out, "\n{}\n", heavy_rule());

        let _ = writeln!(out, "INVERTED INDEX:");
        let _ = writeln!(out, "{}", light_rule());

        let mut entries: Vec<(&String, &Posting)> = index.postings().collect();
        entries.sort_by_key(|&(term, _)| term);
        for (term, posting) in entries {
            let _ = writeln!(out, "\nTERM: '{term}'");
            let _ = writeln!(out, "  Document Frequency: {}", posting.doc_count());
            let pairs: Vec<String> = posting
                .sorted()
                .into_iter()
                .map(|(doc_id, tf)| format!("(Doc{doc_id}: {tf})"))
                .collect();
            let _ = writeln!(out, "  Postings: {}", pairs.join(", "));
        }

        let _ = writeln!(out, "\n{}", heavy_rule());
        let _ = writeln!(out, "DOCUMENT LENGTHS:");
        let _ = writeln!(out, "{}", light_rule());

        let mut lengths: Vec<(DocId, usize)> = index
            .doc_lengths()
            .iter()
            .map(|(&d, &l)| (d, l))
            .collect();
        lengths.sort_by_key(|&(doc_id, _)| doc_id);
        for (doc_id, length) in lengths {
            let _ = writeln!(out, "Doc {doc_id}: {length} tokens");
        }

        let _ = writeln!(out, "\n{}", heavy_rule());
        let _ = writeln!(out, "END OF INDEX");
        let _ = writeln!(out, "{}", heavy_rule());

        out
    }

    /// Parse a text-format dump back into an index
    pub fn parse(&self, content: &str) -> Result<InvertedIndex> {
        let mut num_docs: Option<usize> = None;
        let mut avg_doc_length: Option<f64> = None;
        let mut index: HashMap<String, Posting> = HashMap::new();
        let mut doc_lengths: HashMap<DocId, usize> = HashMap::new();
        let mut current_term: Option<String> = None;
        let mut in_lengths = false;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('=') || line.starts_with('-') {
                continue;
            }

            if let Some(rest) = line.strip_prefix("Total Documents:") {
                let value = rest.trim();
                num_docs = Some(value.parse().map_err(|_| {
                    EngineError::corrupt(Section::Header, format!("bad document count `{value}`"))
                })?);
            } else if line.strip_prefix("Total Unique Terms:").is_some() {
                // Informational only; the term count is rederived from the
                // parsed postings.
            } else if let Some(rest) = line.strip_prefix("Average Document Length:") {
                let value = rest.trim().split_whitespace().next().ok_or_else(|| {
                    EngineError::corrupt(Section::Header, "missing average document length")
                })?;
                avg_doc_length = Some(value.parse().map_err(|_| {
                    EngineError::corrupt(Section::Header, format!("bad average length `{value}`"))
                })?);
            } else if line == "INVERTED INDEX:" {
                in_lengths = false;
            } else if line == "DOCUMENT LENGTHS:" {
                in_lengths = true;
                current_term = None;
            } else if let Some(rest) = line.strip_prefix("TERM:") {
                let quoted = rest.trim();
                let term = quoted
                    .strip_prefix('\'')
                    .and_then(|s| s.strip_suffix('\''))
                    .ok_or_else(|| {
                        EngineError::corrupt(
                            Section::IndexBody,
                            format!("unquoted term `{quoted}`"),
                        )
                    })?;
                index.entry(term.to_string()).or_insert_with(Posting::new);
                current_term = Some(term.to_string());
            } else if line.strip_prefix("Document Frequency:").is_some() {
                // Redundant with the posting pairs; checked implicitly by the
                // posting-count invariant.
            } else if let Some(rest) = line.strip_prefix("Postings:") {
                let term = current_term.as_ref().ok_or_else(|| {
                    EngineError::corrupt(Section::IndexBody, "postings line outside a term block")
                })?;
                let posting = index.entry(term.clone()).or_insert_with(Posting::new);
                let mut matched = false;
                for caps in self.posting_re.captures_iter(rest) {
                    let doc_id: DocId = caps[1].parse().map_err(|_| {
                        EngineError::corrupt(
                            Section::IndexBody,
                            format!("bad doc id in postings for '{term}'"),
                        )
                    })?;
                    let tf: u32 = caps[2].parse().map_err(|_| {
                        EngineError::corrupt(
                            Section::IndexBody,
                            format!("bad term frequency in postings for '{term}'"),
                        )
                    })?;
                    posting.add(doc_id, tf);
                    matched = true;
                }
                if !matched && !rest.trim().is_empty() {
                    return Err(EngineError::corrupt(
                        Section::IndexBody,
                        format!("unparseable postings for '{term}': `{}`", rest.trim()),
                    ));
                }
            } else if let Some(rest) = line.strip_prefix("Doc ").filter(|_| in_lengths) {
                let (id_part, len_part) = rest.split_once(':').ok_or_else(|| {
                    EngineError::corrupt(
                        Section::DocLengths,
                        format!("bad length line `{line}`"),
                    )
                })?;
                let doc_id: DocId = id_part.trim().parse().map_err(|_| {
                    EngineError::corrupt(
                        Section::DocLengths,
                        format!("bad doc id `{}`", id_part.trim()),
                    )
                })?;
                let length_str = len_part.trim().split_whitespace().next().ok_or_else(|| {
                    EngineError::corrupt(
                        Section::DocLengths,
                        format!("missing length for doc {doc_id}"),
                    )
                })?;
                let length: usize = length_str.parse().map_err(|_| {
                    EngineError::corrupt(
                        Section::DocLengths,
                        format!("bad length `{length_str}` for doc {doc_id}"),
                    )
                })?;
                doc_lengths.insert(doc_id, length);
            }
            // The banner and trailer lines fall through; anything else is
            // outside the round-tripped structure and is skipped.
        }

        let num_docs = num_docs.ok_or_else(|| {
            EngineError::corrupt(Section::Header, "missing `Total Documents` line")
        })?;
        let avg_doc_length = avg_doc_length.ok_or_else(|| {
            EngineError::corrupt(Section::Header, "missing `Average Document Length` line")
        })?;

        // Every posting doc id must have a length entry.
        for (term, posting) in &index {
            for doc_id in posting.doc_ids() {
                if !doc_lengths.contains_key(&doc_id) {
                    return Err(EngineError::corrupt(
                        Section::DocLengths,
                        format!("no length entry for doc {doc_id} (term '{term}')"),
                    ));
                }
            }
        }

        Ok(InvertedIndex::from_parts(
            index,
            doc_lengths,
            num_docs,
            avg_doc_length,
        ))
    }
}

impl IndexCodec for TextCodec {
    fn save(&self, index: &InvertedIndex, path: &Path) -> Result<()> {
        fs::write(path, self.render(index))?;
        tracing::info!(path = %path.display(), "text index saved");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<InvertedIndex> {
        let content = fs::read_to_string(path)?;
        let index = self.parse(&content)?;
        tracing::info!(
            path = %path.display(),
            num_docs = index.num_docs(),
            unique_terms = index.num_unique_terms(),
            "text index loaded"
        );
        Ok(index)
    }
}
