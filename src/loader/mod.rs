//! Loader module
//!
//! Input document records and corpus-file loading.

mod corpus;
mod document;

pub use corpus::{load_corpus, parse_corpus};
pub use document::{DocId, Document};
