//! Index module
//!
//! The batch-built inverted index, its builder, and the document store.

mod builder;
mod docstore;
mod inverted;

pub use builder::IndexBuilder;
pub use docstore::Docstore;
pub use inverted::{IndexStats, InvertedIndex, Posting};
