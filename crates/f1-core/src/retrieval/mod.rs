//! In-memory lexical retrieval over the curated documents.
//!
//! Not used by the chat answer path; the gateway serves it on the search endpoint.

mod chunker;
mod index;

pub use chunker::{Chunk, Chunker, ChunkerConfig};
pub use index::{DocumentIndex, IndexedChunk, SearchHit, SourceDocument};

/// Lower-cased alphanumeric runs. Used for both documents and queries.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}
