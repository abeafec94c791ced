//! f1-core: curated Formula 1 topic store, keyword query router, and a small
//! in-memory lexical retrieval index.
//!
//! The gateway add-on answers chat messages through [`QueryRouter::route`] only.
//! [`DocumentIndex`] is the search side: it chunks and scores the same topic
//! documents and is served on its own endpoint.

mod error;
mod knowledge;
mod retrieval;
mod router;
mod shared;

pub use error::{CoreError, Result};

pub use shared::{CoreConfig, QueryResult, ANSWER_PREFIX, SOURCE_LABEL};

pub use knowledge::{KnowledgeSource, Topic, TopicId, TopicStore};

pub use router::{default_rules, MatchRule, Predicate, QueryRouter};

pub use retrieval::{
    tokenize, Chunk, Chunker, ChunkerConfig, DocumentIndex, IndexedChunk, SearchHit, SourceDocument,
};
