use thiserror::Error;

/// Errors raised by the core. None of them can be produced by `QueryRouter::route`;
/// rule and topic defects surface when the router is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    #[error("rule table has no fallback rule")]
    MissingFallback,

    #[error("fallback rule must be last, found at position {position}")]
    FallbackNotLast { position: usize },

    #[error("invalid chunking: chunk_size {chunk_size}, overlap {overlap}")]
    InvalidChunking { chunk_size: usize, overlap: usize },

    #[error("empty query")]
    EmptyQuery,
}

pub type Result<T> = std::result::Result<T, CoreError>;
