//! Text chunking for the lexical index.
//!
//! Sliding character window (300 chars, 50 overlap by default). A window that stops
//! mid-text is pulled back to the last whitespace in its second half so words stay whole.

use crate::error::{CoreError, Result};

/// Configuration for text chunking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkerConfig {
    /// Window size in characters (default: 300)
    pub chunk_size: usize,
    /// Characters repeated at the start of the next window (default: 50)
    pub overlap: usize,
    /// Trimmed chunks shorter than this are dropped (default: 50)
    pub min_chunk_chars: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 300,
            overlap: 50,
            min_chunk_chars: 50,
        }
    }
}

impl ChunkerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 || self.overlap >= self.chunk_size {
            return Err(CoreError::InvalidChunking {
                chunk_size: self.chunk_size,
                overlap: self.overlap,
            });
        }
        Ok(())
    }
}

/// A chunk of text with its window position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Sequence number among kept chunks (0-indexed)
    pub seq: usize,
    /// Trimmed chunk text
    pub text: String,
    /// Window start in the original text (in characters)
    pub start_char: usize,
    /// Window end, exclusive (in characters)
    pub end_char: usize,
}

#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    pub fn new() -> Self {
        Self {
            config: ChunkerConfig::default(),
        }
    }

    pub fn with_config(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Splits `text` into overlapping chunks.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let chars: Vec<char> = text.chars().collect();
        let total = chars.len();
        let size = self.config.chunk_size;
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < total {
            let mut end = (start + size).min(total);
            if end < total {
                let floor = start + size / 2;
                if let Some(ws) = chars[floor..end].iter().rposition(|c| c.is_whitespace()) {
                    if floor + ws > start {
                        end = floor + ws;
                    }
                }
            }

            let piece: String = chars[start..end].iter().collect();
            let trimmed = piece.trim();
            if trimmed.chars().count() >= self.config.min_chunk_chars && !trimmed.is_empty() {
                chunks.push(Chunk {
                    seq: chunks.len(),
                    text: trimmed.to_string(),
                    start_char: start,
                    end_char: end,
                });
            }

            if end >= total {
                break;
            }
            start = end.saturating_sub(self.config.overlap).max(start + 1);
        }

        chunks
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new()
    }
}
