//! BM25 inverted index over chunked documents.

use super::{tokenize, Chunker};
use crate::error::{CoreError, Result};
use crate::{KnowledgeSource, TopicId};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

const BM25_K1: f32 = 1.2;
const BM25_B: f32 = 0.75;

/// A document handed to the index before chunking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub topic: Option<TopicId>,
    pub title: String,
    pub category: String,
    pub source: String,
    pub text: String,
}

/// One searchable chunk. `id` is its position in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedChunk {
    pub id: usize,
    pub topic: Option<TopicId>,
    pub title: String,
    pub category: String,
    pub source: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub chunk: IndexedChunk,
    pub score: f32,
    /// 1-based position in the result list.
    pub rank: usize,
}

/// Read-only after [`DocumentIndex::build`].
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    chunks: Vec<IndexedChunk>,
    /// term -> (chunk id, term frequency)
    postings: HashMap<String, Vec<(usize, u32)>>,
    lengths: Vec<u32>,
    avg_len: f32,
}

impl DocumentIndex {
    pub fn build(docs: impl IntoIterator<Item = SourceDocument>, chunker: &Chunker) -> Self {
        let mut index = Self::default();

        for doc in docs {
            for chunk in chunker.chunk(&doc.text) {
                let id = index.chunks.len();
                let tokens = tokenize(&chunk.text);

                let mut tf: HashMap<String, u32> = HashMap::new();
                for token in &tokens {
                    *tf.entry(token.clone()).or_insert(0) += 1;
                }
                for (term, count) in tf {
                    index.postings.entry(term).or_default().push((id, count));
                }

                index.lengths.push(tokens.len() as u32);
                index.chunks.push(IndexedChunk {
                    id,
                    topic: doc.topic,
                    title: doc.title.clone(),
                    category: doc.category.clone(),
                    source: doc.source.clone(),
                    text: chunk.text,
                });
            }
        }

        let total: u64 = index.lengths.iter().map(|&l| u64::from(l)).sum();
        index.avg_len = if index.lengths.is_empty() || total == 0 {
            1.0
        } else {
            total as f32 / index.lengths.len() as f32
        };

        tracing::debug!(
            chunks = index.chunks.len(),
            terms = index.postings.len(),
            "document index built"
        );
        index
    }

    /// Chunks and indexes every document of `source`.
    pub fn from_source(source: &dyn KnowledgeSource, chunker: &Chunker) -> Self {
        let index = Self::build(source.documents(), chunker);
        tracing::info!(source = source.name(), chunks = index.len(), "indexed knowledge source");
        index
    }

    /// Top `limit` chunks by BM25 score. Chunks sharing no term with the query are never returned;
    /// equal scores are ordered by chunk id.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let terms: BTreeSet<String> = tokenize(query).into_iter().collect();
        if terms.is_empty() {
            return Err(CoreError::EmptyQuery);
        }
        if limit == 0 || self.chunks.is_empty() {
            return Ok(Vec::new());
        }

        let n = self.chunks.len() as f32;
        let mut scores = vec![0.0_f32; self.chunks.len()];
        for term in &terms {
            let Some(postings) = self.postings.get(term) else {
                continue;
            };
            let df = postings.len() as f32;
            let idf = (1.0 + (n - df + 0.5) / (df + 0.5)).ln();
            for &(id, tf) in postings {
                let tf = tf as f32;
                let norm = 1.0 - BM25_B + BM25_B * self.lengths[id] as f32 / self.avg_len;
                scores[id] += idf * tf * (BM25_K1 + 1.0) / (tf + BM25_K1 * norm);
            }
        }

        let mut ranked: Vec<(usize, f32)> = scores
            .into_iter()
            .enumerate()
            .filter(|&(_, s)| s > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        Ok(ranked
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, (id, score))| SearchHit {
                chunk: self.chunks[id].clone(),
                score,
                rank: i + 1,
            })
            .collect())
    }

    pub fn chunks(&self) -> &[IndexedChunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
