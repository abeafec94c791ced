//! Curated topic knowledge base.
//!
//! | TopicId   | Title                                   |
//! |-----------|-----------------------------------------|
//! | teams     | Current Formula 1 Teams (2024 Season)   |
//! | drivers   | Notable Formula 1 Drivers               |
//! | champions | F1 Championship Winners                 |
//! | scoring   | F1 Points Scoring System                |
//! | rules     | F1 Technical Regulations                |
//! | news      | Latest Formula 1 Developments           |

mod catalog;
mod store;

pub use store::{Topic, TopicId, TopicStore};

use crate::retrieval::SourceDocument;

/// Anything that can hand its documents to the retrieval index.
pub trait KnowledgeSource: Send + Sync {
    /// Human-readable name for this knowledge source.
    fn name(&self) -> &str;

    /// Documents to chunk and index, in a stable order.
    fn documents(&self) -> Vec<SourceDocument>;
}
