//! Read-only topic table. Built once at startup from the curated catalog.

use super::{catalog, KnowledgeSource};
use crate::error::{CoreError, Result};
use crate::retrieval::SourceDocument;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const SOURCE_NAME: &str = "curated";

/// Subject area identifier. Declaration order is the store's listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicId {
    Teams,
    Drivers,
    Champions,
    Scoring,
    Rules,
    News,
}

impl TopicId {
    /// Stable lower-case key (`"teams"`, `"news"`, ...).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teams => "teams",
            Self::Drivers => "drivers",
            Self::Champions => "champions",
            Self::Scoring => "scoring",
            Self::Rules => "rules",
            Self::News => "news",
        }
    }

    /// Returns all topic ids in order.
    pub fn all() -> [Self; 6] {
        [
            Self::Teams,
            Self::Drivers,
            Self::Champions,
            Self::Scoring,
            Self::Rules,
            Self::News,
        ]
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownTopic(s.to_string()))
    }
}

/// One subject area with its canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    /// Display label; never used for matching.
    pub title: String,
    pub body: String,
}

/// Immutable mapping from [`TopicId`] to [`Topic`]. No write operations.
#[derive(Debug, Clone)]
pub struct TopicStore {
    topics: BTreeMap<TopicId, Topic>,
}

impl TopicStore {
    /// The curated Formula 1 knowledge base, one topic per id.
    pub fn curated() -> Self {
        Self::from_topics(catalog::CATALOG.iter().map(|&(id, title, body)| Topic {
            id,
            title: title.to_string(),
            body: body.to_string(),
        }))
    }

    /// Builds a store from arbitrary topics. A repeated id keeps the last entry.
    pub fn from_topics(topics: impl IntoIterator<Item = Topic>) -> Self {
        let topics = topics.into_iter().map(|t| (t.id, t)).collect();
        Self { topics }
    }

    /// Returns the topic for `id`, or [`CoreError::UnknownTopic`] if this store has none.
    pub fn get_topic(&self, id: TopicId) -> Result<&Topic> {
        self.topics
            .get(&id)
            .ok_or_else(|| CoreError::UnknownTopic(id.as_str().to_string()))
    }

    /// Looks a topic up by its string key (`"teams"`, ...).
    pub fn get_by_key(&self, key: &str) -> Result<&Topic> {
        let id: TopicId = key.parse()?;
        self.get_topic(id)
    }

    pub fn contains(&self, id: TopicId) -> bool {
        self.topics.contains_key(&id)
    }

    /// Topics in [`TopicId`] order.
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.values()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for TopicStore {
    fn default() -> Self {
        Self::curated()
    }
}

impl KnowledgeSource for TopicStore {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn documents(&self) -> Vec<SourceDocument> {
        self.topics()
            .map(|t| SourceDocument {
                topic: Some(t.id),
                title: t.title.clone(),
                category: t.id.as_str().to_string(),
                source: SOURCE_NAME.to_string(),
                text: t.body.clone(),
            })
            .collect()
    }
}
