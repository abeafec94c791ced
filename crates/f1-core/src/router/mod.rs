//! Query router: picks exactly one topic for a free-text query.

mod rules;

pub use rules::{default_rules, MatchRule, Predicate};

use crate::error::{CoreError, Result};
use crate::shared::QueryResult;
use crate::{Topic, TopicId, TopicStore};

/// A rule with its target topic already fetched from the store.
#[derive(Debug, Clone)]
struct ResolvedRule {
    rule: MatchRule,
    topic: Topic,
}

/// Ordered keyword rules over a read-only topic store.
///
/// Construction checks every rule target against the store and the fallback placement,
/// so [`QueryRouter::route`] has no failure path.
#[derive(Debug, Clone)]
pub struct QueryRouter {
    store: TopicStore,
    keyword_rules: Vec<ResolvedRule>,
    fallback: ResolvedRule,
}

impl QueryRouter {
    /// Validates `rules` against `store`: every target must exist, and exactly one
    /// always-true rule must sit at the end.
    pub fn new(store: TopicStore, rules: Vec<MatchRule>) -> Result<Self> {
        let position = rules
            .iter()
            .position(MatchRule::is_fallback)
            .ok_or(CoreError::MissingFallback)?;
        if position + 1 != rules.len() {
            return Err(CoreError::FallbackNotLast { position });
        }

        let mut resolved = rules
            .into_iter()
            .map(|rule| -> Result<ResolvedRule> {
                let topic = store.get_topic(rule.target)?.clone();
                Ok(ResolvedRule { rule, topic })
            })
            .collect::<Result<Vec<_>>>()?;
        let fallback = resolved.pop().ok_or(CoreError::MissingFallback)?;

        tracing::debug!(
            rules = resolved.len() + 1,
            fallback = %fallback.rule.target,
            "query router ready"
        );

        Ok(Self {
            store,
            keyword_rules: resolved,
            fallback,
        })
    }

    /// Curated store with the default rule table.
    pub fn curated() -> Result<Self> {
        Self::new(TopicStore::curated(), default_rules())
    }

    fn select(&self, query: &str) -> &ResolvedRule {
        let lowered = query.to_lowercase();
        self.keyword_rules
            .iter()
            .find(|r| r.rule.predicate.matches(&lowered))
            .unwrap_or(&self.fallback)
    }

    /// Answers `query` with the body of the first matching rule's topic.
    pub fn route(&self, query: &str) -> QueryResult {
        self.route_with_rule(query).1
    }

    /// [`QueryRouter::route`] plus the rule that fired, from a single rule scan.
    pub fn route_with_rule(&self, query: &str) -> (&MatchRule, QueryResult) {
        let selected = self.select(query);
        tracing::debug!(
            rule = selected.rule.name,
            topic = %selected.topic.id,
            query_len = query.len(),
            "query routed"
        );
        (
            &selected.rule,
            QueryResult::new(selected.topic.id, selected.topic.body.clone()),
        )
    }

    /// Topic the query would be answered from.
    pub fn classify(&self, query: &str) -> TopicId {
        self.select(query).topic.id
    }

    /// First rule whose predicate holds for `query`.
    pub fn matched_rule(&self, query: &str) -> &MatchRule {
        &self.select(query).rule
    }

    /// Rules in evaluation order, fallback last.
    pub fn rules(&self) -> impl Iterator<Item = &MatchRule> {
        self.keyword_rules
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|r| &r.rule)
    }

    pub fn store(&self) -> &TopicStore {
        &self.store
    }
}
