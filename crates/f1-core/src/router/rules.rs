//! Keyword rules. Order in [`default_rules`] is evaluation priority.

use crate::TopicId;
use serde::Serialize;

/// Boolean test over the lower-cased query text.
///
/// Keywords are matched by substring containment with no word boundaries,
/// so `"scorer"` satisfies `AnyOf(["score"])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Always true. Only the fallback rule uses this.
    Always,
    /// True when any keyword occurs in the text.
    AnyOf(&'static [&'static str]),
    /// True when every inner predicate holds.
    AllOf(Vec<Predicate>),
}

impl Predicate {
    /// `lowered` must already be lower-cased; keywords are lower-case literals.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::Always => true,
            Self::AnyOf(keywords) => keywords.iter().any(|k| lowered.contains(k)),
            Self::AllOf(parts) => parts.iter().all(|p| p.matches(lowered)),
        }
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Self::Always)
    }

    /// Every keyword literal referenced by this predicate.
    pub fn keywords(&self) -> Vec<&'static str> {
        match self {
            Self::Always => Vec::new(),
            Self::AnyOf(keywords) => keywords.to_vec(),
            Self::AllOf(parts) => parts.iter().flat_map(|p| p.keywords()).collect(),
        }
    }
}

/// One entry in the ordered rule list.
///
/// A rule has no priority field: its priority is its position in the list handed to
/// `QueryRouter::new`, first evaluated first. The fallback is always last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRule {
    /// Short name for logs and the status endpoint.
    pub name: &'static str,
    pub predicate: Predicate,
    pub target: TopicId,
}

impl MatchRule {
    pub fn new(name: &'static str, predicate: Predicate, target: TopicId) -> Self {
        Self {
            name,
            predicate,
            target,
        }
    }

    pub fn fallback(target: TopicId) -> Self {
        Self::new("fallback", Predicate::Always, target)
    }

    pub fn is_fallback(&self) -> bool {
        self.predicate.is_always()
    }
}

const WINNER_WORDS: &[&str] = &["who won", "winner", "champion"];
const CURRENCY_WORDS: &[&str] = &["2024", "2023", "current", "championship"];
const NEWS_WORDS: &[&str] = &["news", "latest", "recent", "update"];
const TEAM_WORDS: &[&str] = &["team", "constructor"];
const DRIVER_WORDS: &[&str] = &["driver", "pilot", "racer"];
const SCORING_WORDS: &[&str] = &["point", "score", "scoring"];
const RULE_WORDS: &[&str] = &["rule", "regulation", "technical"];

/// The live rule table, highest priority first, fallback last.
pub fn default_rules() -> Vec<MatchRule> {
    vec![
        // A bare "champion" is not enough: it needs a season or "current" qualifier too.
        MatchRule::new(
            "championship",
            Predicate::AllOf(vec![
                Predicate::AnyOf(WINNER_WORDS),
                Predicate::AnyOf(CURRENCY_WORDS),
            ]),
            TopicId::Champions,
        ),
        MatchRule::new("news", Predicate::AnyOf(NEWS_WORDS), TopicId::News),
        MatchRule::new("teams", Predicate::AnyOf(TEAM_WORDS), TopicId::Teams),
        MatchRule::new("drivers", Predicate::AnyOf(DRIVER_WORDS), TopicId::Drivers),
        MatchRule::new("scoring", Predicate::AnyOf(SCORING_WORDS), TopicId::Scoring),
        MatchRule::new("rules", Predicate::AnyOf(RULE_WORDS), TopicId::Rules),
        MatchRule::fallback(TopicId::News),
    ]
}
