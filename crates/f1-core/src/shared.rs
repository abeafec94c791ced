//! Shared types used by the core and the gateway.

use crate::retrieval::ChunkerConfig;
use crate::TopicId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Provenance label attached to every routed answer.
pub const SOURCE_LABEL: &str = "Curated F1 Knowledge Base";

/// Decorative header the chat transport puts in front of the answer body.
pub const ANSWER_PREFIX: &str = "🏎️ **Formula 1 Information:**\n\n";

/// Outcome of routing one query. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Topic the router selected.
    pub topic: TopicId,
    /// Body of the selected topic, unmodified.
    pub answer_text: String,
    /// Always exactly one entry: [`SOURCE_LABEL`].
    pub source_labels: Vec<String>,
}

impl QueryResult {
    pub fn new(topic: TopicId, answer_text: impl Into<String>) -> Self {
        Self {
            topic,
            answer_text: answer_text.into(),
            source_labels: vec![SOURCE_LABEL.to_string()],
        }
    }
}

/// Gateway configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Name reported by the status endpoint and startup log.
    pub app_name: String,
    /// Bind address for the gateway.
    pub host: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Default number of hits returned by the search endpoint.
    pub search_limit: usize,
    /// Characters per retrieval chunk.
    pub chunk_size: usize,
    /// Characters shared by consecutive chunks.
    pub chunk_overlap: usize,
    /// Allow any origin (the chat UI is usually served from another port).
    #[serde(default = "default_true")]
    pub cors_permissive: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "F1 Chat Gateway".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            search_limit: 5,
            chunk_size: 300,
            chunk_overlap: 50,
            cors_permissive: true,
        }
    }
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `F1_CONFIG` path > `config/gateway` > defaults,
    /// then `F1__*` environment variables on top.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("F1_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        Self::load_from(&config_path)
    }

    /// Same as [`CoreConfig::load`] with an explicit file path. A missing file is not an error.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, None)
    }

    /// `env` replaces the process environment as the `F1__*` source when given.
    pub(crate) fn load_with_env(
        config_path: &str,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("search_limit", defaults.search_limit as i64)?
            .set_default("chunk_size", defaults.chunk_size as i64)?
            .set_default("chunk_overlap", defaults.chunk_overlap as i64)?
            .set_default("cors_permissive", defaults.cors_permissive)?;

        let path = Path::new(config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder.add_source(config::File::with_name(config_path).required(false))
        };

        let built = builder
            .add_source(
                config::Environment::with_prefix("F1")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        built.try_deserialize()
    }

    pub fn chunker_config(&self) -> ChunkerConfig {
        ChunkerConfig {
            chunk_size: self.chunk_size,
            overlap: self.chunk_overlap,
            ..ChunkerConfig::default()
        }
    }

    /// `host:port` string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn query_result_carries_single_source_label() {
        let result = QueryResult::new(TopicId::News, "body");
        assert_eq!(result.source_labels, vec![SOURCE_LABEL.to_string()]);
        assert_eq!(result.answer_text, "body");
    }

    fn no_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    fn write_toml(dir: &tempfile::TempDir, contents: &str) -> String {
        let path = dir.path().join("gateway.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{contents}").unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let cfg = CoreConfig::load_with_env(missing.to_str().unwrap(), no_env()).unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.search_limit, 5);
        assert_eq!(cfg.chunk_size, 300);
        assert_eq!(cfg.chunk_overlap, 50);
        assert!(cfg.cors_permissive);
    }

    #[test]
    fn load_from_toml_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_toml(&dir, "app_name = \"Paddock\"\nport = 4100\nchunk_size = 120");

        let cfg = CoreConfig::load_with_env(&path, no_env()).unwrap();
        assert_eq!(cfg.app_name, "Paddock");
        assert_eq!(cfg.port, 4100);
        assert_eq!(cfg.chunk_size, 120);
        assert_eq!(cfg.chunk_overlap, 50);
        assert_eq!(cfg.chunker_config().chunk_size, 120);
    }

    #[test]
    fn env_overrides_file_and_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_toml(&dir, "port = 4100\nsearch_limit = 7\ncors_permissive = false");

        let env: config::Map<String, String> = [
            ("F1__PORT", "4321"),
            ("F1__APP_NAME", "Pit Wall"),
            ("UNRELATED__PORT", "1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let cfg = CoreConfig::load_with_env(&path, Some(env)).unwrap();
        assert_eq!(cfg.port, 4321);
        assert_eq!(cfg.app_name, "Pit Wall");
        assert_eq!(cfg.search_limit, 7);
        assert!(!cfg.cors_permissive);
        assert_eq!(cfg.chunk_size, 300);
    }
}
