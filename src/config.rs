// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for bankbot
//!
//! Loads configuration from .bankbotrc.toml in current directory or
//! ~/.config/bankbot/config.toml

use serde::Deserialize;
use std::path::PathBuf;

use crate::embedding::DEFAULT_EMBEDDING_DIM;

/// Output format for results (mirrored from cli for library use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

/// Embedding provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProviderType {
    #[default]
    Builtin,
    Command,
    Dummy,
}

/// Ranker configuration section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RankerSettings {
    /// Minimum cosine similarity for a candidate to qualify
    pub threshold: Option<f32>,
    /// Maximum number of candidate responses per turn
    pub top_k: Option<usize>,
}

impl RankerSettings {
    /// Get threshold (defaults to 0.5)
    pub fn threshold(&self) -> f32 {
        self.threshold.unwrap_or(0.5)
    }

    /// Get top-k (defaults to 3)
    pub fn top_k(&self) -> usize {
        self.top_k.unwrap_or(3)
    }
}

/// Embedding configuration section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmbeddingsConfig {
    /// Provider type (builtin, command, dummy)
    pub provider: Option<EmbeddingProviderType>,
    /// Model identifier passed to the command provider
    pub model: Option<String>,
    /// Command to execute for the command provider
    pub command: Option<String>,
    /// Batch size for corpus embedding
    pub batch_size: Option<usize>,
    /// Maximum characters per text before truncation
    pub max_chars: Option<usize>,
    /// Whether to L2-normalize builtin embeddings
    pub normalize: Option<bool>,
    /// Vector dimension for the dummy provider
    pub dimension: Option<usize>,
}

impl EmbeddingsConfig {
    /// Get provider type (defaults to Builtin)
    pub fn provider(&self) -> EmbeddingProviderType {
        self.provider.unwrap_or_default()
    }

    /// Get model identifier (defaults to "local-model-id")
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or("local-model-id")
    }

    /// Get command (defaults to "embedder")
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or("embedder")
    }

    /// Get dummy-provider dimension (defaults to the builtin model's 384)
    pub fn dimension(&self) -> usize {
        self.dimension.unwrap_or(DEFAULT_EMBEDDING_DIM)
    }
}

/// Corpus configuration section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Path to a corpus JSON file; the built-in corpus is used when unset
    pub path: Option<PathBuf>,
}

impl CorpusSettings {
    /// Get corpus path, if configured
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

/// Configuration loaded from .bankbotrc.toml or ~/.config/bankbot/config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format (text or json)
    pub default_format: Option<ConfigOutputFormat>,

    /// Ranker configuration
    #[serde(default)]
    pub ranker: RankerSettings,

    /// Embedding configuration
    #[serde(default)]
    pub embeddings: EmbeddingsConfig,

    /// Corpus configuration
    #[serde(default)]
    pub corpus: CorpusSettings,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .bankbotrc.toml in current directory
    /// 2. ~/.config/bankbot/config.toml
    pub fn load() -> Self {
        if let Some(config) = Self::load_from_path(&PathBuf::from(".bankbotrc.toml")) {
            return config;
        }

        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("bankbot").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    fn load_from_path(path: &PathBuf) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Merge CLI threshold with config (CLI wins)
    pub fn merge_threshold(&self, cli_value: Option<f32>) -> f32 {
        cli_value.unwrap_or_else(|| self.ranker.threshold())
    }

    /// Merge CLI limit with config (CLI wins)
    pub fn merge_top_k(&self, cli_value: Option<usize>) -> usize {
        cli_value.unwrap_or_else(|| self.ranker.top_k())
    }

    /// Merge CLI corpus path with config (CLI wins)
    pub fn merge_corpus_path(&self, cli_value: Option<PathBuf>) -> Option<PathBuf> {
        cli_value.or_else(|| self.corpus.path().cloned())
    }

    /// Get the ranker settings
    pub fn ranker(&self) -> &RankerSettings {
        &self.ranker
    }

    /// Get the embedding configuration
    pub fn embeddings(&self) -> &EmbeddingsConfig {
        &self.embeddings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ranker.threshold(), 0.5);
        assert_eq!(config.ranker.top_k(), 3);
        assert_eq!(config.embeddings.provider(), EmbeddingProviderType::Builtin);
        assert!(config.corpus.path().is_none());
    }

    #[test]
    fn parses_sections() {
        let config: Config = toml::from_str(
            r#"
            default_format = "json"

            [ranker]
            threshold = 0.65
            top_k = 5

            [embeddings]
            provider = "dummy"
            dimension = 64

            [corpus]
            path = "corpus.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_format, Some(ConfigOutputFormat::Json));
        assert_eq!(config.ranker.threshold(), 0.65);
        assert_eq!(config.ranker.top_k(), 5);
        assert_eq!(config.embeddings.provider(), EmbeddingProviderType::Dummy);
        assert_eq!(config.embeddings.dimension(), 64);
        assert_eq!(
            config.corpus.path(),
            Some(&PathBuf::from("corpus.json"))
        );
    }

    #[test]
    fn cli_overrides_win() {
        let config: Config = toml::from_str("[ranker]\nthreshold = 0.8\n").unwrap();
        assert_eq!(config.merge_threshold(Some(0.3)), 0.3);
        assert_eq!(config.merge_threshold(None), 0.8);
        assert_eq!(config.merge_top_k(None), 3);
    }
}
