// SPDX-License-Identifier: MIT OR Apache-2.0

//! Corpus of historical support utterances.
//!
//! Utterances are ordered, read-only, and tagged with an intent category at
//! load time. The embedded form precomputes one vector per utterance so
//! ranking never re-embeds the corpus.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::embedding::EmbeddingProvider;
use crate::errors::CorpusError;

/// Built-in banking support corpus compiled into the binary.
const BUILTIN_CORPUS_JSON: &str = include_str!("../data/corpus.json");

static BUILTIN_CORPUS: Lazy<Vec<Utterance>> = Lazy::new(|| {
    serde_json::from_str(BUILTIN_CORPUS_JSON).expect("built-in corpus JSON is valid")
});

/// Intent category assigned to each utterance at load time.
///
/// Replaces matching on rendered response text: follow-up replies key off
/// this tag instead of substrings of the display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Needs an in-person branch visit
    VisitBranch,
    /// Needs a call to customer support
    CallSupport,
    /// No canned follow-up
    #[default]
    General,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::VisitBranch => write!(f, "visit_branch"),
            Category::CallSupport => write!(f, "call_support"),
            Category::General => write!(f, "general"),
        }
    }
}

/// A single historical support utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    /// The utterance text
    pub text: String,
    /// Intent category tag
    #[serde(default)]
    pub category: Category,
}

/// An ordered, read-only collection of utterances.
#[derive(Debug, Clone)]
pub struct Corpus {
    utterances: Vec<Utterance>,
}

impl Corpus {
    /// Create a corpus from an ordered list of utterances.
    pub fn new(utterances: Vec<Utterance>) -> Self {
        Self { utterances }
    }

    /// The built-in banking support corpus.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_CORPUS.clone())
    }

    /// Load a corpus from a JSON file: `[{"text": ..., "category": ...}, ...]`.
    /// `category` is optional and defaults to `general`.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let content = std::fs::read_to_string(path)?;
        let utterances: Vec<Utterance> = serde_json::from_str(&content)?;
        Ok(Self::new(utterances))
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    /// Utterances in corpus order.
    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    /// Number of utterances carrying the given category.
    pub fn count_category(&self, category: Category) -> usize {
        self.utterances
            .iter()
            .filter(|u| u.category == category)
            .count()
    }
}

/// A corpus with one precomputed embedding per utterance.
///
/// Built once at startup; ranking only embeds the query after that.
pub struct EmbeddedCorpus {
    corpus: Corpus,
    vectors: Vec<Vec<f32>>,
    dimension: usize,
}

impl EmbeddedCorpus {
    /// Embed every utterance with the given provider, batched at the
    /// provider's batch size, with a progress bar on stderr.
    pub fn build(corpus: Corpus, provider: &mut dyn EmbeddingProvider) -> Result<Self> {
        let texts: Vec<String> = corpus
            .utterances()
            .iter()
            .map(|u| u.text.clone())
            .collect();

        let bar = embedding_progress_bar(texts.len() as u64);
        let batch_size = provider.batch_size().max(1);
        let mut vectors: Vec<Vec<f32>> = Vec::with_capacity(texts.len());

        for batch in texts.chunks(batch_size) {
            let embedded = provider
                .embed_texts(batch)
                .context("Failed to embed corpus batch")?;
            if embedded.len() != batch.len() {
                anyhow::bail!(
                    "Embedding provider returned {} vectors for {} texts",
                    embedded.len(),
                    batch.len()
                );
            }
            vectors.extend(embedded);
            bar.inc(batch.len() as u64);
        }
        bar.finish_and_clear();

        let dimension = vectors.first().map(|v| v.len()).unwrap_or(0);
        tracing::debug!(
            utterances = corpus.len(),
            dimension,
            model = provider.model_id(),
            "corpus embedded"
        );

        Ok(Self {
            corpus,
            vectors,
            dimension,
        })
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Vector width of the precomputed embeddings (0 for an empty corpus).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Iterate `(utterance, vector)` pairs in corpus order.
    pub fn entries(&self) -> impl Iterator<Item = (&Utterance, &[f32])> {
        self.corpus
            .utterances()
            .iter()
            .zip(self.vectors.iter().map(|v| v.as_slice()))
    }
}

fn embedding_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("Embedding corpus");
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::DummyProvider;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_corpus_parses() {
        let corpus = Corpus::builtin();
        assert!(!corpus.is_empty());
        // The redesigned follow-up rules need both trigger categories present.
        assert!(corpus.count_category(Category::VisitBranch) > 0);
        assert!(corpus.count_category(Category::CallSupport) > 0);
        assert!(corpus.count_category(Category::General) > 0);
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.json");
        fs::write(
            &path,
            r#"[
                {"text": "lost my card", "category": "call_support"},
                {"text": "how to open an account"}
            ]"#,
        )
        .unwrap();

        let corpus = Corpus::load(&path).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.utterances()[0].category, Category::CallSupport);
        assert_eq!(corpus.utterances()[1].category, Category::General);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = Corpus::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(CorpusError::Io(_))));
    }

    #[test]
    fn load_malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Corpus::load(&path), Err(CorpusError::Parse(_))));
    }

    #[test]
    fn embedded_corpus_precomputes_vectors() {
        let corpus = Corpus::new(vec![
            Utterance {
                text: "a".into(),
                category: Category::General,
            },
            Utterance {
                text: "b".into(),
                category: Category::General,
            },
        ]);
        let mut provider = DummyProvider::new(8);
        let embedded = EmbeddedCorpus::build(corpus, &mut provider).unwrap();

        assert_eq!(embedded.len(), 2);
        assert_eq!(embedded.dimension(), 8);
        assert_eq!(embedded.entries().count(), 2);
    }

    #[test]
    fn embedded_empty_corpus() {
        let mut provider = DummyProvider::new(8);
        let embedded = EmbeddedCorpus::build(Corpus::new(Vec::new()), &mut provider).unwrap();
        assert!(embedded.is_empty());
        assert_eq!(embedded.dimension(), 0);
    }
}
