// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command implementations for the bankbot binary.

pub mod ask;
pub mod chat;
pub mod corpus;

use std::path::PathBuf;

use bankbot::config::{Config, ConfigOutputFormat};
use bankbot::corpus::{Corpus, EmbeddedCorpus};
use bankbot::embedding::{build_provider, EmbeddingProvider};
use bankbot::output::{colorize_notice, use_colors};
use bankbot::ranker::{Ranker, RankerConfig};

use crate::cli::OutputFormat;

/// Everything a ranking command needs. Provider and corpus are optional on
/// purpose: any load failure leaves them absent and the ranker short-circuits
/// to empty results instead of aborting.
pub struct RankingSetup {
    pub provider: Option<Box<dyn EmbeddingProvider>>,
    pub corpus: Option<EmbeddedCorpus>,
    pub ranker: Ranker,
}

/// Load provider and corpus per config/CLI and precompute corpus embeddings.
/// Failures are reported as notices on stderr, never propagated.
pub fn prepare(
    config: &Config,
    threshold: Option<f32>,
    limit: Option<usize>,
    corpus_path: Option<PathBuf>,
) -> RankingSetup {
    let use_color = use_colors();

    let mut provider = match build_provider(config.embeddings()) {
        Ok(provider) => Some(provider),
        Err(err) => {
            tracing::warn!(error = %err, "embedding provider unavailable");
            eprintln!(
                "{}",
                colorize_notice(&format!("Error loading model: {err:#}"), use_color)
            );
            None
        }
    };

    let raw_corpus = match config.merge_corpus_path(corpus_path) {
        Some(path) => match Corpus::load(&path) {
            Ok(corpus) => Some(corpus),
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "corpus unavailable");
                eprintln!(
                    "{}",
                    colorize_notice(&format!("Error loading corpus: {err}"), use_color)
                );
                None
            }
        },
        None => Some(Corpus::builtin()),
    };

    // Embedding the corpus needs a live provider; without one the corpus
    // stays absent and ranking yields no answers.
    let corpus = match (raw_corpus, provider.as_deref_mut()) {
        (Some(corpus), Some(provider)) => match EmbeddedCorpus::build(corpus, provider) {
            Ok(embedded) => Some(embedded),
            Err(err) => {
                tracing::warn!(error = %err, "failed to embed corpus");
                eprintln!(
                    "{}",
                    colorize_notice(&format!("Error in processing: {err:#}"), use_color)
                );
                None
            }
        },
        _ => None,
    };

    let ranker_config = RankerConfig {
        threshold: config.merge_threshold(threshold),
        top_k: config.merge_top_k(limit),
    };

    RankingSetup {
        provider,
        corpus,
        ranker: Ranker::new(ranker_config),
    }
}

/// Resolve the output format: CLI flag wins, then config, then text.
pub fn resolve_format(cli_format: Option<OutputFormat>, config: &Config) -> OutputFormat {
    cli_format.unwrap_or_else(|| match config.default_format.unwrap_or_default() {
        ConfigOutputFormat::Text => OutputFormat::Text,
        ConfigOutputFormat::Json => OutputFormat::Json,
    })
}
