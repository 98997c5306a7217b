// SPDX-License-Identifier: MIT OR Apache-2.0

//! Corpus summary: size and per-category counts.

use anyhow::{Context, Result};
use std::path::PathBuf;

use bankbot::config::Config;
use bankbot::corpus::{Category, Corpus};

use crate::cli::OutputFormat;
use crate::commands::resolve_format;

pub fn run(corpus_path: Option<PathBuf>, format: Option<OutputFormat>) -> Result<()> {
    let config = Config::load();
    let format = resolve_format(format, &config);

    let (corpus, source) = match config.merge_corpus_path(corpus_path) {
        Some(path) => {
            let corpus = Corpus::load(&path)
                .with_context(|| format!("Failed to load corpus from {}", path.display()))?;
            (corpus, path.display().to_string())
        }
        None => (Corpus::builtin(), "built-in".to_string()),
    };

    let categories = [
        Category::VisitBranch,
        Category::CallSupport,
        Category::General,
    ];

    match format {
        OutputFormat::Json => {
            let counts: serde_json::Map<String, serde_json::Value> = categories
                .iter()
                .map(|c| (c.to_string(), corpus.count_category(*c).into()))
                .collect();
            let payload = serde_json::json!({
                "source": source,
                "utterances": corpus.len(),
                "categories": counts,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            println!("Corpus: {} ({} utterances)", source, corpus.len());
            for category in categories {
                println!("  {}: {}", category, corpus.count_category(category));
            }
        }
    }

    Ok(())
}
