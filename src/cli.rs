// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// bankbot - Semantic support-reply suggester
///
/// Ranks historical banking-support utterances against your question by
/// embedding cosine similarity and suggests the closest matches.
#[derive(Parser, Debug)]
#[command(name = "bankbot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a single question and print the ranked responses
    #[command(alias = "a")]
    Ask {
        /// The question to rank against the corpus
        query: String,

        /// Minimum cosine similarity for a candidate (default: 0.5)
        #[arg(long)]
        threshold: Option<f32>,

        /// Maximum number of responses
        #[arg(short = 'm', long = "limit", visible_alias = "max-results")]
        limit: Option<usize>,

        /// Corpus JSON file (defaults to the built-in corpus)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Suppress statistics output
        #[arg(short = 'q', long)]
        quiet: bool,
    },

    /// Interactive conversation with response selection
    #[command(alias = "c")]
    Chat {
        /// Minimum cosine similarity for a candidate (default: 0.5)
        #[arg(long)]
        threshold: Option<f32>,

        /// Maximum number of responses per turn
        #[arg(short = 'm', long = "limit", visible_alias = "max-results")]
        limit: Option<usize>,

        /// Corpus JSON file (defaults to the built-in corpus)
        #[arg(long)]
        corpus: Option<PathBuf>,
    },

    /// Print a summary of the corpus
    Corpus {
        /// Corpus JSON file (defaults to the built-in corpus)
        #[arg(long)]
        corpus: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
