// SPDX-License-Identifier: MIT OR Apache-2.0

//! bankbot - Semantic support-reply suggester
//!
//! Ranks historical banking-support utterances against a user question by
//! embedding cosine similarity and presents the top matches as selectable
//! responses with confidence percentages.

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing with BANKBOT_LOG env var (e.g., BANKBOT_LOG=debug bankbot ask "query")
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("BANKBOT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Ask {
            query,
            threshold,
            limit,
            corpus,
            quiet,
        } => {
            commands::ask::run(&query, threshold, limit, corpus, quiet, format)?;
        }
        Commands::Chat {
            threshold,
            limit,
            corpus,
        } => {
            commands::chat::run(threshold, limit, corpus)?;
        }
        Commands::Corpus { corpus } => {
            commands::corpus::run(corpus, format)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "bankbot", &mut std::io::stdout());
        }
    }

    Ok(())
}
