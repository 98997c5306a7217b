// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot question: rank and print, no session state.

use anyhow::Result;
use std::path::PathBuf;

use bankbot::config::Config;
use bankbot::output::{colorize_notice, response_lines, use_colors};

use crate::cli::OutputFormat;
use crate::commands::{prepare, resolve_format};

pub fn run(
    query: &str,
    threshold: Option<f32>,
    limit: Option<usize>,
    corpus_path: Option<PathBuf>,
    quiet: bool,
    format: Option<OutputFormat>,
) -> Result<()> {
    let config = Config::load();
    let format = resolve_format(format, &config);
    let mut setup = prepare(&config, threshold, limit, corpus_path);

    let responses =
        setup
            .ranker
            .rank_or_empty(query, setup.provider.as_deref_mut(), setup.corpus.as_ref());

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "query": query,
                "threshold": setup.ranker.config().threshold,
                "results": responses,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            let use_color = use_colors();
            if responses.is_empty() {
                println!(
                    "{}",
                    colorize_notice(
                        "No matching responses. Try rephrasing your question.",
                        use_color
                    )
                );
            } else {
                for line in response_lines(&responses, use_color) {
                    println!("{}", line);
                }
            }

            if !quiet {
                let corpus_size = setup.corpus.as_ref().map(|c| c.len()).unwrap_or(0);
                eprintln!(
                    "{} response(s) above threshold {:.2} (corpus: {} utterances)",
                    responses.len(),
                    setup.ranker.config().threshold,
                    corpus_size
                );
            }
        }
    }

    Ok(())
}
