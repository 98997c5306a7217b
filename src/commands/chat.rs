// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive conversation loop.
//!
//! Mirrors the single-page flow: question prompt, candidate selection,
//! category follow-up, then a continue/close choice. `exit` quits,
//! `history` prints the transcript so far.

use anyhow::Result;
use inquire::{Select, Text};
use std::path::PathBuf;

use bankbot::config::Config;
use bankbot::output::{colorize_notice, render_history, response_lines, use_colors};
use bankbot::session::SessionState;

use crate::commands::prepare;

const NEXT_CONTINUE: &str = "Keep chatting";
const NEXT_CLOSE: &str = "Close the conversation";

pub fn run(
    threshold: Option<f32>,
    limit: Option<usize>,
    corpus_path: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load();
    let mut setup = prepare(&config, threshold, limit, corpus_path);
    let use_color = use_colors();

    let mut state = SessionState::new();
    println!("Bank support assistant. Type 'exit' to quit, 'history' for the transcript.");

    while state.is_active() {
        // Prompt errors (Ctrl-C, closed stdin) end the session quietly.
        let Ok(input) = Text::new("Question:").prompt() else {
            break;
        };
        let question = input.trim();

        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") {
            println!("Exiting...");
            break;
        }
        if question.eq_ignore_ascii_case("history") {
            print!("{}", render_history(state.history(), use_color));
            continue;
        }

        let responses = setup.ranker.rank_or_empty(
            question,
            setup.provider.as_deref_mut(),
            setup.corpus.as_ref(),
        );

        if responses.is_empty() {
            println!(
                "{}",
                colorize_notice(
                    "No matching responses. Try rephrasing your question.",
                    use_color
                )
            );
            continue;
        }

        let lines = response_lines(&responses, use_color);
        state.record_turn(question, responses);

        if let Ok(choice) = Select::new("Select a response:", lines).raw_prompt() {
            if let Some(follow_up) = state.select(choice.index) {
                println!("{}", colorize_notice(follow_up, use_color));
            }
        } else {
            break;
        }

        match Select::new(
            "What would you like to do?",
            vec![NEXT_CONTINUE, NEXT_CLOSE],
        )
        .prompt()
        {
            Ok(NEXT_CONTINUE) => state.resume(),
            Ok(_) => {
                println!("Have a nice day!");
                state.close();
            }
            Err(_) => break,
        }
    }

    Ok(())
}
