//! Output and color utilities for consistent terminal formatting
//!
//! Provides shared color functions respecting NO_COLOR environment variable.

use colored::Colorize;

use crate::ranker::RankedResponse;
use crate::session::Turn;

/// Check if colors should be used (respects NO_COLOR env var)
pub fn use_colors() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Colorize the user label (bold)
pub fn colorize_user(text: &str, use_color: bool) -> String {
    if use_color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Colorize a bot response (cyan)
pub fn colorize_bot(text: &str, use_color: bool) -> String {
    if use_color {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Colorize a confidence percentage (yellow)
pub fn colorize_percent(percent: f32, use_color: bool) -> String {
    let rendered = format!("{:.2}%", percent);
    if use_color {
        rendered.yellow().to_string()
    } else {
        rendered
    }
}

/// Colorize a user-facing notice (dimmed)
pub fn colorize_notice(text: &str, use_color: bool) -> String {
    if use_color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Render one ranked response as a numbered display line: `1. text: 34.21%`
pub fn response_line(index: usize, response: &RankedResponse, use_color: bool) -> String {
    format!(
        "{}. {}: {}",
        index + 1,
        colorize_bot(&response.text, use_color),
        colorize_percent(response.percent, use_color)
    )
}

/// Render all responses of a turn, one line each, in rank order.
pub fn response_lines(responses: &[RankedResponse], use_color: bool) -> Vec<String> {
    responses
        .iter()
        .enumerate()
        .map(|(i, response)| response_line(i, response, use_color))
        .collect()
}

/// Render the conversation transcript.
pub fn render_history(turns: &[Turn], use_color: bool) -> String {
    let mut out = String::new();
    for turn in turns {
        out.push_str(&format!(
            "{} {}\n",
            colorize_user("You:", use_color),
            turn.user
        ));
        for line in response_lines(&turn.responses, use_color) {
            out.push_str(&format!("{} {}\n", colorize_user("Bot:", use_color), line));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Category;

    fn response(text: &str, percent: f32) -> RankedResponse {
        RankedResponse {
            text: text.to_string(),
            category: Category::General,
            score: 0.8,
            percent,
        }
    }

    #[test]
    fn plain_response_line() {
        let line = response_line(0, &response("card is lost", 62.5), false);
        assert_eq!(line, "1. card is lost: 62.50%");
    }

    #[test]
    fn lines_are_numbered_in_rank_order() {
        let lines = response_lines(
            &[response("a", 60.0), response("b", 40.0)],
            false,
        );
        assert_eq!(lines, vec!["1. a: 60.00%", "2. b: 40.00%"]);
    }

    #[test]
    fn history_includes_both_sides() {
        let turns = vec![Turn {
            user: "lost card".to_string(),
            responses: vec![response("card is lost", 100.0)],
        }];
        let rendered = render_history(&turns, false);
        assert!(rendered.contains("You: lost card"));
        assert!(rendered.contains("Bot: 1. card is lost: 100.00%"));
    }
}
