// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session presenter - conversation state for the chat flow.
//!
//! Pure bookkeeping over the ranker's output: history of turns, an active
//! flag, and the currently selected response. Follow-up replies key off the
//! utterance's category tag, not the rendered response text.

use crate::corpus::Category;
use crate::ranker::RankedResponse;

/// Canned follow-up for branch-visit responses.
pub const FOLLOW_UP_VISIT_BRANCH: &str = "You will need to visit a branch in person for this.";

/// Canned follow-up for call-support responses.
pub const FOLLOW_UP_CALL_SUPPORT: &str =
    "Please reach customer support at this number: 123-456-7890";

/// One conversation turn: the user's question and the suggested responses.
#[derive(Debug, Clone)]
pub struct Turn {
    /// What the user typed
    pub user: String,
    /// Ranked candidate responses for this turn (possibly empty)
    pub responses: Vec<RankedResponse>,
}

/// Conversation display state with explicit initial values and resets.
#[derive(Debug, Default)]
pub struct SessionState {
    history: Vec<Turn>,
    active: bool,
    selected: Option<usize>,
}

impl SessionState {
    /// A fresh, active session with empty history and no selection.
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            active: true,
            selected: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Conversation turns in order.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Index of the selected response in the latest turn, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected response of the latest turn, if any.
    pub fn selected_response(&self) -> Option<&RankedResponse> {
        let index = self.selected?;
        self.history.last()?.responses.get(index)
    }

    /// Record a completed ranking turn.
    pub fn record_turn(&mut self, user: impl Into<String>, responses: Vec<RankedResponse>) {
        self.history.push(Turn {
            user: user.into(),
            responses,
        });
        self.selected = None;
    }

    /// Select a response from the latest turn by index. Returns the canned
    /// follow-up line for the response's category, if one applies.
    pub fn select(&mut self, index: usize) -> Option<&'static str> {
        let turn = self.history.last()?;
        let response = turn.responses.get(index)?;
        self.selected = Some(index);
        follow_up(response.category)
    }

    /// Keep the conversation going: clear only the selection.
    pub fn resume(&mut self) {
        self.selected = None;
        self.active = true;
    }

    /// Close the conversation: clear history and selection, deactivate.
    pub fn close(&mut self) {
        self.history.clear();
        self.selected = None;
        self.active = false;
    }
}

/// Canned follow-up text for a response category.
pub fn follow_up(category: Category) -> Option<&'static str> {
    match category {
        Category::VisitBranch => Some(FOLLOW_UP_VISIT_BRANCH),
        Category::CallSupport => Some(FOLLOW_UP_CALL_SUPPORT),
        Category::General => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(text: &str, category: Category) -> RankedResponse {
        RankedResponse {
            text: text.to_string(),
            category,
            score: 0.9,
            percent: 100.0,
        }
    }

    #[test]
    fn new_session_is_active_and_empty() {
        let state = SessionState::new();
        assert!(state.is_active());
        assert!(state.history().is_empty());
        assert!(state.selected().is_none());
    }

    #[test]
    fn record_and_select() {
        let mut state = SessionState::new();
        state.record_turn(
            "lost card",
            vec![
                response("card is lost", Category::CallSupport),
                response("open account", Category::General),
            ],
        );

        assert_eq!(state.history().len(), 1);
        assert!(state.selected().is_none());

        let follow = state.select(0);
        assert_eq!(follow, Some(FOLLOW_UP_CALL_SUPPORT));
        assert_eq!(
            state.selected_response().map(|r| r.text.as_str()),
            Some("card is lost")
        );

        // General responses have no follow-up
        assert_eq!(state.select(1), None);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn select_out_of_range_is_noop() {
        let mut state = SessionState::new();
        state.record_turn("q", vec![response("a", Category::General)]);
        assert!(state.select(5).is_none());
        assert!(state.selected().is_none());
    }

    #[test]
    fn resume_clears_only_selection() {
        let mut state = SessionState::new();
        state.record_turn("q", vec![response("a", Category::VisitBranch)]);
        state.select(0);

        state.resume();
        assert!(state.is_active());
        assert!(state.selected().is_none());
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn close_clears_everything() {
        let mut state = SessionState::new();
        state.record_turn("q", vec![response("a", Category::General)]);
        state.select(0);

        state.close();
        assert!(!state.is_active());
        assert!(state.history().is_empty());
        assert!(state.selected().is_none());
    }

    #[test]
    fn follow_up_mapping() {
        assert_eq!(
            follow_up(Category::VisitBranch),
            Some(FOLLOW_UP_VISIT_BRANCH)
        );
        assert_eq!(follow_up(Category::CallSupport), Some(FOLLOW_UP_CALL_SUPPORT));
        assert_eq!(follow_up(Category::General), None);
    }
}
