//! Intent handling between a presentation layer and the model
//!
//! Every handler returns an [`Update`] describing what the presentation
//! should show. Outputs left as `None` were not emitted by that handler and
//! must keep their previous value on screen.

use super::Model;
use crate::core::{Configuration, Position, Puzzle};
use tracing::debug;

pub const MSG_LOAD_FAILED: &str = "Failed to load configuration.";
pub const MSG_SELECT_TWO: &str = "Please select two syllables to swap.";
pub const MSG_SWAPPED: &str = "Swapped successfully.";
pub const MSG_SWAP_FAILED: &str = "Swap failed.";
pub const MSG_RESET: &str = "Puzzle reset.";
pub const MSG_RESET_FAILED: &str = "Failed to reset the puzzle.";
pub const MSG_UNDONE: &str = "Undo successful.";
pub const MSG_NOTHING_TO_UNDO: &str = "Nothing to undo.";
pub const MSG_COMPLETE: &str = "Puzzle Complete! 🎉";

/// Outputs produced by one controller call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    pub message: String,
    pub score: Option<usize>,
    pub move_history: Option<Vec<String>>,
    pub complete: Option<bool>,
}

impl Update {
    fn message(text: impl Into<String>) -> Self {
        Self {
            message: text.into(),
            ..Self::default()
        }
    }

    /// Apply the emitted outputs on top of the last displayed status
    pub fn merge_into(self, status: &mut Status) {
        status.message = self.message;
        if let Some(score) = self.score {
            status.score = score;
        }
        if let Some(history) = self.move_history {
            status.move_history = history;
        }
        if let Some(complete) = self.complete {
            status.complete = complete;
        }
    }
}

/// Everything a presentation layer displays besides the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub score: usize,
    pub move_history: Vec<String>,
    pub complete: bool,
}

/// Translates user intents into model changes and feedback
#[derive(Debug, Clone)]
pub struct Controller {
    model: Model,
}

impl Controller {
    #[must_use]
    pub const fn new(model: Model) -> Self {
        Self { model }
    }

    #[must_use]
    pub const fn model(&self) -> &Model {
        &self.model
    }

    #[must_use]
    pub const fn puzzle(&self) -> Option<&Puzzle> {
        self.model.puzzle()
    }

    pub fn handle_config_select(&mut self, config: Configuration) -> Update {
        let name = config.name.clone();
        if !self.model.set_config(config) {
            return Update::message(MSG_LOAD_FAILED);
        }

        let score = self.update_score();
        Update {
            message: format!("Configuration {name} loaded."),
            score: Some(score),
            move_history: Some(Vec::new()),
            complete: Some(false),
        }
    }

    /// Select a configuration from the model's catalogue
    pub fn handle_config_select_by_name(&mut self, name: &str) -> Update {
        match self.model.find_config(name).cloned() {
            Some(config) => self.handle_config_select(config),
            None => {
                debug!(name, "unknown configuration");
                Update::message(MSG_LOAD_FAILED)
            }
        }
    }

    /// Swap the syllables at exactly two selected cells
    pub fn handle_swap(&mut self, selected: &[Position]) -> Update {
        let [first, second] = selected else {
            return Update::message(MSG_SELECT_TWO);
        };
        let Some(puzzle) = self.model.puzzle_mut() else {
            return Update::message(MSG_SELECT_TWO);
        };
        let (Some(a), Some(b)) = (puzzle.syllable_at(*first), puzzle.syllable_at(*second)) else {
            debug!(%first, %second, "selection outside the board");
            return Update::message(MSG_SELECT_TWO);
        };

        if !puzzle.swap_syllable(a, b) {
            return Update::message(MSG_SWAP_FAILED);
        }
        debug!(%first, %second, "swapped");

        let move_history = puzzle.move_history();
        let score = self.update_score();
        let mut update = Update {
            message: MSG_SWAPPED.to_string(),
            score: Some(score),
            move_history: Some(move_history),
            complete: None,
        };
        self.check_puzzle_completion(&mut update);
        update
    }

    pub fn handle_reset(&mut self) -> Update {
        if !self.model.reset_puzzle() {
            return Update::message(MSG_RESET_FAILED);
        }

        Update {
            message: MSG_RESET.to_string(),
            score: Some(0),
            move_history: Some(Vec::new()),
            complete: Some(false),
        }
    }

    pub fn handle_undo(&mut self) -> Update {
        if !self.model.puzzle_mut().is_some_and(Puzzle::undo) {
            return Update::message(MSG_NOTHING_TO_UNDO);
        }

        let move_history = self
            .model
            .puzzle()
            .map(Puzzle::move_history)
            .unwrap_or_default();
        let score = self.update_score();
        let mut update = Update {
            message: MSG_UNDONE.to_string(),
            score: Some(score),
            move_history: Some(move_history),
            complete: None,
        };
        self.check_puzzle_completion(&mut update);
        update
    }

    fn update_score(&mut self) -> usize {
        let score = self
            .model
            .puzzle_mut()
            .map_or(0, Puzzle::update_board_correctness);
        self.model.record_move(score);
        score
    }

    fn check_puzzle_completion(&mut self, update: &mut Update) {
        if self.model.puzzle().is_some_and(Puzzle::is_complete) {
            self.model.check_victory();
            update.complete = Some(true);
            update.message = MSG_COMPLETE.to_string();
        }
    }
}
