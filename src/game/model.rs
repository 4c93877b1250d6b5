//! Game model
//!
//! Owns the configuration catalogue, the selected configuration and the
//! live puzzle. Resetting replaces the puzzle wholesale.

use crate::configs::find_by_name;
use crate::core::{Configuration, Puzzle};
use tracing::{error, info, warn};

/// Configuration selection and puzzle lifecycle
#[derive(Debug, Clone)]
pub struct Model {
    configs: Vec<Configuration>,
    current_config: Option<Configuration>,
    puzzle: Option<Puzzle>,
    score: usize,
    num_swaps: usize,
    victory: bool,
}

impl Model {
    #[must_use]
    pub const fn new(configs: Vec<Configuration>) -> Self {
        Self {
            configs,
            current_config: None,
            puzzle: None,
            score: 0,
            num_swaps: 0,
            victory: false,
        }
    }

    /// Configurations available for selection
    #[must_use]
    pub fn configurations(&self) -> &[Configuration] {
        &self.configs
    }

    #[must_use]
    pub fn find_config(&self, name: &str) -> Option<&Configuration> {
        find_by_name(&self.configs, name)
    }

    #[must_use]
    pub const fn current_config(&self) -> Option<&Configuration> {
        self.current_config.as_ref()
    }

    #[must_use]
    pub const fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    pub const fn puzzle_mut(&mut self) -> Option<&mut Puzzle> {
        self.puzzle.as_mut()
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn num_swaps(&self) -> usize {
        self.num_swaps
    }

    #[must_use]
    pub const fn victory(&self) -> bool {
        self.victory
    }

    /// Adopt a configuration and start a fresh puzzle from it
    ///
    /// A configuration without a name, words, or initial layout is rejected
    /// and the model is left untouched.
    pub fn set_config(&mut self, config: Configuration) -> bool {
        if let Err(err) = config.validate() {
            warn!(name = %config.name, %err, "rejected configuration");
            return false;
        }
        self.current_config = Some(config);
        self.reset_puzzle()
    }

    /// Rebuild the puzzle from the current configuration
    pub fn reset_puzzle(&mut self) -> bool {
        let Some(config) = &self.current_config else {
            warn!("No configuration selected to reset the puzzle.");
            return false;
        };

        match Puzzle::new(config) {
            Ok(puzzle) => {
                self.puzzle = Some(puzzle);
                self.score = 0;
                self.num_swaps = 0;
                self.victory = false;
                true
            }
            Err(err) => {
                error!(name = %config.name, %err, "Failed to initialize the puzzle");
                self.puzzle = None;
                false
            }
        }
    }

    /// Latch the victory flag once the puzzle is complete
    ///
    /// Never clears the flag; only a reset does that.
    pub fn check_victory(&mut self) {
        if self.puzzle.as_ref().is_some_and(Puzzle::is_complete) {
            if !self.victory {
                info!("Puzzle completed!");
            }
            self.victory = true;
        }
    }

    /// Store the latest score and sync the swap counter with the history
    pub fn record_move(&mut self, score: usize) {
        self.score = score;
        self.num_swaps = self.puzzle.as_ref().map_or(0, Puzzle::swap_count);
    }
}
