//! Syllablast
//!
//! A tile-swap word puzzle: rearrange a grid of syllables by swapping pairs
//! until every row spells one of the target words.
//!
//! # Quick Start
//!
//! ```rust
//! use syllablast::configs::loader::builtin_configurations;
//! use syllablast::core::Position;
//! use syllablast::game::{Controller, Model};
//!
//! let mut controller = Controller::new(Model::new(builtin_configurations()));
//! controller.handle_config_select_by_name("#1");
//!
//! let update = controller.handle_swap(&[Position::new(0, 0), Position::new(1, 1)]);
//! assert_eq!(update.message, "Swapped successfully.");
//! assert_eq!(
//!     update.move_history.unwrap(),
//!     vec!["Swapped ter at (0, 0) with in at (1, 1)"]
//! );
//! ```

// Core puzzle types
pub mod core;

// Model and controller
pub mod game;

// Built-in and file-based configurations
pub mod configs;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
