//! Core puzzle types
//!
//! Board, syllables, history and scoring. Nothing here touches the terminal.

mod config;
mod position;
mod puzzle;
mod record;
mod syllable;

pub use config::{ConfigError, Configuration, SYLLABLE_SEPARATOR};
pub use position::Position;
pub use puzzle::{Puzzle, PuzzleError};
pub use record::SwapRecord;
pub use syllable::{Syllable, SyllableId};
