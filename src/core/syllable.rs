//! Syllable tiles
//!
//! A syllable keeps its identity for the whole game: swaps move the same
//! tile between cells, they never create a new one.

use super::Position;
use std::fmt;

/// Stable handle to a syllable inside a puzzle's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyllableId(pub(crate) usize);

/// A text fragment and the cell it currently occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    text: String,
    position: Position,
}

impl Syllable {
    #[must_use]
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    /// The fragment text (never changes during play)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
