//! Swap history entries

use super::{Position, SyllableId};
use std::fmt;

/// One swap, captured with both syllables' positions from before the swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRecord {
    first: SyllableId,
    second: SyllableId,
    first_text: String,
    second_text: String,
    first_from: Position,
    second_from: Position,
}

impl SwapRecord {
    pub(crate) fn new(
        (first, first_text, first_from): (SyllableId, &str, Position),
        (second, second_text, second_from): (SyllableId, &str, Position),
    ) -> Self {
        Self {
            first,
            second,
            first_text: first_text.to_string(),
            second_text: second_text.to_string(),
            first_from,
            second_from,
        }
    }

    #[must_use]
    pub const fn syllables(&self) -> (SyllableId, SyllableId) {
        (self.first, self.second)
    }

    /// Human-readable history line
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SwapRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swapped {} at {} with {} at {}",
            self.first_text, self.first_from, self.second_text, self.second_from
        )
    }
}
