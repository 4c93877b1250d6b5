//! Puzzle configurations
//!
//! A configuration names a puzzle, lists its target words (each a
//! comma-joined list of syllables) and gives the initial board layout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the syllables of a target word
pub const SYLLABLE_SEPARATOR: char = ',';

/// A named, read-only puzzle definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub name: String,
    pub words: Vec<String>,
    pub initial: Vec<Vec<String>>,
}

/// Error type for unusable configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingName,
    NoWords,
    NoLayout,
    EmptyRow(usize),
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Configuration has no name"),
            Self::NoWords => write!(f, "Configuration has no target words"),
            Self::NoLayout => write!(f, "Configuration has no initial layout"),
            Self::EmptyRow(row) => write!(f, "Layout row {row} is empty"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Layout row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Configuration {
    pub fn new(
        name: impl Into<String>,
        words: impl IntoIterator<Item = impl Into<String>>,
        initial: impl IntoIterator<Item = impl IntoIterator<Item = impl Into<String>>>,
    ) -> Self {
        Self {
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
            initial: initial
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Check the fields a configuration needs before it can be selected
    ///
    /// # Errors
    /// Returns `ConfigError` if the name is empty, there are no words, or
    /// there is no initial layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::MissingName);
        }
        if self.words.is_empty() {
            return Err(ConfigError::NoWords);
        }
        if self.initial.is_empty() {
            return Err(ConfigError::NoLayout);
        }
        Ok(())
    }

    /// Check that the initial layout is a non-empty rectangle
    ///
    /// # Errors
    /// Returns `ConfigError` for a missing layout, an empty row, or a row
    /// whose length differs from the first row.
    pub fn check_layout(&self) -> Result<(), ConfigError> {
        let first = self.initial.first().ok_or(ConfigError::NoLayout)?;
        let expected = first.len();

        for (row, cells) in self.initial.iter().enumerate() {
            if cells.is_empty() {
                return Err(ConfigError::EmptyRow(row));
            }
            if cells.len() != expected {
                return Err(ConfigError::RaggedRow {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }
        Ok(())
    }

    /// Each target word split into its ordered syllables
    #[must_use]
    pub fn target_sequences(&self) -> Vec<Vec<String>> {
        self.words
            .iter()
            .map(|word| word.split(SYLLABLE_SEPARATOR).map(str::to_string).collect())
            .collect()
    }

    /// `(rows, columns)` of the initial layout, using the first row's width
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (
            self.initial.len(),
            self.initial.first().map_or(0, Vec::len),
        )
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
