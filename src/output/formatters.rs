//! Formatting utilities for terminal output

/// Shown in place of an empty move history
pub const NO_MOVES: &str = "No moves yet.";

/// Width of the widest syllable on the board
#[must_use]
pub fn cell_width(board: &[Vec<String>]) -> usize {
    board
        .iter()
        .flatten()
        .map(|text| text.chars().count())
        .max()
        .unwrap_or(0)
}

/// Number the history entries, oldest first
#[must_use]
pub fn history_lines(history: &[String]) -> Vec<String> {
    if history.is_empty() {
        return vec![NO_MOVES.to_string()];
    }
    history
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {entry}", i + 1))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
