//! Configuration inspection command
//!
//! Lays out a configuration's initial board and scores it without playing.

use crate::configs::find_by_name;
use crate::core::{Configuration, Puzzle};

/// A configuration's starting board and how much of it is already correct
pub struct ShowResult {
    pub name: String,
    pub targets: Vec<Vec<String>>,
    pub puzzle: Puzzle,
    pub score: usize,
    pub total_cells: usize,
}

/// Build the initial puzzle for the named configuration
///
/// # Errors
///
/// Returns an error if no configuration has that name or its layout cannot
/// be turned into a board.
pub fn show_configuration(configs: &[Configuration], name: &str) -> Result<ShowResult, String> {
    let config =
        find_by_name(configs, name).ok_or_else(|| format!("No configuration named '{name}'"))?;
    let mut puzzle = Puzzle::new(config).map_err(|e| e.to_string())?;
    let score = puzzle.update_board_correctness();

    Ok(ShowResult {
        name: config.name.clone(),
        targets: config.target_sequences(),
        total_cells: puzzle.rows() * puzzle.columns(),
        puzzle,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::loader::builtin_configurations;

    #[test]
    fn shows_builtin() {
        let result = show_configuration(&builtin_configurations(), "#2").unwrap();

        assert_eq!(result.name, "#2");
        assert_eq!(result.total_cells, 16);
        assert_eq!(result.targets[3], vec!["ma", "te", "ri", "al"]);
        assert!(!result.puzzle.is_complete());
    }

    #[test]
    fn partially_correct_start_is_scored() {
        let configs = vec![Configuration::new(
            "part",
            ["ex,am,in,ing"],
            [["ex", "am", "ing", "in"]],
        )];
        let result = show_configuration(&configs, "part").unwrap();
        assert_eq!(result.score, 2);
    }

    #[test]
    fn unknown_name() {
        let result = show_configuration(&builtin_configurations(), "#7");
        assert_eq!(result.err().unwrap(), "No configuration named '#7'");
    }
}
