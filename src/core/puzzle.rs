//! Puzzle board state machine
//!
//! Syllables live in an arena and the board holds their ids. Correctness is
//! a pure function of the board: it is recomputed from scratch into a fresh
//! grid after every mutation, so undo and reset need no bookkeeping of their
//! own.

use super::{ConfigError, Configuration, Position, SwapRecord, Syllable, SyllableId};
use std::fmt;

/// Error type for boards that cannot be laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    Layout(ConfigError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "Invalid board layout: {err}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
        }
    }
}

/// A board of syllables, the target words and the swap history
#[derive(Debug, Clone)]
pub struct Puzzle {
    syllables: Vec<Syllable>,
    board: Vec<Vec<SyllableId>>,
    swap_record: Vec<SwapRecord>,
    targets: Vec<Vec<String>>,
    correctness: Vec<Vec<bool>>,
}

impl Puzzle {
    /// Lay out a board from a configuration's initial grid
    ///
    /// # Errors
    /// Returns `PuzzleError::Layout` if the initial grid is empty, has an
    /// empty row, or is not rectangular.
    pub fn new(config: &Configuration) -> Result<Self, PuzzleError> {
        config.check_layout().map_err(PuzzleError::Layout)?;

        let mut syllables = Vec::new();
        let mut board = Vec::with_capacity(config.initial.len());
        for (row, texts) in config.initial.iter().enumerate() {
            let mut cells = Vec::with_capacity(texts.len());
            for (column, text) in texts.iter().enumerate() {
                cells.push(SyllableId(syllables.len()));
                syllables.push(Syllable::new(text.as_str(), Position::new(row, column)));
            }
            board.push(cells);
        }

        let mut puzzle = Self {
            syllables,
            board,
            swap_record: Vec::new(),
            targets: config.target_sequences(),
            correctness: Vec::new(),
        };
        puzzle.update_board_correctness();
        Ok(puzzle)
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.len()
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.board.first().map_or(0, Vec::len)
    }

    /// The syllable currently occupying a cell
    #[must_use]
    pub fn syllable_at(&self, position: Position) -> Option<SyllableId> {
        self.board
            .get(position.row)
            .and_then(|row| row.get(position.column))
            .copied()
    }

    #[must_use]
    pub fn syllable(&self, id: SyllableId) -> Option<&Syllable> {
        self.syllables.get(id.0)
    }

    /// Text of the syllable in a cell
    #[must_use]
    pub fn text_at(&self, position: Position) -> Option<&str> {
        self.syllable_at(position)
            .map(|id| self.syllables[id.0].text())
    }

    /// Snapshot of the board as syllable texts, row-major
    #[must_use]
    pub fn board_texts(&self) -> Vec<Vec<String>> {
        self.board
            .iter()
            .map(|row| {
                row.iter()
                    .map(|id| self.syllables[id.0].text().to_string())
                    .collect()
            })
            .collect()
    }

    /// Per-cell correctness from the last recomputation
    #[must_use]
    pub fn correctness(&self) -> &[Vec<bool>] {
        &self.correctness
    }

    #[must_use]
    pub fn is_correct(&self, position: Position) -> bool {
        self.correctness
            .get(position.row)
            .and_then(|row| row.get(position.column))
            .copied()
            .unwrap_or(false)
    }

    #[must_use]
    pub fn target_sequences(&self) -> &[Vec<String>] {
        &self.targets
    }

    #[must_use]
    pub fn swap_record(&self) -> &[SwapRecord] {
        &self.swap_record
    }

    #[inline]
    #[must_use]
    pub fn swap_count(&self) -> usize {
        self.swap_record.len()
    }

    /// Formatted swap history, oldest first
    #[must_use]
    pub fn move_history(&self) -> Vec<String> {
        self.swap_record.iter().map(SwapRecord::format).collect()
    }

    /// Exchange two syllables and record the swap
    ///
    /// Returns `false` without touching the board if either id is unknown or
    /// both ids name the same syllable.
    pub fn swap_syllable(&mut self, first: SyllableId, second: SyllableId) -> bool {
        self.exchange(first, second, true)
    }

    /// Reverse the most recent swap
    ///
    /// Returns `false` and leaves everything untouched when there is no
    /// swap to reverse.
    pub fn undo(&mut self) -> bool {
        match self.swap_record.pop() {
            Some(record) => {
                let (first, second) = record.syllables();
                self.exchange(first, second, false)
            }
            None => false,
        }
    }

    /// Recompute which cells are correct and return the total score
    ///
    /// Each row is credited with the longest prefix (starting at column 0)
    /// that matches any target sequence. Cells inside that prefix are
    /// correct, every other cell of the row is not.
    pub fn update_board_correctness(&mut self) -> usize {
        let (correctness, score) = self.evaluate();
        self.correctness = correctness;
        score
    }

    /// True when every cell on the board is correct
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.correctness.iter().flatten().all(|&correct| correct)
    }

    fn evaluate(&self) -> (Vec<Vec<bool>>, usize) {
        let mut total = 0;
        let correctness: Vec<Vec<bool>> = self
            .board
            .iter()
            .map(|row| {
                let credited = self.credited_prefix(row);
                total += credited;
                (0..row.len()).map(|column| column < credited).collect::<Vec<_>>()
            })
            .collect();
        (correctness, total)
    }

    fn credited_prefix(&self, row: &[SyllableId]) -> usize {
        self.targets
            .iter()
            .map(|target| {
                row.iter()
                    .zip(target)
                    .take_while(|&(id, expected)| {
                        self.syllables[id.0].text() == expected.as_str()
                    })
                    .count()
            })
            .max()
            .unwrap_or(0)
    }

    fn exchange(&mut self, first: SyllableId, second: SyllableId, record: bool) -> bool {
        if first == second {
            return false;
        }
        let (Some(a), Some(b)) = (self.syllables.get(first.0), self.syllables.get(second.0))
        else {
            return false;
        };

        let (from_first, from_second) = (a.position(), b.position());
        if record {
            self.swap_record.push(SwapRecord::new(
                (first, a.text(), from_first),
                (second, b.text(), from_second),
            ));
        }

        self.syllables[first.0].move_to(from_second);
        self.syllables[second.0].move_to(from_first);
        self.board[from_second.row][from_second.column] = first;
        self.board[from_first.row][from_first.column] = second;

        self.update_board_correctness();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config1() -> Configuration {
        Configuration::new(
            "#1",
            ["in,vis,i,ble", "im,mac,u,late", "af,fil,i,ate", "un,der,wa,ter"],
            [
                ["ter", "ate", "ble", "der"],
                ["fil", "in", "im", "i"],
                ["i", "late", "mac", "un"],
                ["u", "vis", "af", "wa"],
            ],
        )
    }

    fn nearly_solved() -> Configuration {
        Configuration::new(
            "near",
            ["in,vis,i,ble", "un,der,wa,ter"],
            [["in", "vis", "i", "ble"], ["un", "der", "ter", "wa"]],
        )
    }

    fn swap_cells(puzzle: &mut Puzzle, a: (usize, usize), b: (usize, usize)) -> bool {
        let first = puzzle.syllable_at(a.into()).unwrap();
        let second = puzzle.syllable_at(b.into()).unwrap();
        puzzle.swap_syllable(first, second)
    }

    #[test]
    fn board_laid_out_from_config() {
        let puzzle = Puzzle::new(&config1()).unwrap();
        assert_eq!(puzzle.rows(), 4);
        assert_eq!(puzzle.columns(), 4);
        assert_eq!(puzzle.text_at(Position::new(0, 0)), Some("ter"));
        assert_eq!(puzzle.text_at(Position::new(3, 3)), Some("wa"));
        assert_eq!(puzzle.text_at(Position::new(4, 0)), None);

        let id = puzzle.syllable_at(Position::new(2, 1)).unwrap();
        assert_eq!(puzzle.syllable(id).unwrap().position(), Position::new(2, 1));
    }

    #[test]
    fn targets_derived_from_words() {
        let puzzle = Puzzle::new(&config1()).unwrap();
        assert_eq!(puzzle.target_sequences().len(), 4);
        assert_eq!(puzzle.target_sequences()[1], vec!["im", "mac", "u", "late"]);
    }

    #[test]
    fn ragged_layout_rejected() {
        let config = Configuration::new("bad", ["a,b"], vec![vec!["a", "b"], vec!["c"]]);
        assert!(matches!(
            Puzzle::new(&config),
            Err(PuzzleError::Layout(ConfigError::RaggedRow { row: 1, .. }))
        ));
    }

    #[test]
    fn swap_moves_same_syllables_and_records_previous_positions() {
        let mut puzzle = Puzzle::new(&config1()).unwrap();
        let ter = puzzle.syllable_at(Position::new(0, 0)).unwrap();
        let in_ = puzzle.syllable_at(Position::new(1, 1)).unwrap();

        assert!(puzzle.swap_syllable(ter, in_));

        assert_eq!(puzzle.syllable_at(Position::new(0, 0)), Some(in_));
        assert_eq!(puzzle.syllable_at(Position::new(1, 1)), Some(ter));
        assert_eq!(puzzle.syllable(ter).unwrap().position(), Position::new(1, 1));
        assert_eq!(puzzle.swap_count(), 1);
        assert_eq!(
            puzzle.move_history(),
            vec!["Swapped ter at (0, 0) with in at (1, 1)"]
        );
    }

    #[test]
    fn swap_same_or_unknown_syllable_fails() {
        let mut puzzle = Puzzle::new(&config1()).unwrap();
        let before = puzzle.board_texts();
        let id = puzzle.syllable_at(Position::new(0, 0)).unwrap();

        assert!(!puzzle.swap_syllable(id, id));
        assert!(!puzzle.swap_syllable(id, SyllableId(99)));
        assert_eq!(puzzle.board_texts(), before);
        assert_eq!(puzzle.swap_count(), 0);
    }

    #[test]
    fn undo_of_nothing_changes_nothing() {
        let mut puzzle = Puzzle::new(&config1()).unwrap();
        let board = puzzle.board_texts();
        let score = puzzle.update_board_correctness();

        for _ in 0..3 {
            assert!(!puzzle.undo());
        }
        assert_eq!(puzzle.board_texts(), board);
        assert_eq!(puzzle.update_board_correctness(), score);
        assert!(puzzle.move_history().is_empty());
    }

    #[test]
    fn swap_then_undo_restores_board() {
        let mut puzzle = Puzzle::new(&config1()).unwrap();
        swap_cells(&mut puzzle, (0, 1), (2, 3));
        let before = puzzle.board_texts();
        let before_correctness = puzzle.correctness().to_vec();

        for a in [(0, 0), (1, 2), (3, 3)] {
            for b in [(0, 3), (2, 1), (3, 0)] {
                assert!(swap_cells(&mut puzzle, a, b));
                assert_eq!(puzzle.swap_count(), 2);
                assert!(puzzle.undo());
                assert_eq!(puzzle.swap_count(), 1);
                assert_eq!(puzzle.board_texts(), before);
                assert_eq!(puzzle.correctness(), before_correctness.as_slice());
            }
        }
    }

    #[test]
    fn undo_reverses_most_recent_swap_first() {
        let mut puzzle = Puzzle::new(&config1()).unwrap();
        let initial = puzzle.board_texts();

        swap_cells(&mut puzzle, (0, 0), (1, 1));
        let after_first = puzzle.board_texts();
        swap_cells(&mut puzzle, (0, 0), (3, 3));

        assert!(puzzle.undo());
        assert_eq!(puzzle.board_texts(), after_first);
        assert!(puzzle.undo());
        assert_eq!(puzzle.board_texts(), initial);
        assert!(!puzzle.undo());
    }

    #[test]
    fn prefix_stops_at_first_mismatch() {
        let config = Configuration::new("p", ["in,vis,i,ble"], [["in", "vis", "X", "ble"]]);
        let mut puzzle = Puzzle::new(&config).unwrap();

        assert_eq!(puzzle.update_board_correctness(), 2);
        assert_eq!(puzzle.correctness()[0], vec![true, true, false, false]);
    }

    #[test]
    fn fragments_with_spaces_match_literally() {
        let config = Configuration::new("w", ["ma, te"], [["ma", "te"]]);
        let mut puzzle = Puzzle::new(&config).unwrap();

        assert_eq!(puzzle.update_board_correctness(), 1);
        assert_eq!(puzzle.correctness()[0], vec![true, false]);
    }

    #[test]
    fn row_takes_longest_prefix_over_all_targets() {
        let config = Configuration::new(
            "p",
            ["in,vis,i,ble", "in,for,ma,tive"],
            [["in", "for", "ma", "ble"]],
        );
        let mut puzzle = Puzzle::new(&config).unwrap();
        assert_eq!(puzzle.update_board_correctness(), 3);
    }

    #[test]
    fn shorter_target_caps_prefix() {
        let config = Configuration::new("p", ["ma,te"], [["ma", "te", "ri"]]);
        let mut puzzle = Puzzle::new(&config).unwrap();
        assert_eq!(puzzle.update_board_correctness(), 2);
        assert!(!puzzle.is_correct(Position::new(0, 2)));
    }

    #[test]
    fn disrupting_prefix_demotes_cells() {
        let mut puzzle = Puzzle::new(&nearly_solved()).unwrap();
        assert!(puzzle.is_correct(Position::new(0, 3)));

        swap_cells(&mut puzzle, (0, 1), (1, 3));

        assert!(puzzle.is_correct(Position::new(0, 0)));
        assert!(!puzzle.is_correct(Position::new(0, 1)));
        assert!(!puzzle.is_correct(Position::new(0, 2)));
        assert!(!puzzle.is_correct(Position::new(0, 3)));
    }

    #[test]
    fn score_depends_only_on_board() {
        let mut played = Puzzle::new(&config1()).unwrap();
        swap_cells(&mut played, (0, 0), (1, 1));
        swap_cells(&mut played, (0, 1), (3, 1));
        swap_cells(&mut played, (3, 1), (0, 1));
        swap_cells(&mut played, (1, 0), (2, 2));

        let mut fresh_config = config1();
        fresh_config.initial = played.board_texts();
        let mut fresh = Puzzle::new(&fresh_config).unwrap();

        assert_eq!(played.update_board_correctness(), fresh.update_board_correctness());
        assert_eq!(played.correctness(), fresh.correctness());
    }

    #[test]
    fn initial_score_of_scrambled_board() {
        let mut puzzle = Puzzle::new(&config1()).unwrap();
        assert_eq!(puzzle.update_board_correctness(), 0);

        swap_cells(&mut puzzle, (0, 0), (1, 1));
        assert_eq!(puzzle.update_board_correctness(), 1);
    }

    #[test]
    fn completion_when_every_cell_credited() {
        let mut puzzle = Puzzle::new(&nearly_solved()).unwrap();
        assert_eq!(puzzle.update_board_correctness(), 6);
        assert!(!puzzle.is_complete());

        swap_cells(&mut puzzle, (1, 2), (1, 3));

        assert_eq!(puzzle.update_board_correctness(), 8);
        assert!(puzzle.is_complete());

        puzzle.undo();
        assert!(!puzzle.is_complete());
    }
}
