//! TUI application state and logic

use crate::core::Position;
use crate::game::{Controller, Status, Update};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Shown when a move is attempted on a finished puzzle
pub const MSG_LOCKED: &str = "Puzzle is complete! No more moves allowed.";

const MSG_WELCOME: &str = "Select a configuration to display the board.";

/// Application state
pub struct App {
    pub controller: Controller,
    pub status: Status,
    pub cursor: Position,
    pub selected: Vec<Position>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            status: Status {
                message: MSG_WELCOME.to_string(),
                ..Status::default()
            },
            cursor: Position::new(0, 0),
            selected: Vec::new(),
            should_quit: false,
        }
    }

    /// Name of the loaded configuration, if any
    #[must_use]
    pub fn config_name(&self) -> Option<&str> {
        self.controller
            .model()
            .current_config()
            .map(|config| config.name.as_str())
    }

    /// Select the configuration at a catalogue index
    pub fn select_config(&mut self, index: usize) {
        let Some(name) = self
            .controller
            .model()
            .configurations()
            .get(index)
            .map(|config| config.name.clone())
        else {
            return;
        };
        self.select_config_by_name(&name);
    }

    pub fn select_config_by_name(&mut self, name: &str) {
        let update = self.controller.handle_config_select_by_name(name);
        if update.complete.is_some() {
            self.cursor = Position::new(0, 0);
            self.selected.clear();
        }
        self.apply(update);
    }

    /// Move the cursor, clamped to the board
    pub fn move_cursor(&mut self, rows: isize, columns: isize) {
        let Some(puzzle) = self.controller.puzzle() else {
            return;
        };
        let max_row = puzzle.rows().saturating_sub(1);
        let max_column = puzzle.columns().saturating_sub(1);

        self.cursor = Position::new(
            self.cursor.row.saturating_add_signed(rows).min(max_row),
            self.cursor.column.saturating_add_signed(columns).min(max_column),
        );
    }

    #[must_use]
    pub fn is_selected(&self, position: Position) -> bool {
        self.selected.contains(&position)
    }

    /// Select or deselect the tile under the cursor
    pub fn toggle_selection(&mut self) {
        if self.status.complete {
            self.status.message = MSG_LOCKED.to_string();
            return;
        }
        if self.controller.puzzle().is_none() {
            return;
        }

        let cursor = self.cursor;
        if let Some(index) = self.selected.iter().position(|&p| p == cursor) {
            self.selected.remove(index);
        } else {
            self.selected.push(cursor);
        }
    }

    pub fn swap_selected(&mut self) {
        if self.status.complete {
            self.status.message = MSG_LOCKED.to_string();
            return;
        }
        let update = self.controller.handle_swap(&self.selected);
        if self.selected.len() == 2 {
            self.selected.clear();
        }
        self.apply(update);
    }

    pub fn undo(&mut self) {
        if self.status.complete {
            self.status.message = MSG_LOCKED.to_string();
            return;
        }
        let update = self.controller.handle_undo();
        self.apply(update);
    }

    pub fn reset(&mut self) {
        let update = self.controller.handle_reset();
        self.selected.clear();
        self.apply(update);
    }

    fn apply(&mut self, update: Update) {
        update.merge_into(&mut self.status);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1, 0),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1, 0),
                KeyCode::Left | KeyCode::Char('h') => app.move_cursor(0, -1),
                KeyCode::Right | KeyCode::Char('l') => app.move_cursor(0, 1),
                KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selection(),
                KeyCode::Char('s') => app.swap_selected(),
                KeyCode::Char('u') => app.undo(),
                KeyCode::Char('r') => app.reset(),
                KeyCode::Char(c @ '1'..='9') => {
                    app.select_config(c as usize - '1' as usize);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::loader::builtin_configurations;
    use crate::core::Configuration;
    use crate::game::{MSG_COMPLETE, MSG_SELECT_TWO, MSG_SWAPPED, Model};

    fn app() -> App {
        App::new(Controller::new(Model::new(builtin_configurations())))
    }

    fn near_solved_app() -> App {
        let configs = vec![Configuration::new(
            "near",
            ["ma,te,ri,al"],
            [["ma", "te", "al", "ri"]],
        )];
        let mut app = App::new(Controller::new(Model::new(configs)));
        app.select_config(0);
        app
    }

    #[test]
    fn starts_without_board() {
        let mut app = app();
        assert_eq!(app.status.message, MSG_WELCOME);
        assert!(app.config_name().is_none());

        app.move_cursor(1, 1);
        app.toggle_selection();
        assert_eq!(app.cursor, Position::new(0, 0));
        assert!(app.selected.is_empty());
    }

    #[test]
    fn select_config_by_index() {
        let mut app = app();
        app.select_config(1);
        assert_eq!(app.config_name(), Some("#2"));
        assert_eq!(app.status.message, "Configuration #2 loaded.");

        app.select_config(8);
        assert_eq!(app.config_name(), Some("#2"));
    }

    #[test]
    fn cursor_is_clamped() {
        let mut app = app();
        app.select_config(0);

        app.move_cursor(-1, -1);
        assert_eq!(app.cursor, Position::new(0, 0));
        app.move_cursor(10, 2);
        assert_eq!(app.cursor, Position::new(3, 2));
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut app = app();
        app.select_config(0);

        app.toggle_selection();
        assert!(app.is_selected(Position::new(0, 0)));
        app.toggle_selection();
        assert!(app.selected.is_empty());
    }

    #[test]
    fn swap_selected_pair() {
        let mut app = app();
        app.select_config(0);
        app.toggle_selection();
        app.move_cursor(1, 1);
        app.toggle_selection();

        app.swap_selected();
        assert_eq!(app.status.message, MSG_SWAPPED);
        assert_eq!(app.status.score, 1);
        assert_eq!(
            app.status.move_history,
            vec!["Swapped ter at (0, 0) with in at (1, 1)"]
        );
        assert!(app.selected.is_empty());
    }

    #[test]
    fn swap_with_one_selection_keeps_it() {
        let mut app = app();
        app.select_config(0);
        app.toggle_selection();

        app.swap_selected();
        assert_eq!(app.status.message, MSG_SELECT_TWO);
        assert_eq!(app.selected, vec![Position::new(0, 0)]);
    }

    #[test]
    fn completed_puzzle_locks_moves() {
        let mut app = near_solved_app();
        app.move_cursor(0, 2);
        app.toggle_selection();
        app.move_cursor(0, 1);
        app.toggle_selection();
        app.swap_selected();

        assert_eq!(app.status.message, MSG_COMPLETE);
        assert!(app.status.complete);

        app.undo();
        assert_eq!(app.status.message, MSG_LOCKED);
        assert_eq!(app.controller.puzzle().unwrap().swap_count(), 1);

        app.toggle_selection();
        assert_eq!(app.status.message, MSG_LOCKED);
        assert!(app.selected.is_empty());

        app.reset();
        assert!(!app.status.complete);
        assert_eq!(app.status.score, 0);
        assert!(app.status.move_history.is_empty());
    }
}
