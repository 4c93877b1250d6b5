//! TUI rendering with ratatui
//!
//! Board, score, history and message panels for the puzzle.

use super::app::App;
use crate::core::Position;
use crate::game::MSG_COMPLETE;
use crate::output::formatters::{NO_MOVES, cell_width};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Message
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_message(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = app.config_name().map_or_else(
        || "🧩 SYLLABLAST".to_string(),
        |name| format!("🧩 SYLLABLAST - Board {name}"),
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(puzzle) = app.controller.puzzle() else {
        let paragraph = Paragraph::new("Select a configuration to display the board.")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let texts = puzzle.board_texts();
    let width = cell_width(&texts).max(1);
    let mut lines = vec![Line::from("")];

    for (row, cells) in texts.iter().enumerate() {
        let mut spans = vec![Span::raw(" ")];
        for (column, text) in cells.iter().enumerate() {
            let position = Position::new(row, column);
            let mut style = if app.is_selected(position) {
                Style::default().fg(Color::Black).bg(Color::LightBlue)
            } else if puzzle.is_correct(position) {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            if position == app.cursor {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {text:^width$} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score gauge
            Constraint::Length(4), // Game info
            Constraint::Min(5),    // History
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_game_info(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let total = app
        .controller
        .puzzle()
        .map_or(0, |puzzle| puzzle.rows() * puzzle.columns());
    let percent = if total == 0 {
        0
    } else {
        (app.status.score * 100 / total).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{}/{total} syllables in place", app.status.score));

    f.render_widget(gauge, area);
}

fn render_game_info(f: &mut Frame, app: &App, area: Rect) {
    let swaps = app.controller.puzzle().map_or(0, |puzzle| puzzle.swap_count());
    let selected = app
        .selected
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    let content = vec![
        Line::from(format!("Swaps:    {swaps}")),
        Line::from(format!("Selected: {selected}")),
    ];
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Game Info ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = &app.status.move_history;
    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new(NO_MOVES).style(Style::default().fg(Color::DarkGray))]
    } else {
        // Newest entries first so the latest move is always visible
        history
            .iter()
            .enumerate()
            .rev()
            .map(|(i, entry)| ListItem::new(format!("{}. {entry}", i + 1)))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Move History ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.status.complete {
        Color::Green
    } else {
        Color::Yellow
    };
    let title = if app.status.complete {
        format!(" {MSG_COMPLETE} ")
    } else {
        " Message ".to_string()
    };

    let message = Paragraph::new(app.status.message.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(message, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.status.complete {
        "q: Quit | r: Reset | 1-9: Configuration"
    } else {
        "←↑↓→/hjkl: Move | Space: Select | s: Swap | u: Undo | r: Reset | 1-9: Configuration | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
