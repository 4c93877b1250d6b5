//! Display functions for the line-oriented front end

use super::formatters::{NO_MOVES, cell_width, create_progress_bar, history_lines};
use crate::commands::{ConfigSummary, ShowResult};
use crate::core::{Position, Puzzle};
use crate::game::Status;
use colored::Colorize;

/// Print the board, correct cells in green
pub fn print_board(puzzle: &Puzzle) {
    let texts = puzzle.board_texts();
    let width = cell_width(&texts).max(1);

    let header: String = (0..puzzle.columns())
        .map(|column| format!(" {column:^width$} "))
        .collect();
    println!("    {}", header.bright_black());

    for (row, cells) in texts.iter().enumerate() {
        print!("{:>3} ", row.to_string().bright_black());
        for (column, text) in cells.iter().enumerate() {
            let cell = format!(" {text:^width$} ");
            if puzzle.is_correct(Position::new(row, column)) {
                print!("{}", cell.black().on_green().bold());
            } else {
                print!("{}", cell.white());
            }
        }
        println!();
    }
}

/// Print the last message, score and completion state
pub fn print_status(status: &Status, puzzle: Option<&Puzzle>) {
    if let Some(puzzle) = puzzle {
        let total = puzzle.rows() * puzzle.columns();
        let bar = create_progress_bar(status.score, total, 16);
        println!(
            "\nScore: [{}] {}   Swaps: {}",
            bar.green(),
            format!("{}/{total}", status.score).bright_yellow(),
            puzzle.swap_count()
        );
    }

    if status.complete {
        println!("\n{}", "═".repeat(60).bright_cyan());
        println!(
            "{}",
            "        🎉 🎊 ✨  P U Z Z L E   C O M P L E T E !  ✨ 🎊 🎉"
                .bright_green()
                .bold()
        );
        println!("{}", "═".repeat(60).bright_cyan());
    }

    if !status.message.is_empty() {
        println!("{}", status.message.bright_white().bold());
    }
}

/// Print the numbered move history
pub fn print_history(history: &[String]) {
    println!("{}", "Move history:".bright_cyan().bold());
    for line in history_lines(history) {
        if line == NO_MOVES {
            println!("  {}", line.bright_black());
        } else {
            println!("  {line}");
        }
    }
}

/// Print the configuration catalogue
pub fn print_configurations(summaries: &[ConfigSummary]) {
    println!("{}", "Configurations:".bright_cyan().bold());
    if summaries.is_empty() {
        println!("  {}", "(none)".bright_black());
    }
    for summary in summaries {
        println!(
            "  {:<8} {}x{} board, {} words",
            summary.name.bright_yellow().bold(),
            summary.rows,
            summary.columns,
            summary.word_count
        );
    }
}

/// Print a configuration's starting board and targets
pub fn print_show_result(result: &ShowResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "CONFIGURATION".bright_cyan().bold(),
        result.name.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📖 Target words:");
    for target in &result.targets {
        println!("   {}", target.join("·"));
    }

    println!("\n🧩 Initial board:");
    print_board(&result.puzzle);

    println!(
        "\n   Already correct: {}",
        format!("{}/{}", result.score, result.total_cells).bright_yellow()
    );
}
