//! Simple interactive CLI mode
//!
//! Line-oriented play without the TUI

use crate::core::Position;
use crate::game::{Controller, Status};
use crate::output::{print_board, print_configurations, print_history, print_status};
use anyhow::{Context, Result};
use std::io::{self, Write};

use super::list_configurations;

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Load(String),
    Swap(Position, Position),
    Undo,
    Reset,
    Board,
    History,
    Help,
    Quit,
}

/// Parse one input line
///
/// # Errors
///
/// Returns a message describing the problem when the line is not a known
/// command or its arguments are malformed.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err("Type 'help' for a list of commands.".to_string());
    };
    let args: Vec<&str> = parts.collect();

    match (verb.to_lowercase().as_str(), args.as_slice()) {
        ("list" | "ls", []) => Ok(Command::List),
        ("load" | "l", [name]) => Ok(Command::Load((*name).to_string())),
        ("swap" | "s", [r1, c1, r2, c2]) => {
            let first = parse_position(r1, c1)?;
            let second = parse_position(r2, c2)?;
            Ok(Command::Swap(first, second))
        }
        ("swap" | "s", _) => Err("Usage: swap <row> <col> <row> <col>".to_string()),
        ("undo" | "u", []) => Ok(Command::Undo),
        ("reset" | "r", []) => Ok(Command::Reset),
        ("board" | "b", []) => Ok(Command::Board),
        ("history" | "h", []) => Ok(Command::History),
        ("help" | "?", []) => Ok(Command::Help),
        ("quit" | "q" | "exit", []) => Ok(Command::Quit),
        (other, _) => Err(format!("Unknown command '{other}'. Type 'help' for a list of commands.")),
    }
}

fn parse_position(row: &str, column: &str) -> Result<Position, String> {
    let row = row
        .parse()
        .map_err(|_| format!("Invalid row '{row}'"))?;
    let column = column
        .parse()
        .map_err(|_| format!("Invalid column '{column}'"))?;
    Ok(Position::new(row, column))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut controller: Controller, initial: Option<&str>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Syllablast - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Swap syllables until every row spells a target word.");
    println!("Type 'help' for commands.\n");

    let mut status = Status::default();

    if let Some(name) = initial {
        controller
            .handle_config_select_by_name(name)
            .merge_into(&mut status);
        show(&controller, &status);
    } else {
        print_configurations(&list_configurations(controller.model().configurations()));
        println!("\nLoad one with 'load <name>'.\n");
    }

    loop {
        let Some(line) = get_user_input("syllablast")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("❌ {message}\n");
                continue;
            }
        };

        if status.complete && matches!(command, Command::Swap(..) | Command::Undo) {
            println!("Puzzle is complete! No more moves allowed.\n");
            continue;
        }

        let update = match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => {
                print_help();
                continue;
            }
            Command::List => {
                print_configurations(&list_configurations(controller.model().configurations()));
                println!();
                continue;
            }
            Command::Board => {
                show(&controller, &status);
                continue;
            }
            Command::History => {
                print_history(&status.move_history);
                println!();
                continue;
            }
            Command::Load(name) => controller.handle_config_select_by_name(&name),
            Command::Swap(first, second) => controller.handle_swap(&[first, second]),
            Command::Undo => controller.handle_undo(),
            Command::Reset => controller.handle_reset(),
        };

        update.merge_into(&mut status);
        show(&controller, &status);
    }
}

fn show(controller: &Controller, status: &Status) {
    if let Some(puzzle) = controller.puzzle() {
        println!();
        print_board(puzzle);
    }
    print_status(status, controller.puzzle());
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  list                      Show available configurations");
    println!("  load <name>               Start the named configuration");
    println!("  swap <r1> <c1> <r2> <c2>  Swap two syllables (zero-based)");
    println!("  undo                      Undo the last swap");
    println!("  reset                     Restart the current configuration");
    println!("  board                     Show the board again");
    println!("  history                   Show the move history");
    println!("  quit                      Leave\n");
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}> ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
