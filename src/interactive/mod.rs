//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, MSG_LOCKED, run_tui};
