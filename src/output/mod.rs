//! Terminal output formatting
//!
//! Display utilities for the line-oriented front end.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_configurations, print_history, print_show_result, print_status,
};
