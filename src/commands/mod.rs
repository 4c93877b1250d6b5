//! Command implementations

pub mod list;
pub mod show;
pub mod simple;

pub use list::{ConfigSummary, list_configurations};
pub use show::{ShowResult, show_configuration};
pub use simple::run_simple;
