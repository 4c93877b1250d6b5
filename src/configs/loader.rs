//! Configuration loading utilities
//!
//! Configurations are read from JSON files holding either a single
//! `{ "name", "words", "initial" }` object or an array of them.

use super::BUILTIN;
use crate::core::{ConfigError, Configuration};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for configuration files
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
    Empty,
    Invalid { name: String, source: ConfigError },
    DuplicateName(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::Json(err) => write!(f, "Malformed configuration file: {err}"),
            Self::Empty => write!(f, "Configuration file contains no configurations"),
            Self::Invalid { name, source } => {
                write!(f, "Configuration '{name}' is invalid: {source}")
            }
            Self::DuplicateName(name) => {
                write!(f, "Configuration name '{name}' appears more than once")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Invalid { source, .. } => Some(source),
            Self::Empty | Self::DuplicateName(_) => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Many(Vec<Configuration>),
    One(Configuration),
}

/// Load configurations from a JSON file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, is not valid JSON of the
/// expected shape, or holds an invalid or duplicated configuration.
///
/// # Examples
/// ```no_run
/// use syllablast::configs::loader::load_from_file;
///
/// let configs = load_from_file("puzzles.json").unwrap();
/// println!("Loaded {} puzzles", configs.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Configuration>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_configurations(&content)
}

/// Parse and check configurations from JSON text
///
/// # Errors
///
/// Same conditions as [`load_from_file`], minus I/O.
pub fn parse_configurations(json: &str) -> Result<Vec<Configuration>, LoadError> {
    let configs = match serde_json::from_str::<ConfigFile>(json)? {
        ConfigFile::Many(configs) => configs,
        ConfigFile::One(config) => vec![config],
    };

    if configs.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut seen = FxHashSet::default();
    for config in &configs {
        config
            .validate()
            .and_then(|()| config.check_layout())
            .map_err(|source| LoadError::Invalid {
                name: config.name.clone(),
                source,
            })?;
        if !seen.insert(config.name.as_str()) {
            return Err(LoadError::DuplicateName(config.name.clone()));
        }
    }

    Ok(configs)
}

/// The built-in catalogue as owned configurations
///
/// # Examples
/// ```
/// use syllablast::configs::loader::builtin_configurations;
/// use syllablast::configs::BUILTIN;
///
/// let configs = builtin_configurations();
/// assert_eq!(configs.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn builtin_configurations() -> Vec<Configuration> {
    BUILTIN.iter().map(super::BuiltinConfig::to_configuration).collect()
}
