//! Puzzle configurations
//!
//! Built-in puzzles compiled into the binary, plus a loader for JSON files.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN, BUILTIN_COUNT, BuiltinConfig};

/// Find a configuration by name
#[must_use]
pub fn find_by_name<'a>(
    configs: &'a [crate::core::Configuration],
    name: &str,
) -> Option<&'a crate::core::Configuration> {
    configs.iter().find(|config| config.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(BUILTIN.len(), BUILTIN_COUNT);
        assert_eq!(BUILTIN_COUNT, 3);
    }

    #[test]
    fn builtin_configurations_are_valid() {
        for config in loader::builtin_configurations() {
            assert_eq!(config.validate(), Ok(()), "{} failed validation", config.name);
            assert_eq!(config.check_layout(), Ok(()), "{} is not rectangular", config.name);
            assert_eq!(config.dimensions(), (4, 4));
        }
    }

    #[test]
    fn builtin_layouts_use_target_syllables() {
        for config in loader::builtin_configurations() {
            let mut expected: Vec<String> =
                config.target_sequences().into_iter().flatten().collect();
            let mut actual: Vec<String> = config.initial.iter().flatten().cloned().collect();
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected, "{} layout differs from its words", config.name);
        }
    }

    #[test]
    fn builtin_puzzles_start_unsolved() {
        for config in loader::builtin_configurations() {
            let puzzle = Puzzle::new(&config).unwrap();
            assert!(!puzzle.is_complete(), "{} starts solved", config.name);
        }
    }

    #[test]
    fn find_by_name_lookup() {
        let configs = loader::builtin_configurations();
        assert_eq!(find_by_name(&configs, "#2").unwrap().initial[0][0], "force");
        assert!(find_by_name(&configs, "#9").is_none());
    }
}
