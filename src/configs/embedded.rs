//! Built-in puzzle configurations

use crate::core::Configuration;

/// A configuration stored as static data
#[derive(Debug, Clone, Copy)]
pub struct BuiltinConfig {
    pub name: &'static str,
    pub words: &'static [&'static str],
    pub initial: &'static [&'static [&'static str]],
}

impl BuiltinConfig {
    #[must_use]
    pub fn to_configuration(&self) -> Configuration {
        Configuration::new(
            self.name,
            self.words.iter().copied(),
            self.initial.iter().map(|row| row.iter().copied()),
        )
    }
}

/// The puzzles offered when no configuration file is given
pub const BUILTIN: &[BuiltinConfig] = &[
    BuiltinConfig {
        name: "#1",
        words: &["in,vis,i,ble", "im,mac,u,late", "af,fil,i,ate", "un,der,wa,ter"],
        initial: &[
            &["ter", "ate", "ble", "der"],
            &["fil", "in", "im", "i"],
            &["i", "late", "mac", "un"],
            &["u", "vis", "af", "wa"],
        ],
    },
    BuiltinConfig {
        name: "#2",
        words: &["ex,am,in,ing", "re,in,force,ment", "in,for,ma,tive", "ma,te,ri,al"],
        initial: &[
            &["force", "ment", "al", "in"],
            &["for", "ma", "am", "in"],
            &["tive", "ma", "ing", "in"],
            &["ri", "re", "te", "ex"],
        ],
    },
    BuiltinConfig {
        name: "#3",
        words: &["me,chan,i,cal", "cal,cu,lat,ing", "im,me,di,ate", "di,ag,on,al"],
        initial: &[
            &["al", "di", "me", "di"],
            &["cu", "cal", "cal", "me"],
            &["lat", "im", "ing", "i"],
            &["on", "ate", "ag", "chan"],
        ],
    },
];

/// Number of configurations in `BUILTIN`
pub const BUILTIN_COUNT: usize = BUILTIN.len();
