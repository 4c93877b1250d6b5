//! Configuration listing command

use crate::core::Configuration;

/// One catalogue entry
pub struct ConfigSummary {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
    pub word_count: usize,
}

/// Summarize every configuration in catalogue order
#[must_use]
pub fn list_configurations(configs: &[Configuration]) -> Vec<ConfigSummary> {
    configs
        .iter()
        .map(|config| {
            let (rows, columns) = config.dimensions();
            ConfigSummary {
                name: config.name.clone(),
                rows,
                columns,
                word_count: config.words.len(),
            }
        })
        .collect()
}
