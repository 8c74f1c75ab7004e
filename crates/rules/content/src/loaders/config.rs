//! Rules configuration loader.

use std::path::Path;

use hero_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`RulesConfig`] from a TOML file.
    ///
    /// Missing keys keep their published defaults, so a file may override a
    /// single divisor.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let config: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules config TOML: {}", e))?;

        Ok(config)
    }
}
