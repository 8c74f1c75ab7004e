//! Content factory for building rules values from a data directory.

use std::path::{Path, PathBuf};

use hero_core::{CustomPowerType, RulesConfig};

use crate::loaders::{ConfigLoader, CustomPowerLoader, ItemLoader, LoadResult, LoadedItems};

/// Content factory that loads all rules content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml          (optional, defaults otherwise)
/// ├── custom_powers.ron   (optional, empty otherwise)
/// └── items.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "rules.toml";
    pub const CUSTOM_POWERS_FILE: &'static str = "custom_powers.ron";
    pub const ITEMS_FILE: &'static str = "items.json";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load rules configuration from `rules.toml`, or the defaults when the
    /// file is absent.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no rules config, using defaults");
            return Ok(RulesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load custom power types from `custom_powers.ron`, or none when the
    /// file is absent.
    pub fn load_custom_powers(&self) -> LoadResult<Vec<CustomPowerType>> {
        let path = self.data_dir.join(Self::CUSTOM_POWERS_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no custom power catalog");
            return Ok(Vec::new());
        }
        CustomPowerLoader::load(&path)
    }

    /// Load `items.json` and build it against the directory's config and
    /// custom power catalog.
    pub fn load_items(&self) -> LoadResult<LoadedItems> {
        let config = self.load_config()?;
        let custom_types = self.load_custom_powers()?;
        let document = ItemLoader::load(&self.data_dir.join(Self::ITEMS_FILE))?;
        document.build(&custom_types, &config)
    }
}
