//! Item document loader.

use std::path::Path;

use hero_core::data::{FrameworkItemData, PowerData};
use hero_core::{CustomPowerType, Framework, Power, RulesConfig};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Raw item document: powers plus the frameworks that slot them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDocument {
    pub powers: Vec<PowerData>,
    pub frameworks: Vec<FrameworkItemData>,
}

/// Powers and frameworks built from an [`ItemDocument`].
#[derive(Debug, Clone)]
pub struct LoadedItems {
    pub powers: Vec<Power>,
    pub frameworks: Vec<Framework>,
}

impl ItemDocument {
    /// Build every power, then every framework over those powers.
    pub fn build(
        &self,
        custom_types: &[CustomPowerType],
        config: &RulesConfig,
    ) -> LoadResult<LoadedItems> {
        let powers = self
            .powers
            .iter()
            .map(|data| {
                data.to_power_with(custom_types)
                    .map_err(|e| anyhow::anyhow!("Invalid power '{}': {}", data.name, e))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let frameworks = self
            .frameworks
            .iter()
            .map(|item| {
                Framework::from_data(&item.framework, &powers, config)
                    .map_err(|e| anyhow::anyhow!("Invalid framework '{}': {}", item.name, e))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        tracing::debug!(
            powers = powers.len(),
            frameworks = frameworks.len(),
            "built item document"
        );
        Ok(LoadedItems { powers, frameworks })
    }
}

/// Loader for item documents from JSON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the raw item document from a JSON file.
    pub fn load(path: &Path) -> LoadResult<ItemDocument> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ItemDocument> {
        let document: ItemDocument = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item document JSON: {}", e))?;

        Ok(document)
    }
}
