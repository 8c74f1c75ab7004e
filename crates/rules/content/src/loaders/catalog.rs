//! Custom power type catalog loader.

use std::path::Path;

use hero_core::{CostStructure, CustomPowerType, PowerCategories};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// How a custom power prices its base, as written in RON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CostSpec {
    Fixed(f64),
    PerDie(f64),
    PerMeter(f64),
}

impl From<CostSpec> for CostStructure {
    fn from(spec: CostSpec) -> Self {
        match spec {
            CostSpec::Fixed(cost) => CostStructure::Fixed(cost),
            CostSpec::PerDie(cost) => CostStructure::PerDie(cost),
            CostSpec::PerMeter(cost) => CostStructure::PerMeter(cost),
        }
    }
}

/// One entry of a custom power catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPowerSpec {
    pub name: String,
    #[serde(default)]
    pub attack: bool,
    #[serde(default)]
    pub movement: bool,
    pub cost: CostSpec,
}

impl CustomPowerSpec {
    pub fn to_power_type(&self) -> CustomPowerType {
        let mut categories = PowerCategories::empty();
        categories.set(PowerCategories::ATTACK, self.attack);
        categories.set(PowerCategories::MOVEMENT, self.movement);
        CustomPowerType::new(self.name.as_str(), categories).with_cost(self.cost.into())
    }
}

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPowerCatalog {
    pub powers: Vec<CustomPowerSpec>,
}

/// Loader for custom power catalogs from RON files.
pub struct CustomPowerLoader;

impl CustomPowerLoader {
    /// Load custom power types from a RON file.
    ///
    /// ```text
    /// (
    ///     powers: [
    ///         (name: "Mana Bolt", attack: true, cost: PerDie(10.0)),
    ///         (name: "Warp Step", movement: true, cost: Fixed(25.0)),
    ///     ],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<Vec<CustomPowerType>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CustomPowerType>> {
        let catalog: CustomPowerCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse custom power catalog RON: {}", e))?;

        for (index, spec) in catalog.powers.iter().enumerate() {
            let duplicate = catalog.powers[..index]
                .iter()
                .any(|earlier| earlier.name.eq_ignore_ascii_case(&spec.name));
            if duplicate {
                anyhow::bail!("Duplicate custom power type '{}'", spec.name);
            }
        }

        Ok(catalog
            .powers
            .iter()
            .map(CustomPowerSpec::to_power_type)
            .collect())
    }
}
