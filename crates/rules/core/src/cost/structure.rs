//! Policies that turn a power into its base cost.

use crate::config::RulesConfig;
use crate::error::{RulesError, RulesResult};
use crate::power::{Power, PowerCategories};

/// How a power type prices its base.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "cost", rename_all = "camelCase"))]
pub enum CostStructure {
    /// A flat cost; the power's data is ignored.
    Fixed(f64),
    /// Cost per d6 of the power's attack damage.
    PerDie(f64),
    /// Cost per meter of the power's movement.
    PerMeter(f64),
}

impl CostStructure {
    /// Category the power must belong to for this structure to price it.
    pub fn required_category(&self) -> PowerCategories {
        match self {
            Self::Fixed(_) => PowerCategories::empty(),
            Self::PerDie(_) => PowerCategories::ATTACK,
            Self::PerMeter(_) => PowerCategories::MOVEMENT,
        }
    }

    /// Check that `power` belongs to the category this structure prices.
    pub fn validate(&self, power: &Power) -> RulesResult<()> {
        let required = self.required_category();
        let found = power.categories();
        if found.contains(required) {
            Ok(())
        } else {
            Err(RulesError::CategoryMismatch {
                power: power.name().to_string(),
                expected: required,
                found,
            })
        }
    }

    /// Base cost of `power`.
    ///
    /// Per-die costs use damage classes when the dice's cost per die has a DC
    /// table (5 points per DC), and `cost × ceil(dice)` otherwise.
    pub fn cost_of(&self, power: &Power) -> RulesResult<f64> {
        self.validate(power)?;
        match *self {
            Self::Fixed(cost) => Ok(cost),
            Self::PerDie(cost_per_die) => {
                let attack = power.attack().ok_or_else(|| RulesError::MissingCategoryData {
                    power: power.name().to_string(),
                    category: PowerCategories::ATTACK,
                })?;
                let damage = &attack.damage;
                Ok(match damage.dc() {
                    Some(dc) => dc * RulesConfig::POINTS_PER_DC,
                    None => cost_per_die * damage.dice().ceil(),
                })
            }
            Self::PerMeter(cost_per_meter) => {
                let movement = power.movement().ok_or_else(|| RulesError::MissingCategoryData {
                    power: power.name().to_string(),
                    category: PowerCategories::MOVEMENT,
                })?;
                Ok((movement.base_distance() * cost_per_meter).ceil())
            }
        }
    }
}
