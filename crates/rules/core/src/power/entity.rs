//! The power entity and its builder.

use super::category::{Attack, CategoryData, CategoryDisplay, MovementMode};
use super::types::{PowerCategories, PowerType};
use crate::config::RulesConfig;
use crate::cost::{self, CostBreakdown, CostStructure};
use crate::dice::Damage;
use crate::error::{RulesError, RulesResult};
use crate::math::{NumberKind, format};
use crate::modifiers::{self, FrameworkModifier, ModifierDisplay, ModifierKind, PowerModifier};

/// A power as built from item data.
///
/// Powers are immutable: composing one with framework modifiers produces a
/// new power, and every cost is recomputed on access.
///
/// ```
/// # use hero_core::modifiers::PowerModifier;
/// # use hero_core::power::{Power, StandardPower};
/// let tk = Power::builder("Telekinesis", StandardPower::Telekinesis)
///     .attack(hero_core::power::Attack::new(hero_core::dice::Damage::zero(7.5)))
///     .cost_override(45.0)
///     .advantage(PowerModifier::advantage("Fine Manipulation", 0.5))
///     .build()
///     .unwrap();
/// assert_eq!(tk.active_cost(), 67);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Power {
    id: Option<String>,
    name: String,
    power_type: PowerType,
    category_data: Vec<CategoryData>,
    adders: Vec<PowerModifier>,
    advantages: Vec<PowerModifier>,
    limitations: Vec<PowerModifier>,
    cost_override: Option<f64>,
}

impl Power {
    pub fn builder(name: impl Into<String>, power_type: impl Into<PowerType>) -> PowerBuilder {
        PowerBuilder::new(name, power_type)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power_type(&self) -> &PowerType {
        &self.power_type
    }

    pub fn categories(&self) -> PowerCategories {
        self.power_type.categories()
    }

    pub fn category_data(&self) -> &[CategoryData] {
        &self.category_data
    }

    pub fn attack(&self) -> Option<&Attack> {
        self.category_data.iter().find_map(|data| match data {
            CategoryData::Attack(attack) => Some(attack),
            _ => None,
        })
    }

    pub fn movement(&self) -> Option<&MovementMode> {
        self.category_data.iter().find_map(|data| match data {
            CategoryData::Movement(movement) => Some(movement),
            _ => None,
        })
    }

    pub fn adders(&self) -> &[PowerModifier] {
        &self.adders
    }

    pub fn advantages(&self) -> &[PowerModifier] {
        &self.advantages
    }

    pub fn limitations(&self) -> &[PowerModifier] {
        &self.limitations
    }

    pub fn cost_override(&self) -> Option<f64> {
        self.cost_override
    }

    pub fn cost_structure(&self) -> CostStructure {
        self.power_type.cost_structure()
    }

    /// Base cost: the override when set, otherwise the cost structure's price.
    ///
    /// A cost structure that rejects the power is logged rather than raised;
    /// the power is then priced at 0.
    pub fn base_cost(&self) -> f64 {
        if let Some(cost) = self.cost_override {
            return cost;
        }
        match self.cost_structure().cost_of(self) {
            Ok(cost) => cost,
            Err(error) => {
                tracing::warn!(
                    power = %self.name,
                    %error,
                    "cost structure rejected power, pricing at zero"
                );
                0.0
            }
        }
    }

    pub fn adder_total(&self) -> f64 {
        modifiers::total(&self.adders)
    }

    pub fn advantage_total(&self) -> f64 {
        modifiers::total(&self.advantages)
    }

    /// Magnitude of all limitations.
    pub fn limitation_total(&self) -> f64 {
        modifiers::total(&self.limitations)
    }

    pub fn costs(&self) -> CostBreakdown {
        cost::cost_breakdown(
            self.base_cost(),
            self.adder_total(),
            self.advantage_total(),
            self.limitation_total(),
        )
    }

    pub fn active_cost(&self) -> i32 {
        cost::active_cost(self.base_cost(), self.adder_total(), self.advantage_total())
    }

    pub fn real_cost(&self) -> i32 {
        cost::real_cost(f64::from(self.active_cost()), self.limitation_total())
    }

    /// Attack damage raised by every adder that increases damage (5 CP per DC).
    pub fn effective_damage(&self) -> Option<Damage> {
        let damage = self.attack()?.damage;
        let extra_points: f64 = self
            .adders
            .iter()
            .filter(|adder| adder.increases_damage())
            .map(PowerModifier::value)
            .sum();
        if extra_points == 0.0 {
            return Some(damage);
        }
        match damage.add_damage_classes(extra_points / RulesConfig::POINTS_PER_DC) {
            Ok(raised) => Some(raised),
            Err(error) => {
                tracing::debug!(power = %self.name, %error, "damage adders not applied");
                Some(damage)
            }
        }
    }

    /// A new power carrying the slot-facing modifiers of a framework.
    ///
    /// Owned modifiers keep their alphabetical order; framework modifiers are
    /// appended after them. Framework-only modifiers never reach the power.
    /// Modifiers from an earlier application are replaced, not duplicated.
    #[must_use]
    pub fn with_framework_modifiers(&self, framework_modifiers: &[FrameworkModifier]) -> Power {
        let mut power = self.clone();
        for list in [
            &mut power.adders,
            &mut power.advantages,
            &mut power.limitations,
        ] {
            list.retain(|modifier| !modifier.is_from_framework());
        }

        for modifier in framework_modifiers
            .iter()
            .filter_map(FrameworkModifier::to_slot_modifier)
        {
            power.list_mut(modifier.kind()).push(modifier);
        }
        power
    }

    fn list_mut(&mut self, kind: ModifierKind) -> &mut Vec<PowerModifier> {
        match kind {
            ModifierKind::Adder => &mut self.adders,
            ModifierKind::Advantage => &mut self.advantages,
            ModifierKind::Limitation => &mut self.limitations,
        }
    }

    pub fn display(&self) -> PowerDisplay {
        let costs = self.costs();
        let effective = self.effective_damage();
        PowerDisplay {
            id: self.id.clone(),
            name: self.name.clone(),
            type_name: self.power_type.name(),
            is_standard: self.power_type.is_standard(),
            categories: self
                .category_data
                .iter()
                .map(|data| data.display(effective.as_ref()))
                .collect(),
            adders: self.adders.iter().map(PowerModifier::display).collect(),
            advantages: self.advantages.iter().map(PowerModifier::display).collect(),
            limitations: self.limitations.iter().map(PowerModifier::display).collect(),
            cost_override: self.cost_override,
            base_cost: costs.base,
            base_cost_string: format(NumberKind::CharacterPoints, costs.base),
            active_cost: costs.active,
            active_cost_string: format(NumberKind::CharacterPoints, f64::from(costs.active)),
            real_cost: costs.real,
            real_cost_string: format(NumberKind::CharacterPoints, f64::from(costs.real)),
        }
    }
}

/// Display payload for a power.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PowerDisplay {
    pub id: Option<String>,
    pub name: String,
    pub type_name: String,
    pub is_standard: bool,
    pub categories: Vec<CategoryDisplay>,
    pub adders: Vec<ModifierDisplay>,
    pub advantages: Vec<ModifierDisplay>,
    pub limitations: Vec<ModifierDisplay>,
    pub cost_override: Option<f64>,
    pub base_cost: f64,
    pub base_cost_string: String,
    pub active_cost: i32,
    pub active_cost_string: String,
    pub real_cost: i32,
    pub real_cost_string: String,
}

/// Validating builder for [`Power`].
#[derive(Clone, Debug)]
pub struct PowerBuilder {
    id: Option<String>,
    name: String,
    power_type: PowerType,
    attack: Option<Attack>,
    movement: Option<MovementMode>,
    adders: Vec<PowerModifier>,
    advantages: Vec<PowerModifier>,
    limitations: Vec<PowerModifier>,
    cost_override: Option<f64>,
}

impl PowerBuilder {
    pub fn new(name: impl Into<String>, power_type: impl Into<PowerType>) -> Self {
        Self {
            id: None,
            name: name.into(),
            power_type: power_type.into(),
            attack: None,
            movement: None,
            adders: Vec::new(),
            advantages: Vec::new(),
            limitations: Vec::new(),
            cost_override: None,
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn attack(mut self, attack: Attack) -> Self {
        self.attack = Some(attack);
        self
    }

    #[must_use]
    pub fn movement(mut self, movement: MovementMode) -> Self {
        self.movement = Some(movement);
        self
    }

    #[must_use]
    pub fn category(self, data: CategoryData) -> Self {
        match data {
            CategoryData::Attack(attack) => self.attack(attack),
            CategoryData::Movement(movement) => self.movement(movement),
        }
    }

    #[must_use]
    pub fn adder(mut self, adder: PowerModifier) -> Self {
        self.adders.push(adder);
        self
    }

    #[must_use]
    pub fn advantage(mut self, advantage: PowerModifier) -> Self {
        self.advantages.push(advantage);
        self
    }

    #[must_use]
    pub fn limitation(mut self, limitation: PowerModifier) -> Self {
        self.limitations.push(limitation);
        self
    }

    #[must_use]
    pub fn cost_override(mut self, cost: f64) -> Self {
        self.cost_override = Some(cost);
        self
    }

    /// Validate category data and modifier lists, then sort modifiers by name.
    pub fn build(self) -> RulesResult<Power> {
        let declared = self.power_type.categories();

        let mut category_data = Vec::new();
        if let Some(attack) = self.attack {
            category_data.push(CategoryData::Attack(attack));
        }
        if let Some(movement) = self.movement {
            category_data.push(CategoryData::Movement(movement));
        }

        let mut supplied = PowerCategories::empty();
        for data in &category_data {
            let category = data.category();
            if !declared.contains(category) {
                return Err(RulesError::UndeclaredCategoryData {
                    power: self.name,
                    category,
                });
            }
            supplied |= category;
        }
        if let Some(category) = (declared - supplied).iter().next() {
            return Err(RulesError::MissingCategoryData {
                power: self.name,
                category,
            });
        }

        match self.cost_override {
            Some(cost) if !cost.is_finite() || cost < 0.0 => {
                return Err(RulesError::NegativeValue {
                    field: "costOverride",
                    value: cost,
                });
            }
            _ => {}
        }

        let adders = sorted(self.adders, ModifierKind::Adder)?;
        let advantages = sorted(self.advantages, ModifierKind::Advantage)?;
        let limitations = sorted(self.limitations, ModifierKind::Limitation)?;

        Ok(Power {
            id: self.id,
            name: self.name,
            power_type: self.power_type,
            category_data,
            adders,
            advantages,
            limitations,
            cost_override: self.cost_override,
        })
    }
}

fn sorted(mut list: Vec<PowerModifier>, kind: ModifierKind) -> RulesResult<Vec<PowerModifier>> {
    for modifier in &list {
        modifier.expect_kind(kind)?;
    }
    list.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(list)
}
