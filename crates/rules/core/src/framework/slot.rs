//! Slots: a framework's binding to one member power.

use crate::config::RulesConfig;
use crate::modifiers::FrameworkModifier;
use crate::power::{Power, PowerDisplay};

/// Allocation semantics of a slot.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SlotKind {
    /// All or nothing: allocates its full cost while on.
    #[default]
    Fixed,
    /// Any amount up to its full cost.
    Variable,
}

impl SlotKind {
    /// Multipower cost divisor for this kind. Never zero.
    pub fn divisor(self, config: &RulesConfig) -> u32 {
        let divisor = match self {
            Self::Fixed => config.fixed_slot_divisor,
            Self::Variable => config.variable_slot_divisor,
        };
        divisor.max(1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Allocation {
    Fixed { on: bool },
    Variable { allocated: u32 },
}

/// One power inside a framework plus its allocation state.
///
/// The full cost defaults to the power's active cost. A fixed slot
/// allocates its full cost while on; a variable slot allocates whatever was
/// set, even past its full cost (the framework warns about that).
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    id: String,
    power: Power,
    allocation: Allocation,
    full_cost: Option<u32>,
}

impl Slot {
    pub fn fixed(id: impl Into<String>, power: Power, on: bool) -> Self {
        Self {
            id: id.into(),
            power,
            allocation: Allocation::Fixed { on },
            full_cost: None,
        }
    }

    pub fn variable(id: impl Into<String>, power: Power, allocated: u32) -> Self {
        Self {
            id: id.into(),
            power,
            allocation: Allocation::Variable { allocated },
            full_cost: None,
        }
    }

    /// Replace the default full cost.
    #[must_use]
    pub fn with_full_cost(mut self, full_cost: u32) -> Self {
        self.full_cost = Some(full_cost);
        self
    }

    /// The same slot holding its power composed with `modifiers`.
    pub(crate) fn with_framework_modifiers(&self, modifiers: &[FrameworkModifier]) -> Self {
        Self {
            power: self.power.with_framework_modifiers(modifiers),
            ..self.clone()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn power(&self) -> &Power {
        &self.power
    }

    pub fn kind(&self) -> SlotKind {
        match self.allocation {
            Allocation::Fixed { .. } => SlotKind::Fixed,
            Allocation::Variable { .. } => SlotKind::Variable,
        }
    }

    pub fn full_cost(&self) -> u32 {
        self.full_cost
            .unwrap_or_else(|| u32::try_from(self.power.active_cost()).unwrap_or(0))
    }

    pub fn allocated_cost(&self) -> u32 {
        match self.allocation {
            Allocation::Fixed { on: true } => self.full_cost(),
            Allocation::Fixed { on: false } => 0,
            Allocation::Variable { allocated } => allocated,
        }
    }

    pub fn is_active(&self) -> bool {
        match self.allocation {
            Allocation::Fixed { on } => on,
            Allocation::Variable { allocated } => allocated > 0,
        }
    }

    pub fn is_over_allocated(&self) -> bool {
        self.allocated_cost() > self.full_cost()
    }
}

/// Display payload for one slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SlotDisplay {
    pub id: String,
    pub kind: SlotKind,
    pub is_active: bool,
    pub full_cost: u32,
    pub full_cost_string: String,
    pub allocated_cost: u32,
    pub allocated_cost_string: String,
    pub cost: i32,
    pub cost_string: String,
    pub power: PowerDisplay,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::StandardPower;

    fn clinging(cost: f64) -> Power {
        Power::builder("Wall Crawl", StandardPower::Clinging)
            .cost_override(cost)
            .build()
            .unwrap()
    }

    #[test]
    fn fixed_slots_follow_their_switch() {
        let on = Slot::fixed("a", clinging(30.0), true);
        assert_eq!(on.full_cost(), 30);
        assert_eq!(on.allocated_cost(), 30);
        assert!(on.is_active());

        let off = Slot::fixed("b", clinging(30.0), false);
        assert_eq!(off.allocated_cost(), 0);
        assert!(!off.is_active());
    }

    #[test]
    fn variable_slots_keep_their_allocation() {
        let slot = Slot::variable("a", clinging(30.0), 45);
        assert_eq!(slot.kind(), SlotKind::Variable);
        assert_eq!(slot.allocated_cost(), 45);
        assert!(slot.is_over_allocated());

        let idle = Slot::variable("b", clinging(30.0), 0).with_full_cost(20);
        assert_eq!(idle.full_cost(), 20);
        assert!(!idle.is_active());
    }

    #[test]
    fn divisors_come_from_config() {
        let config = RulesConfig::with_slot_divisors(10, 0);
        assert_eq!(SlotKind::Fixed.divisor(&config), 10);
        assert_eq!(SlotKind::Variable.divisor(&config), 1);
    }
}
