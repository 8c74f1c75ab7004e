//! Power frameworks: shared budgets split across slots.
//!
//! Two frameworks are modelled:
//!
//! - [`Multipower`]: a reserve of active points. Fixed slots allocate their
//!   full cost while on; variable slots allocate any amount.
//! - [`Vpp`]: a control capping each slot's full cost and a pool capping the
//!   real points all slots draw.
//!
//! Over-budget allocations are legal. They are reported as [`Warning`]s and
//! left for the user to fix.
//!
//! Framework modifiers carry a scope. Framework-facing ones
//! (`FrameworkOnly`, `FrameworkAndSlots`) price the reserve or control;
//! slot-facing ones (`FrameworkAndSlots`, `SlotsOnly`) are pushed onto every
//! slot's power.

pub mod multipower;
pub mod slot;
pub mod vpp;
pub mod warning;

pub use multipower::Multipower;
pub use slot::{Slot, SlotDisplay, SlotKind};
pub use vpp::Vpp;
pub use warning::{Warning, WarningKind, WarningScope};

use crate::cost;
use crate::error::{RulesError, RulesResult};
use crate::math::{NumberKind, format};
use crate::modifiers::{self, FrameworkModifier, ModifierDisplay, ModifierKind};

/// Which framework a display payload describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum FrameworkKind {
    Multipower,
    Vpp,
}

/// Either framework, for collaborators that hold one without caring which.
#[derive(Clone, Debug, PartialEq)]
pub enum Framework {
    Multipower(Multipower),
    Vpp(Vpp),
}

impl Framework {
    pub fn kind(&self) -> FrameworkKind {
        match self {
            Self::Multipower(_) => FrameworkKind::Multipower,
            Self::Vpp(_) => FrameworkKind::Vpp,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        match self {
            Self::Multipower(multipower) => multipower.slots(),
            Self::Vpp(vpp) => vpp.slots(),
        }
    }

    pub fn modifiers(&self) -> &[FrameworkModifier] {
        match self {
            Self::Multipower(multipower) => multipower.modifiers(),
            Self::Vpp(vpp) => vpp.modifiers(),
        }
    }

    pub fn warnings(&self) -> &[Warning] {
        match self {
            Self::Multipower(multipower) => multipower.warnings(),
            Self::Vpp(vpp) => vpp.warnings(),
        }
    }

    /// Cost of a slot within this framework.
    pub fn slot_cost(&self, slot: &Slot) -> i32 {
        match self {
            Self::Multipower(multipower) => multipower.slot_cost(slot),
            Self::Vpp(_) => Vpp::allocated_real_cost(slot),
        }
    }

    pub fn total_cost(&self) -> i32 {
        match self {
            Self::Multipower(multipower) => multipower.total_cost(),
            Self::Vpp(vpp) => vpp.total_cost(),
        }
    }

    pub fn display(&self) -> FrameworkDisplay {
        match self {
            Self::Multipower(multipower) => multipower.display(),
            Self::Vpp(vpp) => vpp.display(),
        }
    }
}

impl From<Multipower> for Framework {
    fn from(multipower: Multipower) -> Self {
        Self::Multipower(multipower)
    }
}

impl From<Vpp> for Framework {
    fn from(vpp: Vpp) -> Self {
        Self::Vpp(vpp)
    }
}

/// Display payload for a framework.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FrameworkDisplay {
    pub kind: FrameworkKind,
    pub reserve: Option<u32>,
    pub reserve_string: Option<String>,
    pub control: Option<u32>,
    pub control_string: Option<String>,
    pub pool: Option<u32>,
    pub pool_string: Option<String>,
    pub allocated: u64,
    pub allocated_string: String,
    pub modifiers: Vec<ModifierDisplay>,
    /// Reserve cost for a Multipower, control cost for a VPP.
    pub framework_cost: i32,
    pub framework_cost_string: String,
    pub total_cost: i32,
    pub total_cost_string: String,
    /// Framework-scoped warning messages; slot warnings sit on their slots.
    pub warnings: Vec<String>,
    pub slots: Vec<SlotDisplay>,
}

impl FrameworkDisplay {
    fn new(
        kind: FrameworkKind,
        modifiers: &[FrameworkModifier],
        framework_cost: i32,
        total_cost: i32,
        allocated: u64,
        warnings: &[Warning],
        slots: Vec<SlotDisplay>,
    ) -> Self {
        Self {
            kind,
            reserve: None,
            reserve_string: None,
            control: None,
            control_string: None,
            pool: None,
            pool_string: None,
            allocated,
            allocated_string: format(NumberKind::CharacterPoints, allocated as f64),
            modifiers: modifiers.iter().map(FrameworkModifier::display).collect(),
            framework_cost,
            framework_cost_string: format(NumberKind::CharacterPoints, f64::from(framework_cost)),
            total_cost,
            total_cost_string: format(NumberKind::CharacterPoints, f64::from(total_cost)),
            warnings: warnings
                .iter()
                .filter(|warning| warning.is_framework())
                .map(|warning| warning.message.clone())
                .collect(),
            slots,
        }
    }

    fn with_reserve(mut self, reserve: u32) -> Self {
        self.reserve = Some(reserve);
        self.reserve_string = Some(points(reserve));
        self
    }

    fn with_control(mut self, control: u32, pool: u32) -> Self {
        self.control = Some(control);
        self.control_string = Some(points(control));
        self.pool = Some(pool);
        self.pool_string = Some(points(pool));
        self
    }
}

fn slot_display(slot: &Slot, cost: i32, warnings: &[Warning]) -> SlotDisplay {
    SlotDisplay {
        id: slot.id().to_string(),
        kind: slot.kind(),
        is_active: slot.is_active(),
        full_cost: slot.full_cost(),
        full_cost_string: points(slot.full_cost()),
        allocated_cost: slot.allocated_cost(),
        allocated_cost_string: points(slot.allocated_cost()),
        cost,
        cost_string: format(NumberKind::CharacterPoints, f64::from(cost)),
        power: slot.power().display(),
        warnings: warnings
            .iter()
            .filter(|warning| warning.is_for_slot(slot.id()))
            .map(|warning| warning.message.clone())
            .collect(),
    }
}

fn points(value: u32) -> String {
    format(NumberKind::CharacterPoints, f64::from(value))
}

/// Adders that would price the framework itself are not modelled.
fn validate_modifiers(modifiers: &[FrameworkModifier]) -> RulesResult<()> {
    let framework_adder = modifiers
        .iter()
        .any(|m| m.kind() == ModifierKind::Adder && m.scope().applies_to_framework());
    if framework_adder {
        return Err(RulesError::NotImplemented(
            "adders on a framework's own cost",
        ));
    }
    Ok(())
}

/// `base` priced with the framework-facing advantages and limitations.
fn framework_cost(base: f64, framework_modifiers: &[FrameworkModifier]) -> i32 {
    let facing = |kind: ModifierKind| {
        modifiers::total(
            framework_modifiers
                .iter()
                .filter(move |m| m.kind() == kind && m.scope().applies_to_framework())
                .map(FrameworkModifier::modifier),
        )
    };
    let active = cost::active_cost(base, 0.0, facing(ModifierKind::Advantage));
    cost::real_cost(f64::from(active), facing(ModifierKind::Limitation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::modifiers::{FrameworkModifierScope, PowerModifier};
    use crate::power::{Power, StandardPower};

    #[test]
    fn framework_cost_uses_framework_facing_modifiers() {
        let modifiers = [
            FrameworkModifier::new(
                PowerModifier::advantage("Area", 0.5),
                FrameworkModifierScope::FrameworkAndSlots,
            ),
            FrameworkModifier::new(
                PowerModifier::advantage("Penetrating", 1.0),
                FrameworkModifierScope::SlotsOnly,
            ),
            FrameworkModifier::new(
                PowerModifier::limitation("Gestures", 0.25),
                FrameworkModifierScope::FrameworkOnly,
            ),
        ];
        // 40 × 1.5 = 60, 60 / 1.25 = 48
        assert_eq!(framework_cost(40.0, &modifiers), 48);
    }

    #[test]
    fn slots_only_adders_are_allowed() {
        let modifiers = [FrameworkModifier::new(
            PowerModifier::adder("Extra", 5.0).unwrap(),
            FrameworkModifierScope::SlotsOnly,
        )];
        assert!(validate_modifiers(&modifiers).is_ok());
    }

    #[test]
    fn framework_enum_dispatches() {
        let power = Power::builder("Cling", StandardPower::Clinging)
            .cost_override(20.0)
            .build()
            .unwrap();
        let config = RulesConfig::default();
        let framework: Framework = Vpp::new(
            30,
            20,
            Vec::new(),
            vec![Slot::variable("a", power, 20)],
            &config,
        )
        .unwrap()
        .into();

        assert_eq!(framework.kind(), FrameworkKind::Vpp);
        assert_eq!(framework.total_cost(), 80);
        assert_eq!(framework.slot_cost(&framework.slots()[0]), 20);
        assert!(framework.warnings().is_empty());
        assert_eq!(framework.display().kind.to_string(), "vpp");
    }
}
