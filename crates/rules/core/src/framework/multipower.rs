//! Multipower: a point reserve shared by fixed and variable slots.

use super::slot::{Slot, SlotDisplay};
use super::warning::{Warning, WarningKind};
use super::{FrameworkDisplay, FrameworkKind, framework_cost, slot_display, validate_modifiers};
use crate::config::RulesConfig;
use crate::math::round_favouring_lower;
use crate::error::RulesResult;
use crate::modifiers::FrameworkModifier;

/// A Multipower and its slots.
///
/// Slots hold their powers already composed with the framework's
/// slot-facing modifiers. Warnings are computed once at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Multipower {
    reserve: u32,
    modifiers: Vec<FrameworkModifier>,
    slots: Vec<Slot>,
    config: RulesConfig,
    warnings: Vec<Warning>,
}

impl Multipower {
    pub fn new(
        reserve: u32,
        modifiers: Vec<FrameworkModifier>,
        slots: Vec<Slot>,
        config: &RulesConfig,
    ) -> RulesResult<Self> {
        validate_modifiers(&modifiers)?;
        let slots = slots
            .iter()
            .map(|slot| slot.with_framework_modifiers(&modifiers))
            .collect();

        let mut multipower = Self {
            reserve,
            modifiers,
            slots,
            config: config.clone(),
            warnings: Vec::new(),
        };
        multipower.warnings = multipower.validate();
        for warning in &multipower.warnings {
            warning.log("multipower");
        }
        tracing::trace!(
            allocated = multipower.allocated_reserve(),
            reserve,
            warnings = multipower.warnings.len(),
            "multipower allocation"
        );
        Ok(multipower)
    }

    fn validate(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();
        let allocated = self.allocated_reserve();
        if allocated > u64::from(self.reserve) {
            warnings.push(Warning::framework(
                WarningKind::ReserveExceeded,
                allocated as i64,
                i64::from(self.reserve),
            ));
        }
        for slot in &self.slots {
            if slot.is_over_allocated() {
                warnings.push(Warning::slot(
                    WarningKind::SlotOverAllocated,
                    slot.id(),
                    i64::from(slot.allocated_cost()),
                    i64::from(slot.full_cost()),
                ));
            }
            if slot.full_cost() > self.reserve {
                warnings.push(Warning::slot(
                    WarningKind::TooBigForReserve,
                    slot.id(),
                    i64::from(slot.full_cost()),
                    i64::from(self.reserve),
                ));
            }
        }
        warnings
    }

    pub fn reserve(&self) -> u32 {
        self.reserve
    }

    pub fn modifiers(&self) -> &[FrameworkModifier] {
        &self.modifiers
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id() == id)
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn allocated_reserve(&self) -> u64 {
        self.slots
            .iter()
            .map(|slot| u64::from(slot.allocated_cost()))
            .sum()
    }

    /// Reserve priced with the framework-facing modifiers.
    pub fn reserve_cost(&self) -> i32 {
        framework_cost(f64::from(self.reserve), &self.modifiers)
    }

    /// The slot power's real cost over the slot kind's divisor, rounded
    /// favouring lower.
    pub fn slot_cost(&self, slot: &Slot) -> i32 {
        self.discounted(slot, slot.power().real_cost())
    }

    /// The slot power's active cost over the slot kind's divisor.
    pub fn slot_active_cost(&self, slot: &Slot) -> i32 {
        self.discounted(slot, slot.power().active_cost())
    }

    fn discounted(&self, slot: &Slot, points: i32) -> i32 {
        let divisor = slot.kind().divisor(&self.config);
        round_favouring_lower(f64::from(points) / f64::from(divisor))
    }

    /// Saturates at `i32::MAX` for absurd reserves.
    pub fn total_cost(&self) -> i32 {
        self.slots
            .iter()
            .map(|slot| self.slot_cost(slot))
            .fold(self.reserve_cost(), i32::saturating_add)
    }

    pub fn display(&self) -> FrameworkDisplay {
        let slots: Vec<SlotDisplay> = self
            .slots
            .iter()
            .map(|slot| slot_display(slot, self.slot_cost(slot), &self.warnings))
            .collect();
        FrameworkDisplay::new(
            FrameworkKind::Multipower,
            &self.modifiers,
            self.reserve_cost(),
            self.total_cost(),
            self.allocated_reserve(),
            &self.warnings,
            slots,
        )
        .with_reserve(self.reserve)
    }
}
