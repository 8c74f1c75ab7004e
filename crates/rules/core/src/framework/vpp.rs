//! Variable Power Pool: a control cap per slot and a real-cost pool.

use super::slot::{Slot, SlotDisplay};
use super::warning::{Warning, WarningKind};
use super::{FrameworkDisplay, FrameworkKind, framework_cost, slot_display, validate_modifiers};
use crate::config::RulesConfig;
use crate::error::RulesResult;
use crate::math::round_favouring_lower;
use crate::modifiers::FrameworkModifier;

/// A Variable Power Pool and its slots.
#[derive(Clone, Debug, PartialEq)]
pub struct Vpp {
    control: u32,
    pool: u32,
    modifiers: Vec<FrameworkModifier>,
    slots: Vec<Slot>,
    config: RulesConfig,
    warnings: Vec<Warning>,
}

impl Vpp {
    pub fn new(
        control: u32,
        pool: u32,
        modifiers: Vec<FrameworkModifier>,
        slots: Vec<Slot>,
        config: &RulesConfig,
    ) -> RulesResult<Self> {
        validate_modifiers(&modifiers)?;
        let slots = slots
            .iter()
            .map(|slot| slot.with_framework_modifiers(&modifiers))
            .collect();

        let mut vpp = Self {
            control,
            pool,
            modifiers,
            slots,
            config: config.clone(),
            warnings: Vec::new(),
        };
        vpp.warnings = vpp.validate();
        for warning in &vpp.warnings {
            warning.log("vpp");
        }
        tracing::trace!(
            allocated = vpp.allocated_pool(),
            pool,
            control,
            warnings = vpp.warnings.len(),
            "vpp allocation"
        );
        Ok(vpp)
    }

    fn validate(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();
        let allocated = self.allocated_pool();
        if allocated > i64::from(self.pool) {
            warnings.push(Warning::framework(
                WarningKind::PoolExceeded,
                allocated,
                i64::from(self.pool),
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
            if slot.full_cost() > self.control {
                warnings.push(Warning::slot(
                    WarningKind::TooBigForControl,
                    slot.id(),
                    i64::from(slot.full_cost()),
                    i64::from(self.control),
                ));
            }
        }
        warnings
    }

    pub fn control(&self) -> u32 {
        self.control
    }

    pub fn pool(&self) -> u32 {
        self.pool
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

    /// Real cost scaled by the share of the full cost allocated.
    ///
    /// A slot with zero full cost allocates nothing.
    pub fn allocated_real_cost(slot: &Slot) -> i32 {
        let full = slot.full_cost();
        if full == 0 {
            return 0;
        }
        let real = f64::from(slot.power().real_cost());
        round_favouring_lower(real * f64::from(slot.allocated_cost()) / f64::from(full))
    }

    /// Real points drawn from the pool by every slot.
    pub fn allocated_pool(&self) -> i64 {
        self.slots
            .iter()
            .map(|slot| i64::from(Self::allocated_real_cost(slot)))
            .sum()
    }

    /// Control, scaled by the configured multiplier, priced with the
    /// framework-facing modifiers. The pool itself is never modified.
    pub fn control_cost(&self) -> i32 {
        let base = f64::from(self.control) * self.config.vpp_control_cost_multiplier;
        framework_cost(base, &self.modifiers)
    }

    /// Saturates at `i32::MAX` for absurd pools.
    pub fn total_cost(&self) -> i32 {
        self.control_cost()
            .saturating_add(i32::try_from(self.pool).unwrap_or(i32::MAX))
    }

    pub fn display(&self) -> FrameworkDisplay {
        let slots: Vec<SlotDisplay> = self
            .slots
            .iter()
            .map(|slot| slot_display(slot, Self::allocated_real_cost(slot), &self.warnings))
            .collect();
        FrameworkDisplay::new(
            FrameworkKind::Vpp,
            &self.modifiers,
            self.control_cost(),
            self.total_cost(),
            u64::try_from(self.allocated_pool()).unwrap_or(0),
            &self.warnings,
            slots,
        )
        .with_control(self.control, self.pool)
    }
}
