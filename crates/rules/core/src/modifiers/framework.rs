//! Modifiers declared on a framework.

use super::power::{ModifierDisplay, ModifierKind, PowerModifier};

/// What a framework modifier prices.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum FrameworkModifierScope {
    /// Only the reserve/pool cost.
    FrameworkOnly,
    /// The reserve/pool cost and every slot's power.
    #[default]
    FrameworkAndSlots,
    /// Only the slots' powers.
    SlotsOnly,
}

impl FrameworkModifierScope {
    pub const fn applies_to_framework(self) -> bool {
        matches!(self, Self::FrameworkOnly | Self::FrameworkAndSlots)
    }

    pub const fn applies_to_slots(self) -> bool {
        matches!(self, Self::FrameworkAndSlots | Self::SlotsOnly)
    }
}

/// A modifier plus the scope it applies to within a framework.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameworkModifier {
    modifier: PowerModifier,
    scope: FrameworkModifierScope,
}

impl FrameworkModifier {
    pub fn new(modifier: PowerModifier, scope: FrameworkModifierScope) -> Self {
        Self { modifier, scope }
    }

    pub fn modifier(&self) -> &PowerModifier {
        &self.modifier
    }

    pub fn scope(&self) -> FrameworkModifierScope {
        self.scope
    }

    pub fn kind(&self) -> ModifierKind {
        self.modifier.kind()
    }

    pub fn id(&self) -> Option<&str> {
        self.modifier.id()
    }

    pub fn name(&self) -> &str {
        self.modifier.name()
    }

    pub fn value(&self) -> f64 {
        self.modifier.value()
    }

    pub fn summary(&self) -> &str {
        self.modifier.summary()
    }

    pub fn description(&self) -> &str {
        self.modifier.description()
    }

    pub fn value_string(&self) -> String {
        self.modifier.value_string()
    }

    /// The modifier as it appears on a slot's power, or `None` for
    /// framework-only modifiers, which never reach slots.
    pub fn to_slot_modifier(&self) -> Option<PowerModifier> {
        self.scope
            .applies_to_slots()
            .then(|| self.modifier.clone().with_framework_scope(self.scope))
    }

    pub fn display(&self) -> ModifierDisplay {
        ModifierDisplay {
            note: Some(format!("{} modifier from framework", self.scope)),
            ..self.modifier.display()
        }
    }
}
