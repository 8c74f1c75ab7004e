//! A single adder, advantage or limitation.

use super::framework::FrameworkModifierScope;
use crate::error::{RulesError, RulesResult};
use crate::math::{NumberKind, TaggedNumber};

/// Which list a modifier belongs in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModifierKind {
    /// Flat points added to base cost.
    Adder,
    /// Multiplies active cost.
    Advantage,
    /// Divides real cost.
    Limitation,
}

impl ModifierKind {
    pub const fn number_kind(self) -> NumberKind {
        match self {
            Self::Adder => NumberKind::Adder,
            Self::Advantage => NumberKind::Advantage,
            Self::Limitation => NumberKind::Limitation,
        }
    }
}

/// A cost modifier on a power.
///
/// Values are sign-normalised at construction: adders and advantages are
/// non-negative, limitations non-positive. Adders must be whole points.
///
/// ```
/// # use hero_core::modifiers::PowerModifier;
/// let limitation = PowerModifier::limitation("Focus", 0.5);
/// assert_eq!(limitation.value(), -0.5);
/// assert_eq!(limitation.value_string(), "-½");
///
/// assert!(PowerModifier::adder("Extra Senses", 1.5).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerModifier {
    kind: ModifierKind,
    id: Option<String>,
    name: String,
    value: f64,
    summary: String,
    description: String,
    increases_damage: bool,
    framework_scope: Option<FrameworkModifierScope>,
}

impl PowerModifier {
    /// Build a modifier of `kind`, normalising the sign of `value`.
    pub fn new(kind: ModifierKind, name: impl Into<String>, value: f64) -> RulesResult<Self> {
        if kind == ModifierKind::Adder && value.fract() != 0.0 {
            return Err(RulesError::FractionalAdder(value));
        }
        Ok(Self::normalised(kind, name, value))
    }

    pub fn adder(name: impl Into<String>, value: f64) -> RulesResult<Self> {
        Self::new(ModifierKind::Adder, name, value)
    }

    pub fn advantage(name: impl Into<String>, value: f64) -> Self {
        Self::normalised(ModifierKind::Advantage, name, value)
    }

    pub fn limitation(name: impl Into<String>, value: f64) -> Self {
        Self::normalised(ModifierKind::Limitation, name, value)
    }

    fn normalised(kind: ModifierKind, name: impl Into<String>, value: f64) -> Self {
        let magnitude = value.abs();
        Self {
            kind,
            id: None,
            name: name.into(),
            value: match kind {
                ModifierKind::Limitation => -magnitude,
                ModifierKind::Adder | ModifierKind::Advantage => magnitude,
            },
            summary: String::new(),
            description: String::new(),
            increases_damage: false,
            framework_scope: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark an adder as raising the power's damage by its points.
    #[must_use]
    pub fn with_increases_damage(mut self, increases_damage: bool) -> Self {
        self.increases_damage = increases_damage;
        self
    }

    #[must_use]
    pub(crate) fn with_framework_scope(mut self, scope: FrameworkModifierScope) -> Self {
        self.framework_scope = Some(scope);
        self
    }

    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn increases_damage(&self) -> bool {
        self.increases_damage
    }

    /// Scope of the framework modifier this was derived from, if any.
    pub fn framework_scope(&self) -> Option<FrameworkModifierScope> {
        self.framework_scope
    }

    pub fn is_from_framework(&self) -> bool {
        self.framework_scope.is_some()
    }

    pub fn tagged(&self) -> TaggedNumber {
        TaggedNumber::new(self.kind.number_kind(), self.value)
    }

    /// `"+5 CP"`, `"+1½"`, `"-2¾"`.
    pub fn value_string(&self) -> String {
        self.tagged().to_string()
    }

    /// Reject a modifier that sits in the wrong list.
    pub fn expect_kind(&self, expected: ModifierKind) -> RulesResult<()> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(RulesError::WrongModifierKind {
                name: self.name.clone(),
                expected,
                found: self.kind,
            })
        }
    }

    pub fn display(&self) -> ModifierDisplay {
        ModifierDisplay {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            value: self.value,
            value_string: self.value_string(),
            summary: self.summary.clone(),
            description: self.description.clone(),
            note: self
                .framework_scope
                .map(|scope| format!("{scope} modifier from framework")),
        }
    }
}

/// Display payload for one modifier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ModifierDisplay {
    pub id: Option<String>,
    pub name: String,
    pub kind: ModifierKind,
    pub value: f64,
    pub value_string: String,
    pub summary: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adders_are_whole_and_non_negative() {
        assert_eq!(PowerModifier::adder("Extra", -1.0).unwrap().value(), 1.0);
        assert_eq!(
            PowerModifier::adder("Extra", 1.5),
            Err(RulesError::FractionalAdder(1.5))
        );
        assert_eq!(
            PowerModifier::adder("Extra", 5.0).unwrap().value_string(),
            "+5 CP"
        );
    }

    #[test]
    fn advantage_and_limitation_signs() {
        assert_eq!(PowerModifier::advantage("Area", -0.5).value(), 0.5);
        assert_eq!(PowerModifier::limitation("Focus", 0.5).value(), -0.5);
        assert_eq!(PowerModifier::limitation("Focus", -0.25).value(), -0.25);
    }

    #[test]
    fn named_constructors_match_the_generic_one() {
        assert_eq!(
            PowerModifier::new(ModifierKind::Advantage, "Area", -0.5),
            Ok(PowerModifier::advantage("Area", 0.5))
        );
        assert_eq!(
            PowerModifier::new(ModifierKind::Limitation, "Focus", 0.5),
            Ok(PowerModifier::limitation("Focus", -0.5))
        );
        assert_eq!(
            PowerModifier::new(ModifierKind::Adder, "Extra", -5.0).map(|m| m.value()),
            Ok(5.0)
        );
    }

    #[test]
    fn display_strings() {
        assert_eq!(PowerModifier::advantage("A", 0.0).value_string(), "+0");
        assert_eq!(PowerModifier::limitation("L", 0.0).value_string(), "-0");
        assert_eq!(PowerModifier::advantage("A", 1.5).value_string(), "+1½");
        assert_eq!(PowerModifier::limitation("L", -2.75).value_string(), "-2¾");
    }

    #[test]
    fn kind_checks() {
        let advantage = PowerModifier::advantage("Armor Piercing", 0.25);
        assert!(advantage.expect_kind(ModifierKind::Advantage).is_ok());
        assert_eq!(
            advantage.expect_kind(ModifierKind::Limitation),
            Err(RulesError::WrongModifierKind {
                name: "Armor Piercing".into(),
                expected: ModifierKind::Limitation,
                found: ModifierKind::Advantage,
            })
        );
    }

    #[test]
    fn display_carries_metadata() {
        let display = PowerModifier::limitation("Charges", 0.25)
            .with_id("lim-1")
            .with_summary("12 Charges")
            .display();
        assert_eq!(display.id.as_deref(), Some("lim-1"));
        assert_eq!(display.value_string, "-¼");
        assert_eq!(display.summary, "12 Charges");
        assert_eq!(display.note, None);
    }
}
