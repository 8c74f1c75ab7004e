//! Characteristic identities and the static definition catalog.

use super::derived::{self, DerivedValue};
use crate::error::{RulesError, RulesResult};

/// The characteristics of a 6th-edition character sheet.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Characteristic {
    Str,
    Dex,
    Con,
    Int,
    Ego,
    Pre,
    Ocv,
    Dcv,
    Omcv,
    Dmcv,
    Spd,
    Pd,
    Ed,
    Rec,
    End,
    Body,
    Stun,
}

impl Characteristic {
    /// Parse an abbreviation such as `"str"` or `"OMCV"`.
    pub fn parse(abbreviation: &str) -> RulesResult<Self> {
        abbreviation
            .parse()
            .map_err(|_| RulesError::UnknownCharacteristic(abbreviation.to_string()))
    }

    /// Upper-case abbreviation, e.g. `"STR"`.
    pub fn abbreviation(&self) -> &'static str {
        characteristic_def(*self).abbreviation
    }

    /// Full name, e.g. `"Strength"`.
    pub fn full_name(&self) -> &'static str {
        characteristic_def(*self).name
    }

    pub fn def(&self) -> &'static CharacteristicDef {
        characteristic_def(*self)
    }
}

/// A named derived attribute: characteristic total → derived value.
#[derive(Clone, Copy, Debug)]
pub struct DerivedAttribute {
    pub name: &'static str,
    pub compute: fn(i32) -> DerivedValue,
}

/// Static definition of a characteristic.
#[derive(Clone, Copy, Debug)]
pub struct CharacteristicDef {
    pub characteristic: Characteristic,
    pub abbreviation: &'static str,
    pub name: &'static str,
    /// Characteristic roll, for characteristics that have one.
    pub target_number: Option<fn(i32) -> i32>,
    pub derived: &'static [DerivedAttribute],
}

impl CharacteristicDef {
    const fn plain(characteristic: Characteristic, abbreviation: &'static str, name: &'static str) -> Self {
        Self {
            characteristic,
            abbreviation,
            name,
            target_number: None,
            derived: &[],
        }
    }

    const fn rolled(
        characteristic: Characteristic,
        abbreviation: &'static str,
        name: &'static str,
        derived: &'static [DerivedAttribute],
    ) -> Self {
        Self {
            characteristic,
            abbreviation,
            name,
            target_number: Some(derived::roll_target),
            derived,
        }
    }

    /// Look up a derived attribute by name.
    pub fn derived_attribute(&self, name: &str) -> Option<&'static DerivedAttribute> {
        self.derived.iter().find(|attribute| attribute.name == name)
    }
}

const STR_DERIVED: &[DerivedAttribute] = &[
    DerivedAttribute {
        name: "lift",
        compute: |value| DerivedValue::Kilograms(derived::lift_kg(value)),
    },
    DerivedAttribute {
        name: "damage",
        compute: |value| DerivedValue::Dice(derived::effect_dice(value)),
    },
];

const CON_DERIVED: &[DerivedAttribute] = &[DerivedAttribute {
    name: "stunThreshold",
    compute: DerivedValue::Points,
}];

const INT_DERIVED: &[DerivedAttribute] = &[DerivedAttribute {
    name: "perception",
    compute: |value| DerivedValue::Roll(derived::roll_target(value)),
}];

const PRE_DERIVED: &[DerivedAttribute] = &[DerivedAttribute {
    name: "presenceAttack",
    compute: |value| DerivedValue::Dice(derived::effect_dice(value)),
}];

const SPD_DERIVED: &[DerivedAttribute] = &[DerivedAttribute {
    name: "phases",
    compute: |value| DerivedValue::Phases(super::speed::phases(value)),
}];

/// Catalog in [`Characteristic`] declaration order.
static CATALOG: [CharacteristicDef; 17] = [
    CharacteristicDef::rolled(Characteristic::Str, "STR", "Strength", STR_DERIVED),
    CharacteristicDef::rolled(Characteristic::Dex, "DEX", "Dexterity", &[]),
    CharacteristicDef::rolled(Characteristic::Con, "CON", "Constitution", CON_DERIVED),
    CharacteristicDef::rolled(Characteristic::Int, "INT", "Intelligence", INT_DERIVED),
    CharacteristicDef::rolled(Characteristic::Ego, "EGO", "Ego", &[]),
    CharacteristicDef::rolled(Characteristic::Pre, "PRE", "Presence", PRE_DERIVED),
    CharacteristicDef::plain(Characteristic::Ocv, "OCV", "Offensive Combat Value"),
    CharacteristicDef::plain(Characteristic::Dcv, "DCV", "Defensive Combat Value"),
    CharacteristicDef::plain(Characteristic::Omcv, "OMCV", "Offensive Mental Combat Value"),
    CharacteristicDef::plain(Characteristic::Dmcv, "DMCV", "Defensive Mental Combat Value"),
    CharacteristicDef {
        derived: SPD_DERIVED,
        ..CharacteristicDef::plain(Characteristic::Spd, "SPD", "Speed")
    },
    CharacteristicDef::plain(Characteristic::Pd, "PD", "Physical Defense"),
    CharacteristicDef::plain(Characteristic::Ed, "ED", "Energy Defense"),
    CharacteristicDef::plain(Characteristic::Rec, "REC", "Recovery"),
    CharacteristicDef::plain(Characteristic::End, "END", "Endurance"),
    CharacteristicDef::plain(Characteristic::Body, "BODY", "Body"),
    CharacteristicDef::plain(Characteristic::Stun, "STUN", "Stun"),
];

/// Definition of `characteristic` from the static catalog.
pub fn characteristic_def(characteristic: Characteristic) -> &'static CharacteristicDef {
    &CATALOG[characteristic as usize]
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn catalog_is_in_declaration_order() {
        for characteristic in Characteristic::iter() {
            let def = characteristic_def(characteristic);
            assert_eq!(def.characteristic, characteristic);
            assert_eq!(def.abbreviation, characteristic.to_string());
        }
    }

    #[test]
    fn parses_abbreviations_case_insensitively() {
        assert_eq!(Characteristic::parse("str"), Ok(Characteristic::Str));
        assert_eq!(Characteristic::parse("OMCV"), Ok(Characteristic::Omcv));
        assert_eq!(
            Characteristic::parse("luck"),
            Err(RulesError::UnknownCharacteristic("luck".into()))
        );
        assert_eq!(Characteristic::Dex.full_name(), "Dexterity");
    }

    #[test]
    fn only_primaries_have_rolls() {
        assert!(Characteristic::Str.def().target_number.is_some());
        assert!(Characteristic::Pre.def().target_number.is_some());
        assert!(Characteristic::Ocv.def().target_number.is_none());
        assert!(Characteristic::Stun.def().target_number.is_none());
    }
}
