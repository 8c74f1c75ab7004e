//! A characteristic as it appears on a character: value plus modifier.

use super::catalog::Characteristic;
use super::derived::DerivedValue;

/// Characteristic value with an additive modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacteristicValue {
    pub characteristic: Characteristic,
    pub value: i32,
    pub modifier: i32,
}

impl CharacteristicValue {
    pub fn new(characteristic: Characteristic, value: i32) -> Self {
        Self {
            characteristic,
            value,
            modifier: 0,
        }
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn total(&self) -> i32 {
        self.value + self.modifier
    }

    /// 3d6 roll target, if this characteristic has a roll.
    pub fn target_number(&self) -> Option<i32> {
        self.characteristic
            .def()
            .target_number
            .map(|roll| roll(self.total()))
    }

    /// Named derived attribute computed from the total.
    pub fn derived(&self, name: &str) -> Option<DerivedValue> {
        self.characteristic
            .def()
            .derived_attribute(name)
            .map(|attribute| (attribute.compute)(self.total()))
    }

    /// Every derived attribute, in catalog order.
    pub fn all_derived(&self) -> Vec<(&'static str, DerivedValue)> {
        self.characteristic
            .def()
            .derived
            .iter()
            .map(|attribute| (attribute.name, (attribute.compute)(self.total())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_derived_attributes() {
        let strength = CharacteristicValue::new(Characteristic::Str, 15).with_modifier(5);
        assert_eq!(strength.total(), 20);
        assert_eq!(strength.target_number(), Some(13));
        assert_eq!(strength.derived("lift"), Some(DerivedValue::Kilograms(400.0)));
        match strength.derived("damage") {
            Some(DerivedValue::Dice(dice)) => assert_eq!(dice.dice_string(), "4d6"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(strength.all_derived().len(), 2);
    }

    #[test]
    fn speed_phases_and_missing_attributes() {
        let speed = CharacteristicValue::new(Characteristic::Spd, 3);
        match speed.derived("phases") {
            Some(DerivedValue::Phases(phases)) => assert_eq!(phases.as_slice(), &[4, 8, 12]),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(speed.target_number(), None);
        assert_eq!(speed.derived("lift"), None);
    }

    #[test]
    fn constitution_is_its_own_stun_threshold() {
        let con = CharacteristicValue::new(Characteristic::Con, 23);
        assert_eq!(con.derived("stunThreshold"), Some(DerivedValue::Points(23)));
        assert_eq!(con.target_number(), Some(14));
    }
}
