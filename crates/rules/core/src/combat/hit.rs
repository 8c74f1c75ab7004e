//! Attack roll targets.

use crate::characteristics::Characteristic;
use crate::config::RulesConfig;

/// Characteristic an attack is made with.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OffensiveValue {
    #[default]
    Ocv,
    Omcv,
}

/// Characteristic an attack is defended with.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DefensiveValue {
    #[default]
    Dcv,
    Dmcv,
}

impl OffensiveValue {
    pub const fn characteristic(self) -> Characteristic {
        match self {
            Self::Ocv => Characteristic::Ocv,
            Self::Omcv => Characteristic::Omcv,
        }
    }
}

impl DefensiveValue {
    pub const fn characteristic(self) -> Characteristic {
        match self {
            Self::Dcv => Characteristic::Dcv,
            Self::Dmcv => Characteristic::Dmcv,
        }
    }
}

/// Which combat values an attack pits against each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatValues {
    pub offensive: OffensiveValue,
    pub defensive: DefensiveValue,
}

impl CombatValues {
    pub const PHYSICAL: Self = Self {
        offensive: OffensiveValue::Ocv,
        defensive: DefensiveValue::Dcv,
    };
    pub const MENTAL: Self = Self {
        offensive: OffensiveValue::Omcv,
        defensive: DefensiveValue::Dmcv,
    };

    /// `"OCV vs. DCV"` style label.
    pub fn label(&self) -> String {
        format!(
            "{} vs. {}",
            self.offensive.as_ref().to_uppercase(),
            self.defensive.as_ref().to_uppercase()
        )
    }
}

/// 3d6 roll needed to hit: 11 + OCV - DCV.
///
/// ```
/// # use hero_core::combat::attack_roll_target;
/// assert_eq!(attack_roll_target(7, 5), 13);
/// ```
pub fn attack_roll_target(offensive: i32, defensive: i32) -> i32 {
    RulesConfig::ATTACK_ROLL_BASE + offensive - defensive
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_target_scales_with_the_difference() {
        assert_eq!(attack_roll_target(5, 5), 11);
        assert_eq!(attack_roll_target(3, 8), 6);
    }

    #[test]
    fn combat_value_labels_and_parsing() {
        assert_eq!(CombatValues::PHYSICAL.label(), "OCV vs. DCV");
        assert_eq!(CombatValues::MENTAL.label(), "OMCV vs. DMCV");
        assert_eq!("OMCV".parse::<OffensiveValue>(), Ok(OffensiveValue::Omcv));
        assert_eq!(
            DefensiveValue::Dmcv.characteristic(),
            Characteristic::Dmcv
        );
    }
}
