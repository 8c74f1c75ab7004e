//! Derived-attribute formulas.
//!
//! Formulas:
//! - roll = 9 + CHAR / 5, rounded in the character's favour
//! - effect dice = CHAR / 5 d6, +½d6 when the remainder is 3 or more
//! - lift = table lookup, doubling every 5 STR past the table

use super::speed::Phases;
use crate::config::RulesConfig;
use crate::dice::{Adjustment, Damage};
use crate::math::round_favouring_higher;

/// Points of characteristic per d6 of effect.
const POINTS_PER_DIE: i32 = 5;

/// A derived attribute's value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DerivedValue {
    Kilograms(f64),
    Dice(Damage),
    Roll(i32),
    Points(i32),
    Phases(Phases),
}

/// 3d6 characteristic roll target.
///
/// ```
/// # use hero_core::characteristics::roll_target;
/// assert_eq!(roll_target(10), 11);
/// assert_eq!(roll_target(13), 12);
/// assert_eq!(roll_target(12), 11);
/// ```
pub fn roll_target(value: i32) -> i32 {
    RulesConfig::ROLL_BASE + round_favouring_higher(f64::from(value) / 5.0)
}

/// Normal-damage dice bought with a characteristic (STR damage, PRE attacks).
pub fn effect_dice(value: i32) -> Damage {
    let value = value.max(0);
    let dice = (value / POINTS_PER_DIE) as u32;
    let adjustment = if value % POINTS_PER_DIE >= 3 {
        Adjustment::PlusHalfDie
    } else {
        Adjustment::None
    };
    Damage::new(dice, f64::from(POINTS_PER_DIE), adjustment).unwrap_or(Damage::zero(5.0))
}

/// (STR, kg) rows of the strength table.
const LIFT_TABLE: [(i32, f64); 30] = [
    (0, 0.0),
    (1, 8.0),
    (2, 16.0),
    (3, 25.0),
    (4, 38.0),
    (5, 50.0),
    (8, 75.0),
    (10, 100.0),
    (13, 150.0),
    (15, 200.0),
    (18, 300.0),
    (20, 400.0),
    (23, 600.0),
    (25, 800.0),
    (28, 1_200.0),
    (30, 1_600.0),
    (35, 3_200.0),
    (40, 6_400.0),
    (45, 12_500.0),
    (50, 25_000.0),
    (55, 50_000.0),
    (60, 100_000.0),
    (65, 200_000.0),
    (70, 400_000.0),
    (75, 800_000.0),
    (80, 1_600_000.0),
    (85, 3_200_000.0),
    (90, 6_400_000.0),
    (95, 12_500_000.0),
    (100, 25_000_000.0),
];

/// Kilograms a character with `strength` STR can lift.
pub fn lift_kg(strength: i32) -> f64 {
    if strength <= 0 {
        return 0.0;
    }
    let (top_str, top_kg) = LIFT_TABLE[LIFT_TABLE.len() - 1];
    if strength > top_str {
        let doublings = (strength - top_str) / 5;
        return top_kg * 2f64.powi(doublings);
    }
    LIFT_TABLE
        .iter()
        .rev()
        .find(|(row_str, _)| *row_str <= strength)
        .map_or(0.0, |(_, kg)| *kg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lift_uses_the_highest_row_not_above() {
        assert_eq!(lift_kg(0), 0.0);
        assert_eq!(lift_kg(10), 100.0);
        assert_eq!(lift_kg(12), 100.0);
        assert_eq!(lift_kg(13), 150.0);
        assert_eq!(lift_kg(100), 25_000_000.0);
        assert_eq!(lift_kg(110), 100_000_000.0);
        assert_eq!(lift_kg(-5), 0.0);
    }

    #[test]
    fn effect_dice_from_characteristic() {
        assert_eq!(effect_dice(10).dice_string(), "2d6");
        assert_eq!(effect_dice(13).dice_string(), "2½d6");
        assert_eq!(effect_dice(12).dice_string(), "2d6");
        assert_eq!(effect_dice(30).dc(), Some(6.0));
        assert_eq!(effect_dice(-3).dice_string(), "0d6");
    }

    #[test]
    fn rolls_round_in_the_characters_favour() {
        assert_eq!(roll_target(0), 9);
        assert_eq!(roll_target(8), 11);
        assert_eq!(roll_target(18), 13);
        assert_eq!(roll_target(23), 14);
    }
}
