//! Damage types, defenses and potential damage.

use crate::dice::{Adjustment, Damage};

/// How an attack's dice are read.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    /// STUN is the total rolled, BODY is counted per die.
    #[default]
    Normal,
    /// BODY is the total rolled, STUN is BODY times a multiplier.
    Killing,
    /// Dice measure an effect (Drain, Entangle, Mind Control, ...).
    Effect,
}

/// Defense that applies against an attack.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Defense {
    #[default]
    Pd,
    Ed,
    Mental,
    Power,
    Flash,
    None,
}

/// Highest stun multiplier a killing attack can roll.
pub const MAX_STUN_MULTIPLIER: u32 = 3;

/// Most an attack can inflict, before defenses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotentialDamage {
    pub stun: u32,
    pub body: u32,
    pub effect: u32,
}

/// Maximum STUN, BODY and effect for `damage` read as `damage_type`.
pub fn potential_damage(damage: &Damage, damage_type: DamageType) -> PotentialDamage {
    let pips = damage.max_pips();
    match damage_type {
        DamageType::Normal => PotentialDamage {
            stun: pips,
            body: normal_body(damage),
            effect: 0,
        },
        DamageType::Killing => PotentialDamage {
            stun: pips.saturating_mul(MAX_STUN_MULTIPLIER),
            body: pips,
            effect: 0,
        },
        DamageType::Effect => PotentialDamage {
            stun: 0,
            body: 0,
            effect: pips,
        },
    }
}

/// Normal dice count 2 BODY on a 6 and 1 otherwise; a half die tops out at 1.
fn normal_body(damage: &Damage) -> u32 {
    let whole = damage.base_dice().saturating_mul(2);
    match damage.adjustment() {
        Adjustment::PlusHalfDie => whole.saturating_add(1),
        Adjustment::MinusHalfDie => whole.saturating_add(2),
        _ => whole,
    }
}
