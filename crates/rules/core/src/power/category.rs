//! Category payloads: the data a power must carry for each category it
//! belongs to.

use super::types::PowerCategories;
use crate::combat::{CombatValues, DamageType, Defense, PotentialDamage, potential_damage};
use crate::dice::Damage;
use crate::math::{NumberKind, format};

/// Attack data: combat values, damage and the defense that applies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Attack {
    pub cv: CombatValues,
    pub damage: Damage,
    pub damage_type: DamageType,
    pub defense: Defense,
}

impl Attack {
    /// Physical normal-damage attack against PD.
    pub fn new(damage: Damage) -> Self {
        Self {
            cv: CombatValues::PHYSICAL,
            damage,
            damage_type: DamageType::Normal,
            defense: Defense::Pd,
        }
    }

    #[must_use]
    pub fn with_cv(mut self, cv: CombatValues) -> Self {
        self.cv = cv;
        self
    }

    #[must_use]
    pub fn with_damage_type(mut self, damage_type: DamageType) -> Self {
        self.damage_type = damage_type;
        self
    }

    #[must_use]
    pub fn with_defense(mut self, defense: Defense) -> Self {
        self.defense = defense;
        self
    }

    pub fn potential(&self) -> PotentialDamage {
        potential_damage(&self.damage, self.damage_type)
    }
}

/// Movement data: distance in meters plus a situational modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementMode {
    /// Meters bought; this is what the power pays for.
    pub distance: f64,
    /// Meters added or removed by circumstances; never priced.
    pub modifier: f64,
}

impl MovementMode {
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            modifier: 0.0,
        }
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: f64) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn base_distance(&self) -> f64 {
        self.distance
    }

    pub fn total_distance(&self) -> f64 {
        (self.distance + self.modifier).max(0.0)
    }
}

/// Payload for one power category.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CategoryData {
    Attack(Attack),
    Movement(MovementMode),
}

impl CategoryData {
    pub fn category(&self) -> PowerCategories {
        match self {
            Self::Attack(_) => PowerCategories::ATTACK,
            Self::Movement(_) => PowerCategories::MOVEMENT,
        }
    }

    /// Display payload; `effective` is the attack's damage after damage adders.
    pub(crate) fn display(&self, effective: Option<&Damage>) -> CategoryDisplay {
        match self {
            Self::Attack(attack) => {
                let effective = effective.unwrap_or(&attack.damage);
                CategoryDisplay::Attack {
                    cv: attack.cv.label(),
                    dice: attack.damage.dice(),
                    dice_string: attack.damage.dice_string(),
                    dc: attack.damage.dc(),
                    effective_dice_string: effective.dice_string(),
                    damage_type: attack.damage_type.to_string(),
                    defense: attack.defense.to_string(),
                    potential: potential_damage(effective, attack.damage_type),
                }
            }
            Self::Movement(movement) => CategoryDisplay::Movement {
                distance: movement.distance,
                distance_string: format(NumberKind::Meters, movement.distance),
                modifier: movement.modifier,
                total_string: format(NumberKind::Meters, movement.total_distance()),
            },
        }
    }
}

/// Display payload for a category.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "category", rename_all = "camelCase"))]
pub enum CategoryDisplay {
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Attack {
        cv: String,
        dice: f64,
        dice_string: String,
        dc: Option<f64>,
        effective_dice_string: String,
        damage_type: String,
        defense: String,
        potential: PotentialDamage,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Movement {
        distance: f64,
        distance_string: String,
        modifier: f64,
        total_string: String,
    },
}
