//! Combat resolution numbers.
//!
//! Pure functions producing the numbers a table needs to resolve an attack:
//! the 3d6 roll to hit and the most STUN/BODY an attack can inflict. Nothing
//! here rolls dice.
//!
//! - `attack_roll_target`: 11 + OCV - DCV
//! - `potential_damage`: maximum STUN/BODY/effect for dice and damage type

pub mod damage;
pub mod hit;

pub use damage::{DamageType, Defense, PotentialDamage, potential_damage};
pub use hit::{CombatValues, DefensiveValue, OffensiveValue, attack_roll_target};
