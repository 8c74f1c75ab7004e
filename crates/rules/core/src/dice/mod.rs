//! Damage dice and damage classes.
//!
//! Effects are bought in d6 at a cost per die that depends on the effect. A
//! damage class (DC) is 5 active points of effect regardless of that cost, so
//! DCs are the common currency for comparing and adjusting dice bought at
//! different point efficiencies.
//!
//! - [`table`]: the per-cost DC weights of a die, a half die and a pip
//! - [`damage`]: the immutable [`Damage`] value and its conversions

pub mod damage;
pub mod table;

pub use damage::{Adjustment, Damage, format_dice};
pub use table::{DamageClassRow, TICKS_PER_DC};
