//! Characteristic registry.
//!
//! Characteristics are defined once in a static catalog and never change.
//! Each definition knows its abbreviation, full name, optional 3d6 roll and a
//! set of named derived attributes (lift, damage dice, phases, ...).
//!
//! ```text
//! [ CharacteristicValue (value + modifier) ]
//!      ↓ total
//! [ CharacteristicDef (static catalog) ]
//!      ↓ derived("lift"), target_number()
//! [ DerivedValue ]
//! ```

pub mod catalog;
pub mod derived;
pub mod speed;
pub mod value;

pub use catalog::{Characteristic, CharacteristicDef, DerivedAttribute, characteristic_def};
pub use derived::{DerivedValue, effect_dice, lift_kg, roll_target};
pub use speed::{Phases, phases};
pub use value::CharacteristicValue;
