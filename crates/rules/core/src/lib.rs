//! Rules and cost engine for a 6th-edition point-buy supers RPG.
//!
//! `hero-core` turns plain item data into immutable values that derive every
//! number the game needs: damage classes, characteristic rolls, power costs
//! and framework budgets. It performs no I/O; see `hero-content` for loaders.
//!
//! Invalid input fails fast with [`RulesError`]. Over-budget frameworks are
//! legal and carry [`framework::Warning`]s instead.
pub mod characteristics;
pub mod combat;
pub mod config;
pub mod cost;
pub mod data;
pub mod dice;
pub mod error;
pub mod framework;
pub mod math;
pub mod modifiers;
pub mod power;

pub use characteristics::{Characteristic, CharacteristicDef, CharacteristicValue, DerivedValue};
pub use combat::{CombatValues, DamageType, Defense, PotentialDamage, attack_roll_target};
pub use config::RulesConfig;
pub use cost::{CostBreakdown, CostStructure};
pub use data::{FrameworkData, PowerData};
pub use dice::{Adjustment, Damage};
pub use error::{ErrorSeverity, RulesError, RulesResult};
pub use framework::{
    Framework, FrameworkDisplay, FrameworkKind, Multipower, Slot, SlotDisplay, SlotKind, Vpp,
    Warning, WarningKind, WarningScope,
};
pub use math::{NumberKind, TaggedNumber, round_favouring_higher, round_favouring_lower};
pub use modifiers::{
    FrameworkModifier, FrameworkModifierScope, ModifierDisplay, ModifierKind, PowerModifier,
};
pub use power::{
    Attack, CategoryData, CustomPowerType, MovementMode, Power, PowerBuilder, PowerCategories,
    PowerDisplay, PowerType, StandardPower,
};
