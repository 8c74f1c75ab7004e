//! Plain data shapes handed over by the item collaborator.
//!
//! These mirror stored documents field for field (keyed maps stay keyed) and
//! convert into validated domain values. With the `serde` feature they
//! deserialize from camelCase documents.

pub mod framework;
pub mod power;

pub use framework::{FrameworkData, FrameworkItemData, FrameworkModifierData, SlotData};
pub use power::{
    AttackData, CategoryFlags, CvData, DamageData, DistanceData, ModifierData, MovementData,
    PowerData, PowerTypeData,
};
