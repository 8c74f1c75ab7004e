//! Powers: type catalog, category payloads, and the priced entity.
//!
//! A [`Power`] pairs a [`PowerType`] with the payload every category of that
//! type requires, plus its own adders, advantages and limitations. Costs are
//! derived on access:
//!
//! - **Base cost**: the cost override, or the type's [`CostStructure`]
//! - **Active cost**: base plus adders, scaled by advantages
//! - **Real cost**: active cost reduced by limitations
//!
//! [`CostStructure`]: crate::cost::CostStructure

pub mod category;
pub mod entity;
pub mod types;

pub use category::{Attack, CategoryData, CategoryDisplay, MovementMode};
pub use entity::{Power, PowerBuilder, PowerDisplay};
pub use types::{CustomPowerType, PowerCategories, PowerType, StandardPower, StandardPowerDef};
