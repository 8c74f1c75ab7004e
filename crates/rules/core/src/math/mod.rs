//! Numeric primitives shared by every cost and dice calculation.
//!
//! - [`rounding`]: the two deterministic rounding policies of the rules
//! - [`tagged`]: numbers paired with their domain-specific string form

pub mod rounding;
pub mod tagged;

pub use rounding::{round_favouring_higher, round_favouring_lower};
pub use tagged::{NumberKind, TaggedNumber, format};
