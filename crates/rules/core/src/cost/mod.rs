//! Cost-structure algebra.
//!
//! # Pipeline
//!
//! ```text
//! [ base cost ]  ← CostStructure (fixed / per die / per meter) or override
//!      ↓ + adders, × (1 + advantages), round favouring lower
//! [ active cost ]
//!      ↓ ÷ (1 + |limitations|), round favouring lower
//! [ real cost ]
//! ```

pub mod algebra;
pub mod structure;

pub use algebra::{CostBreakdown, active_cost, cost_breakdown, real_cost};
pub use structure::CostStructure;
