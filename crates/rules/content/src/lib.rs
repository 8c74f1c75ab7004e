//! Data-driven content for the rules engine.
//!
//! This crate reads collaborator data from disk into `hero-core` types:
//! - Item documents holding powers and frameworks (JSON)
//! - Custom power type catalogs (RON)
//! - Rules configuration (TOML)
//!
//! The rules engine itself never touches the filesystem; everything here
//! ends in plain `hero-core` values.

pub mod loaders;

pub use loaders::{
    ConfigLoader, ContentFactory, CustomPowerLoader, ItemDocument, ItemLoader, LoadedItems,
};
