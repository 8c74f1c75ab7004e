//! Power modifiers: adders, advantages and limitations.
//!
//! All three are the same [`PowerModifier`] value tagged with a
//! [`ModifierKind`]; the kind decides the sign convention and how the value is
//! rendered. A [`FrameworkModifier`] wraps one with a scope saying whether it
//! prices the framework, its slots, or both.

pub mod framework;
pub mod power;

pub use framework::{FrameworkModifier, FrameworkModifierScope};
pub use power::{ModifierDisplay, ModifierKind, PowerModifier};

/// Sum of modifier magnitudes, the form every cost formula consumes.
///
/// Limitations are stored non-positive; their magnitude is what divides real
/// cost.
pub fn total<'a>(modifiers: impl IntoIterator<Item = &'a PowerModifier>) -> f64 {
    modifiers
        .into_iter()
        .map(|modifier| modifier.value().abs())
        .sum()
}
