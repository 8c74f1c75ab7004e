//! Rounding policies.
//!
//! The rules round point costs "in the character's disfavour" (x.5 goes down)
//! and characteristic rolls "in the character's favour" (x.5 goes up). Both are
//! implemented as a plain round after nudging the value by a tiny epsilon, so a
//! value a hair above x.5 still rounds up under the favour-lower policy.

/// Nudge used to break x.5 ties; far below any fraction the rules produce.
const TIE_EPSILON: f64 = 1e-9;

/// Round to the nearest integer, sending exact halves down.
///
/// ```
/// # use hero_core::math::round_favouring_lower;
/// assert_eq!(round_favouring_lower(6.5), 6);
/// assert_eq!(round_favouring_lower(5.5000001), 6);
/// assert_eq!(round_favouring_lower(67.5), 67);
/// ```
pub fn round_favouring_lower(value: f64) -> i32 {
    (value - TIE_EPSILON).round() as i32
}

/// Round to the nearest integer, sending exact halves up.
///
/// ```
/// # use hero_core::math::round_favouring_higher;
/// assert_eq!(round_favouring_higher(6.5), 7);
/// assert_eq!(round_favouring_higher(6.4999), 6);
/// ```
pub fn round_favouring_higher(value: f64) -> i32 {
    (value + TIE_EPSILON).round() as i32
}
