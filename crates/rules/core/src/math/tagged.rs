//! Numbers with a domain-specific rendering.
//!
//! A [`TaggedNumber`] behaves like its plain `value` in arithmetic; the
//! [`NumberKind`] only selects how [`format`] renders it for display.

use core::fmt;

use crate::dice::format_dice;

/// How a tagged number is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NumberKind {
    /// `"+5 CP"`
    Adder,
    /// `"+1½"`, zero renders `"+0"`
    Advantage,
    /// `"-2¾"`, zero renders `"-0"`
    Limitation,
    /// `"2½d6"`, `"4d6+1"`
    Dice,
    /// `"45 CP"`
    CharacterPoints,
    /// `"20m"`
    Meters,
}

/// A plain number paired with its display kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedNumber {
    pub kind: NumberKind,
    pub value: f64,
}

impl TaggedNumber {
    pub const fn new(kind: NumberKind, value: f64) -> Self {
        Self { kind, value }
    }

    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for TaggedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self.kind, self.value))
    }
}

impl From<TaggedNumber> for f64 {
    fn from(tagged: TaggedNumber) -> Self {
        tagged.value
    }
}

/// Render `value` the way `kind` is shown on a character sheet.
///
/// ```
/// # use hero_core::math::{format, NumberKind};
/// assert_eq!(format(NumberKind::Advantage, 1.5), "+1½");
/// assert_eq!(format(NumberKind::Limitation, -2.75), "-2¾");
/// assert_eq!(format(NumberKind::Limitation, 0.0), "-0");
/// assert_eq!(format(NumberKind::Adder, 5.0), "+5 CP");
/// ```
pub fn format(kind: NumberKind, value: f64) -> String {
    match kind {
        NumberKind::Adder => format!("+{} CP", value.abs()),
        NumberKind::Advantage => format!("+{}", fraction_string(value.abs())),
        NumberKind::Limitation => format!("-{}", fraction_string(value.abs())),
        NumberKind::Dice => format_dice(value),
        NumberKind::CharacterPoints => format!("{value} CP"),
        NumberKind::Meters => format!("{value}m"),
    }
}

/// Unsigned modifier magnitude with quarter glyphs and no leading zero.
fn fraction_string(magnitude: f64) -> String {
    let whole = magnitude.trunc();
    let glyph = match ((magnitude - whole) * 100.0).round() as i64 {
        0 => Some(""),
        25 => Some("¼"),
        50 => Some("½"),
        75 => Some("¾"),
        _ => None,
    };

    match glyph {
        Some("") => format!("{}", whole as i64),
        Some(glyph) if whole == 0.0 => glyph.to_string(),
        Some(glyph) => format!("{}{glyph}", whole as i64),
        None => {
            let plain = magnitude.to_string();
            plain
                .strip_prefix('0')
                .map(str::to_string)
                .unwrap_or(plain)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advantage_strings() {
        assert_eq!(format(NumberKind::Advantage, 0.0), "+0");
        assert_eq!(format(NumberKind::Advantage, 1.5), "+1½");
        assert_eq!(format(NumberKind::Advantage, 0.5), "+½");
        assert_eq!(format(NumberKind::Advantage, 0.25), "+¼");
        assert_eq!(format(NumberKind::Advantage, 2.0), "+2");
        assert_eq!(format(NumberKind::Advantage, 0.3), "+.3");
    }

    #[test]
    fn limitation_strings() {
        assert_eq!(format(NumberKind::Limitation, 0.0), "-0");
        assert_eq!(format(NumberKind::Limitation, -2.75), "-2¾");
        assert_eq!(format(NumberKind::Limitation, -0.5), "-½");
        assert_eq!(format(NumberKind::Limitation, -1.0), "-1");
    }

    #[test]
    fn points_and_distance() {
        assert_eq!(format(NumberKind::CharacterPoints, 45.0), "45 CP");
        assert_eq!(format(NumberKind::Meters, 20.0), "20m");
        assert_eq!(format(NumberKind::Dice, 2.5), "2½d6");
    }

    #[test]
    fn tagged_number_keeps_its_value() {
        let tagged = TaggedNumber::new(NumberKind::Advantage, 0.75);
        assert_eq!(tagged.to_string(), "+¾");
        assert_eq!(f64::from(tagged) * 2.0, 1.5);
    }
}
