//! Immutable damage dice.

use core::fmt;

use super::table::{self, DamageClassRow, TICKS_PER_DC};
use crate::error::{RulesError, RulesResult};

/// Fractional adjustment on top of whole dice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case")]
pub enum Adjustment {
    #[default]
    None,
    /// `+1` pip.
    PlusPip,
    /// `-1` pip.
    MinusPip,
    /// `+½d6`.
    PlusHalfDie,
    /// The half die bought as a full die minus one pip (`+1d6-1`).
    ///
    /// Its dice string matches a `MinusPip` of one more die (`1d6-1` for
    /// both), though the two are worth different DCs at most costs per die.
    /// Compare [`Damage::dc`] or [`Damage::dice`], not the string.
    MinusHalfDie,
}

impl Adjustment {
    /// Numeric form used by item data: 0, ±1, ±0.5.
    pub const fn value(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::PlusPip => 1.0,
            Self::MinusPip => -1.0,
            Self::PlusHalfDie => 0.5,
            Self::MinusHalfDie => -0.5,
        }
    }

    /// Offset of the encoded dice value, in tenths.
    const fn dice_tenths(self) -> i64 {
        match self {
            Self::None => 0,
            Self::PlusPip => 1,
            Self::MinusPip => -1,
            Self::PlusHalfDie => 5,
            Self::MinusHalfDie => 4,
        }
    }

    fn ticks(self, row: &DamageClassRow) -> i64 {
        match self {
            Self::None => 0,
            Self::PlusPip => row.pip,
            Self::MinusPip => -row.pip,
            Self::PlusHalfDie | Self::MinusHalfDie => row.half,
        }
    }
}

impl TryFrom<f64> for Adjustment {
    type Error = RulesError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        match value {
            v if v == 0.0 => Ok(Self::None),
            v if v == 1.0 => Ok(Self::PlusPip),
            v if v == -1.0 => Ok(Self::MinusPip),
            v if v == 0.5 => Ok(Self::PlusHalfDie),
            v if v == -0.5 => Ok(Self::MinusHalfDie),
            v => Err(RulesError::InvalidAdjustment(v)),
        }
    }
}

/// A quantity of effect dice bought at a given cost per die.
///
/// Damage is a value object: every change (adding DCs, re-reading dice from
/// item data) produces a new `Damage`.
///
/// ```
/// # use hero_core::dice::{Adjustment, Damage};
/// let blast = Damage::new(2, 5.0, Adjustment::PlusHalfDie).unwrap();
/// assert_eq!(blast.dc(), Some(2.5));
/// assert_eq!(blast.dice_string(), "2½d6");
///
/// let bigger = blast.add_damage_classes(1.0).unwrap();
/// assert_eq!(bigger.dice_string(), "3½d6");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Damage {
    base_dice: u32,
    ap_per_die: f64,
    adjustment: Adjustment,
}

impl Damage {
    pub fn new(base_dice: u32, ap_per_die: f64, adjustment: Adjustment) -> RulesResult<Self> {
        if !ap_per_die.is_finite() || ap_per_die < 0.0 {
            return Err(RulesError::NegativeValue {
                field: "apPerDie",
                value: ap_per_die,
            });
        }
        if base_dice == 0 && adjustment == Adjustment::MinusPip {
            return Err(RulesError::PipFromZeroDice);
        }
        Ok(Self {
            base_dice,
            ap_per_die,
            adjustment,
        })
    }

    /// Build from raw item fields, rejecting fractional dice and adjustments
    /// outside {0, ±0.5, ±1}.
    pub fn from_parts(base_dice: f64, ap_per_die: f64, adjustment: f64) -> RulesResult<Self> {
        if !base_dice.is_finite() || base_dice < 0.0 || base_dice.fract() != 0.0 {
            return Err(RulesError::InvalidDiceCount(base_dice));
        }
        if base_dice > f64::from(u32::MAX) {
            return Err(RulesError::DiceOutOfRange(base_dice));
        }
        Self::new(base_dice as u32, ap_per_die, Adjustment::try_from(adjustment)?)
    }

    /// No dice at all.
    pub const fn zero(ap_per_die: f64) -> Self {
        Self {
            base_dice: 0,
            ap_per_die,
            adjustment: Adjustment::None,
        }
    }

    /// Parse the conventional decimal dice value (e.g. `3.9` is `4d6-1`).
    pub fn from_dice(dice: f64, ap_per_die: f64) -> RulesResult<Self> {
        let (base_dice, adjustment) = decode_dice(dice)?;
        Self::new(base_dice, ap_per_die, adjustment)
    }

    /// Canonical inverse of [`Damage::dc`].
    ///
    /// Zero or negative DCs yield no dice. A DC that falls between the steps a
    /// die can represent is rounded down to the nearest step.
    pub fn from_dcs(dc: f64, ap_per_die: f64) -> RulesResult<Self> {
        let row = table::lookup(ap_per_die).ok_or(RulesError::UnsupportedApPerDie(ap_per_die))?;
        if dc <= 0.0 {
            return Ok(Self::zero(ap_per_die));
        }

        let scaled = (dc * TICKS_PER_DC as f64).round();
        if scaled >= (u32::MAX as f64) * row.die as f64 {
            return Err(RulesError::DiceOutOfRange(dc));
        }
        let ticks = scaled as i64;
        let whole = ticks / row.die;
        let remainder = ticks % row.die;

        let (dice, adjustment) = if remainder == 0 {
            (whole, Adjustment::None)
        } else if remainder == row.half {
            (whole, Adjustment::PlusHalfDie)
        } else if remainder == row.pip {
            (whole, Adjustment::PlusPip)
        } else if remainder == row.die - row.pip {
            (whole + 1, Adjustment::MinusPip)
        } else {
            let step = nearest_step_below(row, remainder);
            tracing::debug!(dc, ap_per_die, ?step, "damage classes between dice steps");
            step.map_or((whole, Adjustment::None), |(carry, adjustment)| {
                (whole + carry, adjustment)
            })
        };

        let dice = u32::try_from(dice).map_err(|_| RulesError::DiceOutOfRange(dc))?;
        Self::new(dice, ap_per_die, adjustment)
    }

    pub const fn base_dice(&self) -> u32 {
        self.base_dice
    }

    pub const fn ap_per_die(&self) -> f64 {
        self.ap_per_die
    }

    pub const fn adjustment(&self) -> Adjustment {
        self.adjustment
    }

    /// Total damage classes, or `None` when the cost per die has no DC table.
    pub fn dc(&self) -> Option<f64> {
        self.dc_ticks().map(|ticks| ticks as f64 / TICKS_PER_DC as f64)
    }

    fn dc_ticks(&self) -> Option<i64> {
        let row = table::lookup(self.ap_per_die)?;
        Some(i64::from(self.base_dice) * row.die + self.adjustment.ticks(row))
    }

    /// Conventional decimal dice value: `n - 0.1` for -1 pip, `n + 0.1` for
    /// +1 pip, `n + 0.4` for the minus-half form, `n + 0.5` for +½d6.
    pub fn dice(&self) -> f64 {
        (i64::from(self.base_dice) * 10 + self.adjustment.dice_tenths()) as f64 / 10.0
    }

    /// Human-readable dice: `"2½d6"`, `"4d6+1"`, `"1d6-1"`.
    pub fn dice_string(&self) -> String {
        let n = self.base_dice;
        match self.adjustment {
            Adjustment::None => format!("{n}d6"),
            Adjustment::PlusPip => format!("{n}d6+1"),
            Adjustment::MinusPip => format!("{n}d6-1"),
            Adjustment::PlusHalfDie if n == 0 => "½d6".to_string(),
            Adjustment::PlusHalfDie => format!("{n}½d6"),
            Adjustment::MinusHalfDie => format!("{}d6-1", u64::from(n) + 1),
        }
    }

    /// A new `Damage` with `dc` more (or, if negative, fewer) damage classes.
    pub fn add_damage_classes(&self, dc: f64) -> RulesResult<Self> {
        let current = self
            .dc()
            .ok_or(RulesError::UnsupportedApPerDie(self.ap_per_die))?;
        Self::from_dcs(current + dc, self.ap_per_die)
    }

    /// Highest total the dice can roll, saturating at `u32::MAX`.
    pub fn max_pips(&self) -> u32 {
        let whole = self.base_dice.saturating_mul(6);
        match self.adjustment {
            Adjustment::None => whole,
            Adjustment::PlusPip => whole.saturating_add(1),
            Adjustment::MinusPip => whole.saturating_sub(1),
            Adjustment::PlusHalfDie => whole.saturating_add(3),
            Adjustment::MinusHalfDie => whole.saturating_add(5),
        }
    }

    /// Number of physical dice rolled, counting a half die as one.
    pub fn dice_rolled(&self) -> u32 {
        match self.adjustment {
            Adjustment::PlusHalfDie | Adjustment::MinusHalfDie => self.base_dice.saturating_add(1),
            _ => self.base_dice,
        }
    }
}

impl fmt::Display for Damage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dice_string())
    }
}

/// Render an encoded dice value, falling back to the raw number when the
/// encoding is not one the rules use.
pub fn format_dice(dice: f64) -> String {
    match decode_dice(dice).and_then(|(n, adjustment)| Damage::new(n, 0.0, adjustment)) {
        Ok(damage) => damage.dice_string(),
        Err(_) => format!("{dice}d6"),
    }
}

fn decode_dice(dice: f64) -> RulesResult<(u32, Adjustment)> {
    if !dice.is_finite() || dice < 0.0 {
        return Err(RulesError::InvalidDiceEncoding(dice));
    }
    let scaled = dice * 10.0;
    let tenths = scaled.round();
    if (scaled - tenths).abs() > 1e-6 {
        return Err(RulesError::InvalidDiceEncoding(dice));
    }
    if tenths >= f64::from(u32::MAX) {
        return Err(RulesError::DiceOutOfRange(dice));
    }
    let tenths = tenths as u32;
    let whole = tenths / 10;

    match tenths % 10 {
        0 => Ok((whole, Adjustment::None)),
        1 => Ok((whole, Adjustment::PlusPip)),
        4 => Ok((whole, Adjustment::MinusHalfDie)),
        5 => Ok((whole, Adjustment::PlusHalfDie)),
        9 => Ok((whole + 1, Adjustment::MinusPip)),
        _ => Err(RulesError::InvalidDiceEncoding(dice)),
    }
}

/// Largest representable remainder not above `remainder`, as
/// (whole dice carried, adjustment). Equal steps resolve in the same
/// priority as an exact match: half die, then pip, then die minus a pip.
fn nearest_step_below(row: &DamageClassRow, remainder: i64) -> Option<(i64, Adjustment)> {
    [
        (row.half, (0, Adjustment::PlusHalfDie)),
        (row.pip, (0, Adjustment::PlusPip)),
        (row.die - row.pip, (1, Adjustment::MinusPip)),
    ]
    .into_iter()
    .filter(|(ticks, _)| *ticks <= remainder)
    .fold(None, |best: Option<(i64, (i64, Adjustment))>, candidate| match best {
        Some(kept) if kept.0 >= candidate.0 => Some(kept),
        _ => Some(candidate),
    })
    .map(|(_, step)| step)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn damage(dice: u32, ap: f64, adjustment: f64) -> Damage {
        Damage::from_parts(f64::from(dice), ap, adjustment).unwrap()
    }

    #[test]
    fn dc_values_from_the_table() {
        assert_eq!(damage(5, 5.0, 0.0).dc(), Some(5.0));
        assert_eq!(damage(2, 5.0, 0.5).dc(), Some(2.5));
        assert_eq!(damage(1, 10.0, 0.5).dc(), Some(3.0));
        assert_eq!(damage(0, 15.0, 0.5).dc(), Some(2.0));
        assert_eq!(damage(1, 15.0, 1.0).dc(), Some(4.0));
        assert_eq!(damage(2, 15.0, -1.0).dc(), Some(5.0));
        assert_eq!(damage(1, 6.0, 0.0).dc(), Some(1.2));
    }

    #[test]
    fn unsupported_cost_has_no_dc() {
        let transform = damage(3, 20.0, 0.0);
        assert_eq!(transform.dc(), None);
        assert_eq!(
            transform.add_damage_classes(1.0),
            Err(RulesError::UnsupportedApPerDie(20.0))
        );
    }

    #[test]
    fn round_trip_through_damage_classes() {
        for ap in table::supported_ap_per_die() {
            for dice in 0..12 {
                for adjustment in Adjustment::iter() {
                    let Ok(original) = Damage::new(dice, ap, adjustment) else {
                        continue;
                    };
                    let dc = original.dc().unwrap();
                    let restored = Damage::from_dcs(dc, ap).unwrap();
                    assert_eq!(restored.dc(), Some(dc), "{original} at {ap} AP/die");
                }
            }
        }
    }

    #[test]
    fn round_trip_through_dice_values() {
        for x in [0.0, 0.5, 1.0, 2.9, 3.1, 3.4, 3.5, 3.9, 12.0, 7.1] {
            assert_eq!(Damage::from_dice(x, 5.0).unwrap().dice(), x);
        }
    }

    #[test]
    fn dice_value_encoding() {
        let d = Damage::from_dice(3.9, 5.0).unwrap();
        assert_eq!(d.base_dice(), 4);
        assert_eq!(d.adjustment(), Adjustment::MinusPip);

        let d = Damage::from_dice(3.4, 5.0).unwrap();
        assert_eq!(d.base_dice(), 3);
        assert_eq!(d.adjustment(), Adjustment::MinusHalfDie);

        assert_eq!(
            Damage::from_dice(3.3, 5.0),
            Err(RulesError::InvalidDiceEncoding(3.3))
        );
    }

    #[test]
    fn dice_strings() {
        assert_eq!(damage(2, 5.0, 0.5).dice_string(), "2½d6");
        assert_eq!(damage(4, 5.0, 1.0).dice_string(), "4d6+1");
        assert_eq!(damage(1, 15.0, -1.0).dice_string(), "1d6-1");
        assert_eq!(damage(0, 15.0, 0.5).dice_string(), "½d6");
        assert_eq!(damage(2, 15.0, -0.5).dice_string(), "3d6-1");
        assert_eq!(Damage::zero(5.0).dice_string(), "0d6");
    }

    #[test]
    fn preconditions_are_rejected() {
        assert_eq!(
            Damage::from_parts(2.0, 5.0, 0.3),
            Err(RulesError::InvalidAdjustment(0.3))
        );
        assert_eq!(
            Damage::from_parts(2.5, 5.0, 0.0),
            Err(RulesError::InvalidDiceCount(2.5))
        );
        assert_eq!(
            Damage::new(0, 5.0, Adjustment::MinusPip),
            Err(RulesError::PipFromZeroDice)
        );
    }

    #[test]
    fn non_positive_dcs_are_zero_dice() {
        for ap in [5.0, 10.0, 15.0] {
            let d = Damage::from_dcs(-3.0, ap).unwrap();
            assert_eq!(d.base_dice(), 0);
            assert_eq!(d.adjustment(), Adjustment::None);
        }
    }

    #[test]
    fn adding_damage_classes_to_killing_attacks() {
        let rka = damage(1, 15.0, 0.0);
        assert_eq!(rka.add_damage_classes(1.0).unwrap().dice_string(), "1d6+1");
        assert_eq!(rka.add_damage_classes(2.0).unwrap().dice_string(), "1½d6");
        assert_eq!(rka.add_damage_classes(3.0).unwrap().dice_string(), "2d6");
        assert_eq!(rka.add_damage_classes(-1.0).unwrap().dice_string(), "½d6");
        // original untouched
        assert_eq!(rka.dice_string(), "1d6");
    }

    #[test]
    fn between_steps_rounds_down() {
        // 1.1 DC at 5 AP/die: 1d6 plus a tenth of a die, below the +1 pip step.
        let d = Damage::from_dcs(1.1, 5.0).unwrap();
        assert_eq!(d.dice_string(), "1d6");
        // 1.45 DC: above +1 pip (1.4), below +½d6 (1.5).
        let d = Damage::from_dcs(1.45, 5.0).unwrap();
        assert_eq!(d.dice_string(), "1d6+1");
    }

    #[test]
    fn maximum_roll() {
        assert_eq!(damage(2, 5.0, 0.5).max_pips(), 15);
        assert_eq!(damage(2, 15.0, -0.5).max_pips(), 17);
        assert_eq!(damage(2, 15.0, -0.5).dice_rolled(), 3);
        let huge = Damage::new(u32::MAX, 5.0, Adjustment::PlusHalfDie).unwrap();
        assert_eq!(huge.max_pips(), u32::MAX);
        assert_eq!(huge.dice_rolled(), u32::MAX);
    }

    #[test]
    fn unrepresentable_dice_are_rejected() {
        assert_eq!(
            Damage::from_dcs(1e10, 5.0),
            Err(RulesError::DiceOutOfRange(1e10))
        );
        assert_eq!(
            Damage::from_parts(1e10, 5.0, 0.0),
            Err(RulesError::DiceOutOfRange(1e10))
        );
        assert_eq!(
            Damage::from_dice(1e10, 5.0),
            Err(RulesError::DiceOutOfRange(1e10))
        );
        let big = Damage::new(4_000_000_000, 5.0, Adjustment::None).unwrap();
        assert!(big.add_damage_classes(1e9).is_err());
    }

    #[test]
    fn tied_steps_prefer_the_half_die() {
        // 15 AP/die: half die and die minus a pip are both 2 DC.
        assert_eq!(Damage::from_dcs(2.0, 15.0).unwrap().dice_string(), "½d6");
        assert_eq!(Damage::from_dcs(2.5, 15.0).unwrap().dice_string(), "½d6");
        assert_eq!(Damage::from_dcs(5.5, 15.0).unwrap().dice_string(), "1½d6");
    }

    #[test]
    fn minus_half_die_and_minus_pip_share_a_string() {
        let half = Damage::new(0, 5.0, Adjustment::MinusHalfDie).unwrap();
        let pip = Damage::new(1, 5.0, Adjustment::MinusPip).unwrap();
        assert_eq!(half.dice_string(), pip.dice_string());
        assert_ne!(half.dc(), pip.dc());
        assert_ne!(half.dice(), pip.dice());
    }
}
