//! Damage class table.
//!
//! DC weights are stored in integer ticks (twentieths of a DC) so that
//! dice → DC → dice conversions are exact for every row.

/// Ticks in one damage class.
pub const TICKS_PER_DC: i64 = 20;

/// DC weights for one cost-per-die value, in ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageClassRow {
    /// Cost per die in quarter points (7.5 AP is stored as 30).
    ap_quarters: u32,
    /// Ticks of one full die.
    pub die: i64,
    /// Ticks of a half die.
    pub half: i64,
    /// Ticks of a single +1 / -1 pip.
    pub pip: i64,
}

impl DamageClassRow {
    const fn new(ap_quarters: u32, die: i64, half: i64, pip: i64) -> Self {
        Self {
            ap_quarters,
            die,
            half,
            pip,
        }
    }

    /// Cost per die this row describes.
    pub fn ap_per_die(&self) -> f64 {
        f64::from(self.ap_quarters) / 4.0
    }
}

/// Rows ordered by cost per die.
///
/// | AP/die | die | ½ die | pip |
/// |-------:|----:|------:|----:|
/// | 2.5 | 0.5 | 0.25 | 0.2 |
/// | 3   | 0.6 | 0.3  | 0.2 |
/// | 5   | 1   | 0.5  | 0.4 |
/// | 6   | 1.2 | 0.6  | 0.4 |
/// | 7.5 | 1.5 | 0.75 | 0.4 |
/// | 10  | 2   | 1    | 0.4 |
/// | 15  | 3   | 2    | 1   |
static DAMAGE_CLASS_TABLE: [DamageClassRow; 7] = [
    DamageClassRow::new(10, 10, 5, 4),
    DamageClassRow::new(12, 12, 6, 4),
    DamageClassRow::new(20, 20, 10, 8),
    DamageClassRow::new(24, 24, 12, 8),
    DamageClassRow::new(30, 30, 15, 8),
    DamageClassRow::new(40, 40, 20, 8),
    // Killing damage: 1 pip = 1 DC, ½d6 = 2 DC, 1d6 = 3 DC.
    DamageClassRow::new(60, 60, 40, 20),
];

/// Find the row for a cost per die, if the table knows it.
pub fn lookup(ap_per_die: f64) -> Option<&'static DamageClassRow> {
    if !ap_per_die.is_finite() {
        return None;
    }
    let quarters = ap_per_die * 4.0;
    if quarters.fract() != 0.0 || quarters <= 0.0 {
        return None;
    }
    let quarters = quarters as u32;
    DAMAGE_CLASS_TABLE
        .iter()
        .find(|row| row.ap_quarters == quarters)
}

/// Every cost per die the table supports.
pub fn supported_ap_per_die() -> impl Iterator<Item = f64> {
    DAMAGE_CLASS_TABLE.iter().map(DamageClassRow::ap_per_die)
}
