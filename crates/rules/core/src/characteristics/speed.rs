//! Speed chart.
//!
//! A turn is 12 segments; SPD decides in which of them a character acts.

use arrayvec::ArrayVec;

use crate::config::RulesConfig;

/// Segments (1-12) in which a character acts.
pub type Phases = ArrayVec<u8, { RulesConfig::SEGMENTS_PER_TURN }>;

const SPEED_CHART: [&[u8]; 12] = [
    &[7],
    &[6, 12],
    &[4, 8, 12],
    &[3, 6, 9, 12],
    &[3, 5, 8, 10, 12],
    &[2, 4, 6, 8, 10, 12],
    &[2, 4, 6, 7, 9, 11, 12],
    &[2, 3, 5, 6, 8, 9, 11, 12],
    &[2, 3, 4, 6, 7, 8, 10, 11, 12],
    &[2, 3, 4, 5, 6, 8, 9, 10, 11, 12],
    &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
    &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
];

/// Phases for a SPD value; SPD above 12 acts every segment, SPD 0 never.
pub fn phases(speed: i32) -> Phases {
    if speed <= 0 {
        return Phases::new();
    }
    let row = speed.min(SPEED_CHART.len() as i32) as usize - 1;
    SPEED_CHART[row].iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_rows() {
        assert_eq!(phases(2).as_slice(), &[6, 12]);
        assert_eq!(phases(4).as_slice(), &[3, 6, 9, 12]);
        assert_eq!(phases(5).as_slice(), &[3, 5, 8, 10, 12]);
        assert_eq!(phases(15).len(), 12);
        assert!(phases(0).is_empty());
    }

    #[test]
    fn every_row_has_spd_phases_ending_on_twelve() {
        for spd in 2..=12 {
            let row = phases(spd);
            assert_eq!(row.len(), spd as usize);
            assert_eq!(row.last(), Some(&12));
        }
    }
}
