//! Base → active → real cost.

use crate::math::round_favouring_lower;

/// Active cost: `(base + adders) × (1 + advantages)`, rounded favouring lower.
///
/// ```
/// # use hero_core::cost::active_cost;
/// assert_eq!(active_cost(45.0, 0.0, 0.5), 67);
/// assert_eq!(active_cost(45.0, 0.0, 1.0), 90);
/// ```
pub fn active_cost(base: f64, adder_total: f64, advantage_total: f64) -> i32 {
    round_favouring_lower((base + adder_total) * (1.0 + advantage_total))
}

/// Real cost: `active / (1 + |limitations|)`, rounded favouring lower.
///
/// ```
/// # use hero_core::cost::real_cost;
/// assert_eq!(real_cost(67.0, -0.5), 45);
/// ```
pub fn real_cost(active: f64, limitation_total: f64) -> i32 {
    round_favouring_lower(active / (1.0 + limitation_total.abs()))
}

/// The three stages of a cost, side by side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CostBreakdown {
    pub base: f64,
    pub active: i32,
    pub real: i32,
}

/// Run the whole pipeline.
pub fn cost_breakdown(
    base: f64,
    adder_total: f64,
    advantage_total: f64,
    limitation_total: f64,
) -> CostBreakdown {
    let active = active_cost(base, adder_total, advantage_total);
    CostBreakdown {
        base,
        active,
        real: real_cost(f64::from(active), limitation_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advantages_multiply_after_adders() {
        assert_eq!(active_cost(10.0, 5.0, 0.5), 22);
        assert_eq!(active_cost(60.0, 0.0, 0.0), 60);
    }

    #[test]
    fn limitations_divide_with_magnitude() {
        assert_eq!(real_cost(60.0, -1.0), 30);
        assert_eq!(real_cost(60.0, 1.0), 30);
        assert_eq!(real_cost(50.0, -0.25), 40);
        // 25 / 1.5 = 16.67
        assert_eq!(real_cost(25.0, -0.5), 17);
        // 13 / 2 = 6.5 rounds down
        assert_eq!(real_cost(13.0, -1.0), 6);
    }

    #[test]
    fn breakdown_chains_the_stages() {
        let cost = cost_breakdown(45.0, 0.0, 0.5, -0.5);
        assert_eq!(cost.active, 67);
        assert_eq!(cost.real, 45);
    }
}
