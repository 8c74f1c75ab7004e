/// Rules configuration constants and tunable parameters.
///
/// `RulesConfig::default()` reproduces the published framework rules; the
/// runtime-tunable fields exist for tables that house-rule slot discounts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RulesConfig {
    /// Divisor applied to a Fixed Multipower slot's cost.
    pub fixed_slot_divisor: u32,
    /// Divisor applied to a Variable Multipower slot's cost.
    pub variable_slot_divisor: u32,
    /// Factor applied to a VPP's control before framework modifiers.
    pub vpp_control_cost_multiplier: f64,
}

impl RulesConfig {
    // ===== compile-time constants =====
    /// Active points per damage class.
    pub const POINTS_PER_DC: f64 = 5.0;
    /// Segments in a turn on the speed chart.
    pub const SEGMENTS_PER_TURN: usize = 12;
    /// Base of every 3d6 characteristic roll.
    pub const ROLL_BASE: i32 = 9;
    /// Base of the attack roll (11 + OCV - DCV).
    pub const ATTACK_ROLL_BASE: i32 = 11;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FIXED_SLOT_DIVISOR: u32 = 10;
    pub const DEFAULT_VARIABLE_SLOT_DIVISOR: u32 = 5;
    pub const DEFAULT_VPP_CONTROL_COST_MULTIPLIER: f64 = 2.0;

    pub fn new() -> Self {
        Self {
            fixed_slot_divisor: Self::DEFAULT_FIXED_SLOT_DIVISOR,
            variable_slot_divisor: Self::DEFAULT_VARIABLE_SLOT_DIVISOR,
            vpp_control_cost_multiplier: Self::DEFAULT_VPP_CONTROL_COST_MULTIPLIER,
        }
    }

    pub fn with_slot_divisors(fixed: u32, variable: u32) -> Self {
        Self {
            fixed_slot_divisor: fixed,
            variable_slot_divisor: variable,
            ..Self::new()
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
