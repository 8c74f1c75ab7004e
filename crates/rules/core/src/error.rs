//! Common error infrastructure for hero-core.
//!
//! Every error in this crate is a precondition violation raised while a
//! collaborator hands over structurally invalid data, or a signal that a rule
//! combination is legal but not yet modelled. Budget problems (over-allocated
//! reserves and pools) are never errors; see [`crate::framework::Warning`].
//!
//! # Design Principles
//!
//! - **Fail fast**: errors are raised synchronously at construction time
//! - **Never coerce**: invalid values are rejected, not clamped
//! - **Severity Classification**: callers can tell "invalid" apart from
//!   "valid but not modelled" without matching every variant

use crate::power::PowerCategories;

/// Severity level of an error, used for categorization and reporting.
///
/// - **Validation**: the collaborator supplied malformed data
/// - **NotImplemented**: the data is legal per the rules but the engine does not
///   model that combination yet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: adjustment of 0.3 dice, fractional adder, attack power
    /// without attack data
    Validation,

    /// Rule combination that exists in the game but is not modelled.
    ///
    /// Examples: slot holding several powers, framework adder on the reserve
    NotImplemented,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotImplemented => "not-implemented",
        }
    }

    /// Returns true if the input itself was invalid.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Precondition violations raised by the rules engine.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RulesError {
    #[error("dice adjustment must be one of 0, ±0.5, ±1 (got {0})")]
    InvalidAdjustment(f64),

    #[error("dice count must be a non-negative integer (got {0})")]
    InvalidDiceCount(f64),

    #[error("cannot remove a pip from zero dice")]
    PipFromZeroDice,

    #[error("dice value {0} has no valid encoding (fraction must be .0, .1, .4, .5 or .9)")]
    InvalidDiceEncoding(f64),

    #[error("{0} is more dice than can be represented")]
    DiceOutOfRange(f64),

    #[error("no damage class table for {0} AP per die")]
    UnsupportedApPerDie(f64),

    #[error("adder values must be integral (got {0})")]
    FractionalAdder(f64),

    #[error("modifier '{name}' is a {found}, expected {expected}")]
    WrongModifierKind {
        name: String,
        expected: crate::modifiers::ModifierKind,
        found: crate::modifiers::ModifierKind,
    },

    #[error("unknown standard power '{0}'")]
    UnknownPower(String),

    #[error("unknown characteristic '{0}'")]
    UnknownCharacteristic(String),

    #[error("power '{power}' declares {category:?} but supplies no data for it")]
    MissingCategoryData {
        power: String,
        category: PowerCategories,
    },

    #[error("power '{power}' supplies {category:?} data it does not declare")]
    UndeclaredCategoryData {
        power: String,
        category: PowerCategories,
    },

    #[error("cost structure requires {expected:?} but power '{power}' is {found:?}")]
    CategoryMismatch {
        power: String,
        expected: PowerCategories,
        found: PowerCategories,
    },

    #[error("unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("{field} must be whole points (got {value})")]
    FractionalPoints { field: &'static str, value: f64 },

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("slot '{0}' holds no power")]
    EmptySlot(String),

    #[error("slot '{slot}' references unknown power '{power}'")]
    MissingPower { slot: String, power: String },

    #[error("not yet implemented: {0}")]
    NotImplemented(&'static str),
}

impl RulesError {
    /// Returns the severity level of this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotImplemented(_) => ErrorSeverity::NotImplemented,
            _ => ErrorSeverity::Validation,
        }
    }

    /// Returns true when the data is valid but the engine cannot model it.
    pub fn is_not_implemented(&self) -> bool {
        self.severity() == ErrorSeverity::NotImplemented
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization and testing.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAdjustment(_) => "invalid_adjustment",
            Self::InvalidDiceCount(_) => "invalid_dice_count",
            Self::PipFromZeroDice => "pip_from_zero_dice",
            Self::InvalidDiceEncoding(_) => "invalid_dice_encoding",
            Self::DiceOutOfRange(_) => "dice_out_of_range",
            Self::UnsupportedApPerDie(_) => "unsupported_ap_per_die",
            Self::FractionalAdder(_) => "fractional_adder",
            Self::WrongModifierKind { .. } => "wrong_modifier_kind",
            Self::UnknownPower(_) => "unknown_power",
            Self::UnknownCharacteristic(_) => "unknown_characteristic",
            Self::MissingCategoryData { .. } => "missing_category_data",
            Self::UndeclaredCategoryData { .. } => "undeclared_category_data",
            Self::CategoryMismatch { .. } => "category_mismatch",
            Self::UnknownValue { .. } => "unknown_value",
            Self::NegativeValue { .. } => "negative_value",
            Self::FractionalPoints { .. } => "fractional_points",
            Self::MissingField(_) => "missing_field",
            Self::EmptySlot(_) => "empty_slot",
            Self::MissingPower { .. } => "missing_power",
            Self::NotImplemented(_) => "not_implemented",
        }
    }
}

/// Result alias used throughout hero-core.
pub type RulesResult<T> = Result<T, RulesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_implemented_is_distinguishable() {
        let err = RulesError::NotImplemented("multi-power slots");
        assert!(err.is_not_implemented());
        assert_eq!(err.severity().as_str(), "not-implemented");

        let err = RulesError::FractionalAdder(1.5);
        assert!(!err.is_not_implemented());
        assert!(err.severity().is_validation());
        assert_eq!(err.error_code(), "fractional_adder");
    }
}
