//! Budget warnings raised by frameworks.

use std::fmt;

/// What budget rule a framework or slot breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum WarningKind {
    /// Multipower slots allocate more than the reserve.
    #[strum(to_string = "too many points allocated")]
    ReserveExceeded,
    /// VPP slots allocate more real points than the pool.
    #[strum(to_string = "too many real points allocated from pool")]
    PoolExceeded,
    /// A slot allocates more than its own full cost.
    #[strum(to_string = "more points allocated than the slot's full cost")]
    SlotOverAllocated,
    /// A Multipower slot's full cost is larger than the reserve.
    #[strum(to_string = "too big for reserve")]
    TooBigForReserve,
    /// A VPP slot's full cost is larger than the control.
    #[strum(to_string = "too big for control")]
    TooBigForControl,
}

/// Where a warning applies.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "scope", content = "slot", rename_all = "camelCase"))]
pub enum WarningScope {
    Framework,
    /// The slot with this id.
    Slot(String),
}

impl WarningScope {
    pub fn slot_id(&self) -> Option<&str> {
        match self {
            Self::Framework => None,
            Self::Slot(id) => Some(id),
        }
    }
}

/// A legal but over-budget allocation, reported for the user to fix.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warning {
    pub kind: WarningKind,
    pub scope: WarningScope,
    pub message: String,
}

impl Warning {
    pub fn framework(kind: WarningKind, used: i64, limit: i64) -> Self {
        Self {
            kind,
            scope: WarningScope::Framework,
            message: format!("{kind} ({used} of {limit})"),
        }
    }

    pub fn slot(kind: WarningKind, slot_id: &str, used: i64, limit: i64) -> Self {
        Self {
            kind,
            scope: WarningScope::Slot(slot_id.to_string()),
            message: format!("{kind} ({used} of {limit})"),
        }
    }

    pub fn is_framework(&self) -> bool {
        self.scope == WarningScope::Framework
    }

    /// True when this warning belongs to the slot `slot_id`.
    pub fn is_for_slot(&self, slot_id: &str) -> bool {
        self.scope.slot_id() == Some(slot_id)
    }

    pub(crate) fn log(&self, framework: &'static str) {
        tracing::debug!(
            framework,
            kind = %self.kind,
            slot = self.scope.slot_id(),
            "{}",
            self.message
        );
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            WarningScope::Framework => f.write_str(&self.message),
            WarningScope::Slot(id) => write!(f, "slot {id}: {}", self.message),
        }
    }
}
