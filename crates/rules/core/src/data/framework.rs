//! Inbound framework documents.

use std::collections::BTreeMap;

use super::power::ModifierData;
use crate::config::RulesConfig;
use crate::error::{RulesError, RulesResult};
use crate::framework::{Framework, Multipower, Slot, Vpp};
use crate::modifiers::{FrameworkModifier, FrameworkModifierScope, ModifierKind};
use crate::power::Power;

/// The framework part of an item document: `{ "framework": { ... } }`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrameworkItemData {
    pub id: Option<String>,
    pub name: String,
    pub framework: FrameworkData,
}

/// A Multipower carries `reserve`; a VPP carries `control` and `pool`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrameworkData {
    pub reserve: Option<f64>,
    pub control: Option<f64>,
    pub pool: Option<f64>,
    pub modifiers: BTreeMap<String, FrameworkModifierData>,
    pub slots: BTreeMap<String, SlotData>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameworkModifierData {
    #[cfg_attr(feature = "serde", serde(default))]
    pub scope: FrameworkModifierScope,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ModifierKind,
    pub modifier: ModifierData,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SlotData {
    /// Ids of the member powers. Exactly one is supported.
    pub powers: Vec<String>,
    pub active: bool,
    /// Absent means the framework's usual kind: fixed in a Multipower,
    /// variable in a VPP.
    pub fixed: Option<bool>,
    pub allocated_cost: Option<f64>,
    pub full_cost: Option<f64>,
}

/// Whole, non-negative points.
fn points(field: &'static str, value: f64) -> RulesResult<u32> {
    if !value.is_finite() || value < 0.0 {
        return Err(RulesError::NegativeValue { field, value });
    }
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(RulesError::FractionalPoints { field, value });
    }
    Ok(value as u32)
}

fn required(field: &'static str, value: Option<f64>) -> RulesResult<u32> {
    points(field, value.ok_or(RulesError::MissingField(field))?)
}

impl SlotData {
    /// Resolve the slot's single power among `powers` by id.
    pub fn to_slot(&self, id: &str, powers: &[Power], default_fixed: bool) -> RulesResult<Slot> {
        let power_id = match self.powers.as_slice() {
            [] => return Err(RulesError::EmptySlot(id.to_string())),
            [power_id] => power_id,
            _ => return Err(RulesError::NotImplemented("slots holding several powers")),
        };
        let power = powers
            .iter()
            .find(|power| power.id() == Some(power_id.as_str()))
            .cloned()
            .ok_or_else(|| RulesError::MissingPower {
                slot: id.to_string(),
                power: power_id.clone(),
            })?;

        let slot = if self.fixed.unwrap_or(default_fixed) {
            Slot::fixed(id, power, self.active)
        } else {
            let allocated = match self.allocated_cost {
                Some(cost) => points("allocatedCost", cost)?,
                None => 0,
            };
            Slot::variable(id, power, allocated)
        };
        Ok(match self.full_cost {
            Some(cost) => slot.with_full_cost(points("fullCost", cost)?),
            None => slot,
        })
    }
}

impl FrameworkData {
    pub fn framework_modifiers(&self) -> RulesResult<Vec<FrameworkModifier>> {
        self.modifiers
            .iter()
            .map(|(id, data)| {
                let modifier = data.modifier.to_modifier(data.kind, id)?;
                Ok(FrameworkModifier::new(modifier, data.scope))
            })
            .collect()
    }

    fn slots(&self, powers: &[Power], default_fixed: bool) -> RulesResult<Vec<Slot>> {
        self.slots
            .iter()
            .map(|(id, slot)| slot.to_slot(id, powers, default_fixed))
            .collect()
    }
}

impl Multipower {
    pub fn from_data(
        data: &FrameworkData,
        powers: &[Power],
        config: &RulesConfig,
    ) -> RulesResult<Self> {
        Self::new(
            required("reserve", data.reserve)?,
            data.framework_modifiers()?,
            data.slots(powers, true)?,
            config,
        )
    }
}

impl Vpp {
    pub fn from_data(
        data: &FrameworkData,
        powers: &[Power],
        config: &RulesConfig,
    ) -> RulesResult<Self> {
        Self::new(
            required("control", data.control)?,
            required("pool", data.pool)?,
            data.framework_modifiers()?,
            data.slots(powers, false)?,
            config,
        )
    }
}

impl Framework {
    /// A Multipower when the document carries a reserve, otherwise a VPP.
    pub fn from_data(
        data: &FrameworkData,
        powers: &[Power],
        config: &RulesConfig,
    ) -> RulesResult<Self> {
        if data.reserve.is_some() {
            Multipower::from_data(data, powers, config).map(Self::from)
        } else {
            Vpp::from_data(data, powers, config).map(Self::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{FrameworkKind, SlotKind, WarningKind};
    use crate::power::StandardPower;

    fn powers() -> Vec<Power> {
        [("p1", 60.0), ("p2", 10.0)]
            .into_iter()
            .map(|(id, cost)| {
                Power::builder(id, StandardPower::Clinging)
                    .id(id)
                    .cost_override(cost)
                    .build()
                    .unwrap()
            })
            .collect()
    }

    fn slot(power: &str, active: bool) -> SlotData {
        SlotData {
            powers: vec![power.into()],
            active,
            ..SlotData::default()
        }
    }

    #[test]
    fn multipower_from_data() {
        let data = FrameworkData {
            reserve: Some(60.0),
            slots: BTreeMap::from([("s1".into(), slot("p1", true)), ("s2".into(), slot("p2", true))]),
            ..FrameworkData::default()
        };
        let framework = Framework::from_data(&data, &powers(), &RulesConfig::default()).unwrap();
        assert_eq!(framework.kind(), FrameworkKind::Multipower);
        assert_eq!(framework.slots()[0].kind(), SlotKind::Fixed);
        assert_eq!(framework.warnings()[0].kind, WarningKind::ReserveExceeded);
    }

    #[test]
    fn vpp_from_data_defaults_to_variable_slots() {
        let mut variable = slot("p2", false);
        variable.allocated_cost = Some(5.0);
        let data = FrameworkData {
            control: Some(30.0),
            pool: Some(20.0),
            slots: BTreeMap::from([("s1".into(), variable)]),
            ..FrameworkData::default()
        };
        let vpp = Vpp::from_data(&data, &powers(), &RulesConfig::default()).unwrap();
        let slot = &vpp.slots()[0];
        assert_eq!(slot.kind(), SlotKind::Variable);
        assert_eq!(slot.allocated_cost(), 5);
        assert!(vpp.warnings().is_empty());
    }

    #[test]
    fn slot_errors() {
        let powers = powers();
        assert_eq!(
            SlotData::default().to_slot("s1", &powers, true),
            Err(RulesError::EmptySlot("s1".into()))
        );
        assert_eq!(
            slot("nope", true).to_slot("s1", &powers, true),
            Err(RulesError::MissingPower {
                slot: "s1".into(),
                power: "nope".into(),
            })
        );

        let mut crowded = slot("p1", true);
        crowded.powers.push("p2".into());
        let err = crowded.to_slot("s1", &powers, true).unwrap_err();
        assert!(err.is_not_implemented());
    }

    #[test]
    fn budgets_must_be_whole_and_present() {
        let data = FrameworkData {
            control: Some(30.0),
            ..FrameworkData::default()
        };
        assert_eq!(
            Vpp::from_data(&data, &[], &RulesConfig::default()),
            Err(RulesError::MissingField("pool"))
        );

        let data = FrameworkData {
            reserve: Some(-5.0),
            ..FrameworkData::default()
        };
        assert!(matches!(
            Multipower::from_data(&data, &[], &RulesConfig::default()),
            Err(RulesError::NegativeValue { field: "reserve", .. })
        ));

        assert_eq!(
            points("fullCost", 2.5),
            Err(RulesError::FractionalPoints {
                field: "fullCost",
                value: 2.5,
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_framework_documents() {
        let json = r#"{
            "name": "Gadget Pool",
            "framework": {
                "control": 30,
                "pool": 40,
                "modifiers": {
                    "m1": {
                        "scope": "slots-only",
                        "type": "limitation",
                        "modifier": { "name": "Focus", "value": -0.5 }
                    }
                },
                "slots": {
                    "s1": { "powers": ["p2"], "allocatedCost": 10 }
                }
            }
        }"#;
        let item: FrameworkItemData = serde_json::from_str(json).unwrap();
        let framework =
            Framework::from_data(&item.framework, &powers(), &RulesConfig::default()).unwrap();
        assert_eq!(framework.kind(), FrameworkKind::Vpp);
        let slotted = framework.slots()[0].power();
        assert_eq!(slotted.limitations()[0].name(), "Focus");
        // 10 active, 10 / 1.5 = 6.67 real
        assert_eq!(framework.slot_cost(&framework.slots()[0]), 7);
    }
}
