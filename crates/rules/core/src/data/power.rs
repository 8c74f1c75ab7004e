//! Inbound power documents.

use std::collections::BTreeMap;

use crate::combat::{CombatValues, DamageType, Defense, DefensiveValue, OffensiveValue};
use crate::cost::CostStructure;
use crate::dice::Damage;
use crate::error::{RulesError, RulesResult};
use crate::modifiers::{ModifierKind, PowerModifier};
use crate::power::{
    Attack, CustomPowerType, MovementMode, Power, PowerCategories, PowerType, StandardPower,
};

/// A power as stored by the item collaborator.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PowerData {
    pub id: Option<String>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub power_type: PowerTypeData,
    pub categories: CategoryFlags,
    pub attack: Option<AttackData>,
    pub movement: Option<MovementData>,
    pub adders: BTreeMap<String, ModifierData>,
    pub advantages: BTreeMap<String, ModifierData>,
    pub limitations: BTreeMap<String, ModifierData>,
    pub cost_override: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PowerTypeData {
    pub is_standard: bool,
    pub name: String,
}

/// Category switches; a custom power's categories come from here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CategoryFlags {
    pub attack: bool,
    pub movement: bool,
}

impl CategoryFlags {
    pub fn flags(self) -> PowerCategories {
        let mut flags = PowerCategories::empty();
        flags.set(PowerCategories::ATTACK, self.attack);
        flags.set(PowerCategories::MOVEMENT, self.movement);
        flags
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttackData {
    pub cv: CvData,
    pub damage: DamageData,
    pub defense: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CvData {
    pub offensive: String,
    pub defensive: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DamageData {
    /// Conventional decimal dice value (`3.5` is 3½d6, `3.9` is 4d6-1).
    pub dice: f64,
    /// Falls back to the power type's per-die cost when absent.
    pub ap_per_die: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub damage_type: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementData {
    pub distance: DistanceData,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DistanceData {
    pub value: f64,
    pub modifier: f64,
}

/// One adder, advantage or limitation; which one is decided by the map it
/// sits in.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ModifierData {
    pub name: String,
    pub value: f64,
    pub summary: String,
    pub description: String,
    pub increases_damage: bool,
}

impl ModifierData {
    /// The modifier stored under `id` as a `kind`.
    pub fn to_modifier(&self, kind: ModifierKind, id: &str) -> RulesResult<PowerModifier> {
        Ok(PowerModifier::new(kind, self.name.as_str(), self.value)?
            .with_id(id)
            .with_summary(self.summary.as_str())
            .with_description(self.description.as_str())
            .with_increases_damage(self.increases_damage))
    }
}

/// Parse an enum field, empty meaning the default.
fn parse_or_default<T>(kind: &'static str, value: &str) -> RulesResult<T>
where
    T: std::str::FromStr + Default,
{
    if value.is_empty() {
        return Ok(T::default());
    }
    value.parse().map_err(|_| RulesError::UnknownValue {
        kind,
        value: value.to_string(),
    })
}

impl AttackData {
    /// `default_ap_per_die` is used when the damage carries none.
    pub fn to_attack(&self, default_ap_per_die: f64) -> RulesResult<Attack> {
        let ap_per_die = self.damage.ap_per_die.unwrap_or(default_ap_per_die);
        let damage = Damage::from_dice(self.damage.dice, ap_per_die)?;
        let cv = CombatValues {
            offensive: parse_or_default::<OffensiveValue>("offensive value", &self.cv.offensive)?,
            defensive: parse_or_default::<DefensiveValue>("defensive value", &self.cv.defensive)?,
        };
        Ok(Attack::new(damage)
            .with_cv(cv)
            .with_damage_type(parse_or_default::<DamageType>(
                "damage type",
                &self.damage.damage_type,
            )?)
            .with_defense(parse_or_default::<Defense>("defense", &self.defense)?))
    }
}

impl MovementData {
    pub fn to_movement(&self) -> RulesResult<MovementMode> {
        if !self.distance.value.is_finite() || self.distance.value < 0.0 {
            return Err(RulesError::NegativeValue {
                field: "movement.distance.value",
                value: self.distance.value,
            });
        }
        Ok(MovementMode::new(self.distance.value).with_modifier(self.distance.modifier))
    }
}

const DEFAULT_AP_PER_DIE: f64 = 5.0;

impl PowerData {
    /// Build the power; custom types are priced through overrides only.
    pub fn to_power(&self) -> RulesResult<Power> {
        self.to_power_with(&[])
    }

    /// Build the power, resolving custom types against `custom_types` by name
    /// (ignoring case) before falling back to the document's own categories.
    pub fn to_power_with(&self, custom_types: &[CustomPowerType]) -> RulesResult<Power> {
        let power_type = self.resolve_type(custom_types)?;
        let declared = power_type.categories();
        let wanted = declared | self.categories.flags();
        let default_ap_per_die = match power_type.cost_structure() {
            CostStructure::PerDie(cost) => cost,
            _ => DEFAULT_AP_PER_DIE,
        };

        let mut builder = Power::builder(self.name.as_str(), power_type);
        if let Some(id) = &self.id {
            builder = builder.id(id.as_str());
        }

        if wanted.contains(PowerCategories::ATTACK) {
            let attack = self.attack.as_ref().ok_or_else(|| RulesError::MissingCategoryData {
                power: self.name.clone(),
                category: PowerCategories::ATTACK,
            })?;
            builder = builder.attack(attack.to_attack(default_ap_per_die)?);
        }
        if wanted.contains(PowerCategories::MOVEMENT) {
            let movement = self.movement.as_ref().ok_or_else(|| RulesError::MissingCategoryData {
                power: self.name.clone(),
                category: PowerCategories::MOVEMENT,
            })?;
            builder = builder.movement(movement.to_movement()?);
        }

        for (id, adder) in &self.adders {
            builder = builder.adder(adder.to_modifier(ModifierKind::Adder, id)?);
        }
        for (id, advantage) in &self.advantages {
            builder = builder.advantage(advantage.to_modifier(ModifierKind::Advantage, id)?);
        }
        for (id, limitation) in &self.limitations {
            builder = builder.limitation(limitation.to_modifier(ModifierKind::Limitation, id)?);
        }

        if let Some(cost) = self.cost_override {
            builder = builder.cost_override(cost);
        }
        builder.build()
    }

    fn resolve_type(&self, custom_types: &[CustomPowerType]) -> RulesResult<PowerType> {
        let name = self.power_type.name.as_str();
        if self.power_type.is_standard {
            return StandardPower::parse(name).map(PowerType::from);
        }
        let custom = custom_types
            .iter()
            .find(|custom| custom.name.eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| CustomPowerType::new(name, self.categories.flags()));
        Ok(custom.into())
    }
}

impl Power {
    pub fn from_data(data: &PowerData) -> RulesResult<Self> {
        data.to_power()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Adjustment;

    fn blast_data() -> PowerData {
        PowerData {
            id: Some("p1".into()),
            name: "Force Bolt".into(),
            power_type: PowerTypeData {
                is_standard: true,
                name: "Blast".into(),
            },
            categories: CategoryFlags {
                attack: true,
                movement: false,
            },
            attack: Some(AttackData {
                cv: CvData {
                    offensive: "ocv".into(),
                    defensive: "dcv".into(),
                },
                damage: DamageData {
                    dice: 8.5,
                    ap_per_die: None,
                    damage_type: "normal".into(),
                },
                defense: "ed".into(),
            }),
            ..PowerData::default()
        }
    }

    #[test]
    fn standard_attack_power() {
        let mut data = blast_data();
        data.limitations.insert(
            "l1".into(),
            ModifierData {
                name: "Focus".into(),
                value: 0.5,
                ..ModifierData::default()
            },
        );

        let power = Power::from_data(&data).unwrap();
        let attack = power.attack().unwrap();
        assert_eq!(attack.damage.adjustment(), Adjustment::PlusHalfDie);
        assert_eq!(attack.damage.ap_per_die(), 5.0);
        assert_eq!(attack.defense, Defense::Ed);
        assert_eq!(power.limitations()[0].id(), Some("l1"));
        assert_eq!(power.limitations()[0].value(), -0.5);
        // 8½d6 = 8.5 DC = 42.5 → 42
        assert_eq!(power.active_cost(), 42);
        assert_eq!(power.real_cost(), 28);
    }

    #[test]
    fn missing_attack_payload() {
        let mut data = blast_data();
        data.attack = None;
        assert!(matches!(
            Power::from_data(&data),
            Err(RulesError::MissingCategoryData { .. })
        ));
    }

    #[test]
    fn unknown_values_are_rejected() {
        let mut data = blast_data();
        data.power_type.name = "Blastt".into();
        assert_eq!(
            Power::from_data(&data),
            Err(RulesError::UnknownPower("Blastt".into()))
        );

        let mut data = blast_data();
        if let Some(attack) = data.attack.as_mut() {
            attack.defense = "armor".into();
        }
        assert!(matches!(
            Power::from_data(&data),
            Err(RulesError::UnknownValue { kind: "defense", .. })
        ));
    }

    #[test]
    fn fractional_adders_fail() {
        let mut data = blast_data();
        data.adders.insert(
            "a1".into(),
            ModifierData {
                name: "Odd".into(),
                value: 1.5,
                ..ModifierData::default()
            },
        );
        assert_eq!(
            Power::from_data(&data),
            Err(RulesError::FractionalAdder(1.5))
        );
    }

    #[test]
    fn custom_types_resolve_from_catalog() {
        let data = PowerData {
            name: "Mana Bolt".into(),
            power_type: PowerTypeData {
                is_standard: false,
                name: "Mana Bolt".into(),
            },
            categories: CategoryFlags {
                attack: true,
                movement: false,
            },
            attack: Some(AttackData {
                damage: DamageData {
                    dice: 4.0,
                    ..DamageData::default()
                },
                ..AttackData::default()
            }),
            ..PowerData::default()
        };

        let uncatalogued = data.to_power().unwrap();
        assert_eq!(uncatalogued.base_cost(), 0.0);

        let catalog = [CustomPowerType::new("mana bolt", PowerCategories::ATTACK)
            .with_cost(CostStructure::PerDie(10.0))];
        let catalogued = data.to_power_with(&catalog).unwrap();
        // 10 AP per die: 4 dice = 8 DC
        assert_eq!(catalogued.attack().unwrap().damage.ap_per_die(), 10.0);
        assert_eq!(catalogued.base_cost(), 40.0);
    }

    #[test]
    fn movement_power() {
        let data = PowerData {
            name: "Jets".into(),
            power_type: PowerTypeData {
                is_standard: true,
                name: "flight".into(),
            },
            movement: Some(MovementData {
                distance: DistanceData {
                    value: 20.0,
                    modifier: -4.0,
                },
            }),
            ..PowerData::default()
        };
        let power = data.to_power().unwrap();
        assert_eq!(power.movement().unwrap().total_distance(), 16.0);
        assert_eq!(power.base_cost(), 20.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_camel_case_documents() {
        let json = r#"{
            "id": "tk",
            "name": "Telekinesis",
            "type": { "isStandard": true, "name": "Telekinesis" },
            "categories": { "attack": true },
            "attack": {
                "cv": { "offensive": "ocv", "defensive": "dcv" },
                "damage": { "dice": 6, "apPerDie": 7.5, "type": "normal" },
                "defense": "pd"
            },
            "advantages": {
                "a1": { "name": "Fine Manipulation", "value": 0.5 }
            },
            "costOverride": 45
        }"#;
        let data: PowerData = serde_json::from_str(json).unwrap();
        assert_eq!(data.cost_override, Some(45.0));
        let power = data.to_power().unwrap();
        assert_eq!(power.active_cost(), 67);
    }
}
