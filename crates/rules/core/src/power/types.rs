//! Power types: the standard catalog and user-defined custom types.

use crate::cost::CostStructure;
use crate::error::{RulesError, RulesResult};

bitflags::bitflags! {
    /// Categories a power belongs to; each one requires its own payload.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PowerCategories: u8 {
        const ATTACK = 1 << 0;
        const MOVEMENT = 1 << 1;
    }
}

/// Effects from the 6th-edition power list.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum StandardPower {
    Absorption,
    Aid,
    Barrier,
    Blast,
    #[strum(to_string = "Cannot Be Stunned")]
    CannotBeStunned,
    #[strum(to_string = "Change Environment")]
    ChangeEnvironment,
    Clairsentience,
    Clinging,
    #[strum(to_string = "Damage Negation")]
    DamageNegation,
    #[strum(to_string = "Damage Reduction")]
    DamageReduction,
    Darkness,
    Deflection,
    #[strum(to_string = "Density Increase")]
    DensityIncrease,
    Desolidification,
    Dispel,
    #[strum(to_string = "Does Not Bleed")]
    DoesNotBleed,
    Drain,
    Duplication,
    #[strum(to_string = "Endurance Reserve")]
    EnduranceReserve,
    #[strum(to_string = "Enhanced Senses")]
    EnhancedSenses,
    Entangle,
    #[strum(to_string = "Extra Limbs")]
    ExtraLimbs,
    #[strum(to_string = "Extra-Dimensional Movement")]
    ExtraDimensionalMovement,
    #[strum(to_string = "Faster-Than-Light Travel")]
    FasterThanLightTravel,
    Flash,
    #[strum(to_string = "Flash Defense")]
    FlashDefense,
    Flight,
    Growth,
    #[strum(to_string = "Hand-To-Hand Attack")]
    HandToHandAttack,
    Healing,
    Images,
    Invisibility,
    #[strum(to_string = "Killing Attack - Hand-To-Hand")]
    KillingAttackHandToHand,
    #[strum(to_string = "Killing Attack - Ranged")]
    KillingAttackRanged,
    #[strum(to_string = "Knockback Resistance")]
    KnockbackResistance,
    #[strum(to_string = "Lack Of Weakness")]
    LackOfWeakness,
    Leaping,
    #[strum(to_string = "Life Support")]
    LifeSupport,
    Luck,
    #[strum(to_string = "Mental Blast")]
    MentalBlast,
    #[strum(to_string = "Mental Defense")]
    MentalDefense,
    #[strum(to_string = "Mental Illusions")]
    MentalIllusions,
    #[strum(to_string = "Mind Control")]
    MindControl,
    #[strum(to_string = "Mind Link")]
    MindLink,
    #[strum(to_string = "Mind Scan")]
    MindScan,
    Multiform,
    #[strum(to_string = "No Hit Locations")]
    NoHitLocations,
    #[strum(to_string = "Power Defense")]
    PowerDefense,
    Reflection,
    Regeneration,
    #[strum(to_string = "Resistant Protection")]
    ResistantProtection,
    Running,
    #[strum(to_string = "Shape Shift")]
    ShapeShift,
    Shrinking,
    Stretching,
    Summon,
    Suppress,
    Swimming,
    Swinging,
    #[strum(to_string = "Takes No STUN")]
    TakesNoStun,
    Telekinesis,
    Telepathy,
    Teleportation,
    Transform,
    Tunneling,
}

/// Catalog entry for a standard power.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StandardPowerDef {
    pub categories: PowerCategories,
    pub cost: CostStructure,
}

impl StandardPowerDef {
    const fn fixed(cost: f64) -> Self {
        Self {
            categories: PowerCategories::empty(),
            cost: CostStructure::Fixed(cost),
        }
    }

    const fn per_die(cost: f64) -> Self {
        Self {
            categories: PowerCategories::ATTACK,
            cost: CostStructure::PerDie(cost),
        }
    }

    const fn per_meter(cost: f64) -> Self {
        Self {
            categories: PowerCategories::MOVEMENT,
            cost: CostStructure::PerMeter(cost),
        }
    }

    const fn fixed_movement(cost: f64) -> Self {
        Self {
            categories: PowerCategories::MOVEMENT,
            cost: CostStructure::Fixed(cost),
        }
    }
}

impl StandardPower {
    /// Look up a power by its catalog name, ignoring case.
    pub fn parse(name: &str) -> RulesResult<Self> {
        name.parse()
            .map_err(|_| RulesError::UnknownPower(name.to_string()))
    }

    /// Categories and cost structure from the catalog.
    ///
    /// Powers whose cost depends on levels the engine does not model carry
    /// their base cost (often 0) and are priced through a cost override.
    pub const fn def(self) -> StandardPowerDef {
        use StandardPowerDef as D;
        match self {
            Self::Aid => D::per_die(6.0),
            Self::Blast => D::per_die(5.0),
            Self::Dispel => D::per_die(3.0),
            Self::Drain => D::per_die(10.0),
            Self::Entangle => D::per_die(10.0),
            Self::Flash => D::per_die(5.0),
            Self::HandToHandAttack => D::per_die(5.0),
            Self::Healing => D::per_die(10.0),
            Self::KillingAttackHandToHand => D::per_die(15.0),
            Self::KillingAttackRanged => D::per_die(15.0),
            Self::MentalBlast => D::per_die(10.0),
            Self::MentalIllusions => D::per_die(5.0),
            Self::MindControl => D::per_die(5.0),
            Self::MindScan => D::per_die(5.0),
            Self::Suppress => D::per_die(5.0),
            Self::Telekinesis => D::per_die(7.5),
            Self::Telepathy => D::per_die(5.0),
            Self::Transform => D::per_die(15.0),

            Self::Flight => D::per_meter(1.0),
            Self::Leaping => D::per_meter(0.5),
            Self::Running => D::per_meter(1.0),
            Self::Swimming => D::per_meter(0.5),
            Self::Swinging => D::per_meter(0.5),
            Self::Teleportation => D::per_meter(1.0),
            Self::Tunneling => D::per_meter(1.0),
            Self::ExtraDimensionalMovement => D::fixed_movement(20.0),
            Self::FasterThanLightTravel => D::fixed_movement(10.0),

            Self::CannotBeStunned => D::fixed(15.0),
            Self::Clairsentience => D::fixed(20.0),
            Self::Clinging => D::fixed(10.0),
            Self::DamageReduction => D::fixed(15.0),
            Self::Deflection => D::fixed(20.0),
            Self::Desolidification => D::fixed(40.0),
            Self::DoesNotBleed => D::fixed(15.0),
            Self::ExtraLimbs => D::fixed(5.0),
            Self::Images => D::fixed(10.0),
            Self::Invisibility => D::fixed(20.0),
            Self::MindLink => D::fixed(5.0),
            Self::NoHitLocations => D::fixed(10.0),
            Self::Regeneration => D::fixed(10.0),
            Self::ShapeShift => D::fixed(8.0),
            Self::TakesNoStun => D::fixed(60.0),

            Self::Absorption
            | Self::Barrier
            | Self::ChangeEnvironment
            | Self::DamageNegation
            | Self::Darkness
            | Self::DensityIncrease
            | Self::Duplication
            | Self::EnduranceReserve
            | Self::EnhancedSenses
            | Self::FlashDefense
            | Self::Growth
            | Self::KnockbackResistance
            | Self::LackOfWeakness
            | Self::LifeSupport
            | Self::Luck
            | Self::MentalDefense
            | Self::Multiform
            | Self::PowerDefense
            | Self::Reflection
            | Self::ResistantProtection
            | Self::Shrinking
            | Self::Stretching
            | Self::Summon => D::fixed(0.0),
        }
    }
}

/// A user-defined power type with explicit categories.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomPowerType {
    pub name: String,
    pub categories: PowerCategories,
    pub cost: CostStructure,
}

impl CustomPowerType {
    /// Custom type priced only through cost overrides.
    pub fn new(name: impl Into<String>, categories: PowerCategories) -> Self {
        Self {
            name: name.into(),
            categories,
            cost: CostStructure::Fixed(0.0),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: CostStructure) -> Self {
        self.cost = cost;
        self
    }
}

/// What kind of effect a power is.
#[derive(Clone, Debug, PartialEq)]
pub enum PowerType {
    Standard(StandardPower),
    Custom(CustomPowerType),
}

impl PowerType {
    pub fn name(&self) -> String {
        match self {
            Self::Standard(power) => power.to_string(),
            Self::Custom(custom) => custom.name.clone(),
        }
    }

    pub fn is_standard(&self) -> bool {
        matches!(self, Self::Standard(_))
    }

    pub fn categories(&self) -> PowerCategories {
        match self {
            Self::Standard(power) => power.def().categories,
            Self::Custom(custom) => custom.categories,
        }
    }

    pub fn cost_structure(&self) -> CostStructure {
        match self {
            Self::Standard(power) => power.def().cost,
            Self::Custom(custom) => custom.cost,
        }
    }
}

impl From<StandardPower> for PowerType {
    fn from(power: StandardPower) -> Self {
        Self::Standard(power)
    }
}

impl From<CustomPowerType> for PowerType {
    fn from(custom: CustomPowerType) -> Self {
        Self::Custom(custom)
    }
}
