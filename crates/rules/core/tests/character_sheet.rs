use hero_core::characteristics::{Characteristic, CharacteristicValue, DerivedValue};
use hero_core::{
    Adjustment, Attack, Damage, Framework, FrameworkModifier, FrameworkModifierScope,
    Multipower, Power, PowerModifier, RulesConfig, Slot, StandardPower, Vpp, WarningKind,
    WarningScope, attack_roll_target,
};

fn blast(name: &str, dice: u32) -> Power {
    Power::builder(name, StandardPower::Blast)
        .id(name)
        .attack(Attack::new(
            Damage::new(dice, 5.0, Adjustment::None).expect("valid dice"),
        ))
        .build()
        .expect("blast should build")
}

fn flat(name: &str, cost: f64) -> Power {
    Power::builder(name, StandardPower::Clinging)
        .id(name)
        .cost_override(cost)
        .build()
        .expect("flat-cost power should build")
}

/// A brick with a Multipower of attacks: characteristics feed the strength
/// damage, the framework reports budget trouble without failing.
#[test]
fn brick_with_an_attack_multipower() {
    // ================================================================
    // Characteristics
    // ================================================================
    let strength = CharacteristicValue::new(Characteristic::Str, 40);
    match strength.derived("damage") {
        Some(DerivedValue::Dice(damage)) => assert_eq!(damage.dice_string(), "8d6"),
        other => panic!("unexpected STR damage {other:?}"),
    }
    assert_eq!(attack_roll_target(8, 6), 13);

    // ================================================================
    // Multipower with a 60-point reserve
    // ================================================================
    let config = RulesConfig::default();
    let modifiers = vec![FrameworkModifier::new(
        PowerModifier::limitation("Gestures", 0.25),
        FrameworkModifierScope::FrameworkAndSlots,
    )];
    let slots = vec![
        Slot::fixed("big", blast("Thunderclap", 12), true),
        Slot::variable("small", blast("Shockwave", 6), 0),
    ];
    let multipower =
        Multipower::new(60, modifiers.clone(), slots, &config).expect("multipower should build");

    assert_eq!(multipower.allocated_reserve(), 60);
    assert!(multipower.warnings().is_empty());
    // 60 / 1.25
    assert_eq!(multipower.reserve_cost(), 48);
    // real 48 / 10 and real 24 / 5 are both 4.8 → 5
    assert_eq!(multipower.total_cost(), 58);

    // ================================================================
    // The player switches the second slot on: over budget, but legal
    // ================================================================
    let slots = vec![
        Slot::fixed("big", blast("Thunderclap", 12), true),
        Slot::variable("small", blast("Shockwave", 6), 30),
    ];
    let framework: Framework = Multipower::new(60, modifiers, slots, &config)
        .expect("over budget is not an error")
        .into();

    let warnings = framework.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::ReserveExceeded);
    assert_eq!(warnings[0].scope, WarningScope::Framework);

    let display = framework.display();
    assert_eq!(display.warnings, ["too many points allocated (90 of 60)"]);
    assert_eq!(display.slots[1].power.limitations[0].name, "Gestures");
    assert_eq!(
        display.slots[1].power.limitations[0].note.as_deref(),
        Some("framework-and-slots modifier from framework")
    );
}

/// A gadgeteer's pool: only slots past control or past the pool warn.
#[test]
fn gadgeteer_with_a_variable_power_pool() {
    let config = RulesConfig::default();
    let focus = FrameworkModifier::new(
        PowerModifier::limitation("Focus", 0.5),
        FrameworkModifierScope::SlotsOnly,
    );
    let vpp = Vpp::new(
        30,
        40,
        vec![focus],
        vec![
            Slot::variable("goggles", flat("Goggles", 15.0), 15),
            Slot::variable("cannon", flat("Cannon", 35.0), 0),
        ],
        &config,
    )
    .expect("vpp should build");

    // slots-only limitation leaves the control price alone
    assert_eq!(vpp.control_cost(), 60);
    assert_eq!(vpp.total_cost(), 100);
    // goggles: 15 active, 10 real
    assert_eq!(vpp.allocated_pool(), 10);

    let warnings = vpp.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::TooBigForControl);
    assert!(warnings[0].is_for_slot("cannon"));
}

/// Damage classes survive a round trip for every table cost.
#[test]
fn damage_class_round_trips() {
    for ap_per_die in [5.0, 6.0, 10.0, 15.0] {
        for dice in 0..12 {
            for adjustment in [
                Adjustment::None,
                Adjustment::PlusPip,
                Adjustment::PlusHalfDie,
                Adjustment::MinusHalfDie,
                Adjustment::MinusPip,
            ] {
                let Ok(damage) = Damage::new(dice, ap_per_die, adjustment) else {
                    continue;
                };
                let dc = damage.dc().expect("table cost");
                let back = Damage::from_dcs(dc, ap_per_die).expect("table cost");
                assert_eq!(back.dc(), Some(dc), "{damage} at {ap_per_die} AP/die");
            }
        }
    }
}
