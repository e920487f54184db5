//! Tests for module construction and predicates.

use crate::affinity::{Affinity, AffinitySet};
use crate::error::TeamForgeError;
use crate::module::{ChallengeType, Module, ModuleItem, RoleOverride, SlotPreference};
use crate::unit::{Role, Unit, UnitId};

fn unit(id: u32, role: Role, affinity: Affinity) -> Unit {
    Unit::new(id, format!("unit-{}", id), role, affinity)
}

#[test]
fn test_empty_module_rejected() {
    let err = Module::new("empty", vec![]).unwrap_err();
    assert_eq!(
        err,
        TeamForgeError::EmptyModule {
            module: "empty".to_string()
        }
    );
}

#[test]
fn test_too_many_units_rejected() {
    let items = (1..=5)
        .map(|id| ModuleItem::auto(unit(id, Role::Support, Affinity::Wind)))
        .collect();
    let err = Module::new("crowd", items).unwrap_err();

    assert_eq!(
        err,
        TeamForgeError::TooManyUnits {
            module: "crowd".to_string(),
            count: 5
        }
    );
}

#[test]
fn test_duplicate_unit_rejected() {
    let a = unit(1, Role::Damage, Affinity::Fire);
    let err = Module::new("twins", vec![ModuleItem::auto(a.clone()), ModuleItem::auto(a)])
        .unwrap_err();

    assert_eq!(
        err,
        TeamForgeError::DuplicateUnit {
            module: "twins".to_string(),
            unit: UnitId(1)
        }
    );
}

#[test]
fn test_full_module_accepted() {
    let items = (1..=4)
        .map(|id| ModuleItem::auto(unit(id, Role::Support, Affinity::Wind)))
        .collect();
    let module = Module::new("full", items).unwrap();

    assert_eq!(module.unit_count(), 4);
    assert_eq!(
        module.unit_ids().collect::<Vec<_>>(),
        vec![UnitId(1), UnitId(2), UnitId(3), UnitId(4)]
    );
}

#[test]
fn test_role_override_wins() {
    let item = ModuleItem::new(
        unit(1, Role::Support, Affinity::Quantum),
        RoleOverride::Damage,
        SlotPreference::Auto,
    );
    assert_eq!(item.effective_role(), Role::Damage);
    assert!(item.is_damage());
    assert!(!item.is_support());

    let module = Module::new("override", vec![item]).unwrap();
    assert!(module.has_damage());
    assert!(!module.has_support());
}

#[test]
fn test_role_predicates() {
    let catalyst = unit(9, Role::Support, Affinity::Quantum).with_catalyst();
    let module = Module::new(
        "mixed",
        vec![
            ModuleItem::auto(catalyst),
            ModuleItem::auto(unit(2, Role::Survival, Affinity::Ice)),
        ],
    )
    .unwrap();

    assert!(!module.has_damage());
    assert!(module.has_catalyst());
    assert!(module.has_survival());
    assert!(module.has_support());
}

#[test]
fn test_fits_affinities() {
    let module = Module::builder("fire-only")
        .item(ModuleItem::auto(unit(1, Role::Damage, Affinity::Fire)))
        .affinities(AffinitySet::single(Affinity::Fire))
        .build()
        .unwrap();

    let ice = AffinitySet::single(Affinity::Ice);
    let fire_wind = AffinitySet::from_iter([Affinity::Fire, Affinity::Wind]);

    assert!(!module.fits_affinities(&[ice]));
    assert!(module.fits_affinities(&[ice, fire_wind]));
    assert!(!module.fits_affinities(&[]));
}

#[test]
fn test_challenge_flags() {
    let module = Module::builder("hall")
        .item(ModuleItem::auto(unit(1, Role::Damage, Affinity::Fire)))
        .disable(ChallengeType::ForgottenHall)
        .disable(ChallengeType::PureFiction)
        .enable(ChallengeType::PureFiction)
        .build()
        .unwrap();

    assert!(!module.fits_challenge(ChallengeType::ForgottenHall));
    assert!(module.fits_challenge(ChallengeType::PureFiction));
}

#[test]
fn test_slot_index() {
    assert_eq!(SlotPreference::Auto.index(), None);
    assert_eq!(SlotPreference::First.index(), Some(0));
    assert_eq!(SlotPreference::Fourth.index(), Some(3));
}

#[test]
fn test_display() {
    let module = Module::builder("duo")
        .item(ModuleItem::auto(unit(1, Role::Damage, Affinity::Fire)))
        .item(ModuleItem::auto(unit(2, Role::Survival, Affinity::Ice)))
        .build()
        .unwrap();

    assert_eq!(module.to_string(), "duo [unit-1, unit-2] affinities: all");
}
