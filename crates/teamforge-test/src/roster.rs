//! Sample unit roster.
//!
//! Ids are stable so tests can refer to units by constant.

use teamforge_core::{Affinity, Role, Unit, UnitId, UnitRegistry};

pub const BLAZE: UnitId = UnitId(1);
pub const FROSTBITE: UnitId = UnitId(2);
pub const AEGIS: UnitId = UnitId(3);
pub const GLACIER: UnitId = UnitId(4);
pub const ZEPHYR: UnitId = UnitId(5);
pub const SPARK: UnitId = UnitId(6);
/// The only catalyst in the roster.
pub const CIPHER: UnitId = UnitId(7);
pub const VOID: UnitId = UnitId(8);
pub const BULWARK: UnitId = UnitId(9);
pub const MENDER: UnitId = UnitId(10);

/// Every sample unit.
pub fn sample_units() -> Vec<Unit> {
    vec![
        Unit::new(BLAZE.0, "Blaze", Role::Damage, Affinity::Fire),
        Unit::new(FROSTBITE.0, "Frostbite", Role::Damage, Affinity::Ice),
        Unit::new(AEGIS.0, "Aegis", Role::Survival, Affinity::Fire),
        Unit::new(GLACIER.0, "Glacier", Role::Survival, Affinity::Ice),
        Unit::new(ZEPHYR.0, "Zephyr", Role::Support, Affinity::Wind),
        Unit::new(SPARK.0, "Spark", Role::Support, Affinity::Lightning),
        Unit::new(CIPHER.0, "Cipher", Role::Support, Affinity::Quantum).with_catalyst(),
        Unit::new(VOID.0, "Void", Role::Damage, Affinity::Imaginary),
        Unit::new(BULWARK.0, "Bulwark", Role::Survival, Affinity::Physical),
        Unit::new(MENDER.0, "Mender", Role::Support, Affinity::Imaginary),
    ]
}

/// Registry holding [`sample_units`].
pub fn sample_registry() -> UnitRegistry {
    sample_units().into_iter().collect()
}

/// Looks up a sample unit by id.
///
/// # Panics
/// Panics if the id is not part of the roster.
pub fn unit(id: UnitId) -> Unit {
    sample_units()
        .into_iter()
        .find(|u| u.id == id)
        .unwrap_or_else(|| panic!("unit {} is not in the sample roster", id))
}
