//! Unit registry.
//!
//! The registry is filled by an external loader and only read by the
//! engine. It is the single place module items are resolved from.

use std::collections::HashMap;

use crate::error::{Result, TeamForgeError};
use crate::module::{ModuleItem, RoleOverride, SlotPreference};
use crate::unit::{Unit, UnitId};

/// Static per-unit metadata keyed by id.
///
/// # Examples
///
/// ```
/// use teamforge_core::{Affinity, Role, RoleOverride, SlotPreference, Unit, UnitId, UnitRegistry};
///
/// let mut registry = UnitRegistry::new();
/// registry.register(Unit::new(1, "Blaze", Role::Damage, Affinity::Fire)).unwrap();
///
/// let item = registry.item(UnitId(1), RoleOverride::Auto, SlotPreference::First).unwrap();
/// assert_eq!(item.unit.name, "Blaze");
/// assert!(registry.item(UnitId(2), RoleOverride::Auto, SlotPreference::Auto).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: HashMap<UnitId, Unit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a unit. Ids must be unique.
    pub fn register(&mut self, unit: Unit) -> Result<()> {
        if self.units.contains_key(&unit.id) {
            return Err(TeamForgeError::DuplicateRegistration(unit.id));
        }
        self.units.insert(unit.id, unit);
        Ok(())
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Builds a module item for a registered unit.
    pub fn item(
        &self,
        id: UnitId,
        role_override: RoleOverride,
        slot: SlotPreference,
    ) -> Result<ModuleItem> {
        let unit = self.get(id).ok_or(TeamForgeError::UnknownUnit(id))?;
        Ok(ModuleItem::new(unit.clone(), role_override, slot))
    }

    /// Builds an item with automatic role and slot.
    pub fn auto_item(&self, id: UnitId) -> Result<ModuleItem> {
        self.item(id, RoleOverride::Auto, SlotPreference::Auto)
    }

    /// Iterates registered units in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }
}

impl FromIterator<Unit> for UnitRegistry {
    /// Later duplicates replace earlier ones.
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().map(|u| (u.id, u)).collect(),
        }
    }
}
