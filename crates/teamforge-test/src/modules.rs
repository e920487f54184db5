//! Module and node requirement builders.

use teamforge_core::{
    Affinity, AffinitySet, Module, ModuleItem, RoleOverride, SlotPreference, UnitId,
};

use crate::roster::unit;

/// Builds a module from roster ids with automatic roles and slots.
///
/// # Panics
/// Panics if an id is unknown or the module is invalid.
pub fn module(name: &str, ids: &[UnitId]) -> Module {
    let items = ids.iter().map(|id| ModuleItem::auto(unit(*id))).collect();
    Module::new(name, items).unwrap_or_else(|e| panic!("invalid fixture module: {}", e))
}

/// Builds a module whose items carry explicit slot preferences.
pub fn module_with_slots(name: &str, ids: &[(UnitId, SlotPreference)]) -> Module {
    let items = ids
        .iter()
        .map(|(id, slot)| ModuleItem::new(unit(*id), RoleOverride::Auto, *slot))
        .collect();
    Module::new(name, items).unwrap_or_else(|e| panic!("invalid fixture module: {}", e))
}

/// A module holding one unit, named after it.
pub fn single(id: UnitId) -> Module {
    let u = unit(id);
    let name = u.name.clone();
    Module::new(name, vec![ModuleItem::auto(u)])
        .unwrap_or_else(|e| panic!("invalid fixture module: {}", e))
}

/// Node requirements, one affinity list per node.
pub fn requirements(nodes: &[&[Affinity]]) -> Vec<AffinitySet> {
    nodes
        .iter()
        .map(|affinities| affinities.iter().copied().collect())
        .collect()
}
