//! TeamForge Core - Domain types for team assignment
//!
//! This crate provides the fundamental abstractions for TeamForge:
//! - Elemental affinities and affinity sets
//! - Units, roles and the unit registry
//! - Modules (reusable unit groupings) with construction-time validation
//! - Library filtering by challenge type and node requirements

pub mod affinity;
pub mod error;
pub mod library;
pub mod module;
pub mod registry;
pub mod unit;

#[cfg(test)]
mod module_tests;

pub use affinity::{Affinity, AffinitySet};
pub use error::{Result, TeamForgeError};
pub use library::eligible_modules;
pub use module::{
    ChallengeType, Module, ModuleBuilder, ModuleItem, RoleOverride, SlotPreference, TEAM_CAPACITY,
};
pub use registry::UnitRegistry;
pub use unit::{Role, Unit, UnitId};
