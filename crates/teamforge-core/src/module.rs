//! Modules: named, reusable unit groupings.
//!
//! A module bundles 1 to [`TEAM_CAPACITY`] distinct units together with
//! per-unit role overrides and slot preferences. Modules are validated when
//! built and are immutable afterwards.

use std::fmt;

use crate::affinity::{Affinity, AffinitySet};
use crate::error::{Result, TeamForgeError};
use crate::unit::{Role, Unit, UnitId};

/// Maximum number of units a node can field.
pub const TEAM_CAPACITY: usize = 4;

/// Role override for a module item. Anything but `Auto` replaces the
/// unit's static role for scoring and classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoleOverride {
    #[default]
    Auto,
    Damage,
    Survival,
    Support,
}

/// Preferred slot for a module item in the final four-slot lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SlotPreference {
    #[default]
    Auto,
    First,
    Second,
    Third,
    Fourth,
}

impl SlotPreference {
    /// Zero-based slot index, `None` for `Auto`.
    pub fn index(&self) -> Option<usize> {
        match self {
            SlotPreference::Auto => None,
            SlotPreference::First => Some(0),
            SlotPreference::Second => Some(1),
            SlotPreference::Third => Some(2),
            SlotPreference::Fourth => Some(3),
        }
    }
}

/// The two challenge types a module can be enabled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChallengeType {
    ForgottenHall,
    PureFiction,
}

/// One unit inside a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleItem {
    pub unit: Unit,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role_override: RoleOverride,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot: SlotPreference,
}

impl ModuleItem {
    pub fn new(unit: Unit, role_override: RoleOverride, slot: SlotPreference) -> Self {
        Self {
            unit,
            role_override,
            slot,
        }
    }

    /// An item with automatic role and slot.
    pub fn auto(unit: Unit) -> Self {
        Self::new(unit, RoleOverride::Auto, SlotPreference::Auto)
    }

    #[inline]
    pub fn unit_id(&self) -> UnitId {
        self.unit.id
    }

    #[inline]
    pub fn affinity(&self) -> Affinity {
        self.unit.affinity
    }

    /// Role used for scoring: the override if set, else the static role.
    pub fn effective_role(&self) -> Role {
        match self.role_override {
            RoleOverride::Auto => self.unit.role,
            RoleOverride::Damage => Role::Damage,
            RoleOverride::Survival => Role::Survival,
            RoleOverride::Support => Role::Support,
        }
    }

    pub fn is_damage(&self) -> bool {
        self.effective_role() == Role::Damage
    }

    pub fn is_survival(&self) -> bool {
        self.effective_role() == Role::Survival
    }

    pub fn is_support(&self) -> bool {
        self.effective_role() == Role::Support
    }

    #[inline]
    pub fn is_catalyst(&self) -> bool {
        self.unit.catalyst
    }
}

/// A validated group of units.
///
/// # Examples
///
/// ```
/// use teamforge_core::{Affinity, ChallengeType, Module, ModuleItem, Role, Unit};
///
/// let module = Module::builder("burst")
///     .item(ModuleItem::auto(Unit::new(1, "Blaze", Role::Damage, Affinity::Fire)))
///     .item(ModuleItem::auto(Unit::new(2, "Aegis", Role::Survival, Affinity::Ice)))
///     .disable(ChallengeType::PureFiction)
///     .build()
///     .unwrap();
///
/// assert_eq!(module.unit_count(), 2);
/// assert!(module.has_damage());
/// assert!(module.fits_challenge(ChallengeType::ForgottenHall));
/// assert!(!module.fits_challenge(ChallengeType::PureFiction));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Module {
    name: String,
    items: Vec<ModuleItem>,
    affinities: AffinitySet,
    forgotten_hall: bool,
    pure_fiction: bool,
}

impl Module {
    /// Creates a module enabled everywhere with an all-affinity whitelist.
    pub fn new(name: impl Into<String>, items: Vec<ModuleItem>) -> Result<Self> {
        Self::builder(name).items(items).build()
    }

    pub fn builder(name: impl Into<String>) -> ModuleBuilder {
        ModuleBuilder::new(name)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn items(&self) -> &[ModuleItem] {
        &self.items
    }

    #[inline]
    pub fn unit_count(&self) -> usize {
        self.items.len()
    }

    pub fn unit_ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.items.iter().map(ModuleItem::unit_id)
    }

    /// Affinity whitelist of nodes this module is meant for.
    #[inline]
    pub fn affinities(&self) -> AffinitySet {
        self.affinities
    }

    pub fn has_damage(&self) -> bool {
        self.items.iter().any(ModuleItem::is_damage)
    }

    pub fn has_catalyst(&self) -> bool {
        self.items.iter().any(ModuleItem::is_catalyst)
    }

    pub fn has_survival(&self) -> bool {
        self.items.iter().any(ModuleItem::is_survival)
    }

    pub fn has_support(&self) -> bool {
        self.items.iter().any(ModuleItem::is_support)
    }

    /// Eligibility flag for the given challenge type.
    pub fn fits_challenge(&self, challenge: ChallengeType) -> bool {
        match challenge {
            ChallengeType::ForgottenHall => self.forgotten_hall,
            ChallengeType::PureFiction => self.pure_fiction,
        }
    }

    /// True if any node requires an affinity on this module's whitelist.
    pub fn fits_affinities(&self, requirements: &[AffinitySet]) -> bool {
        requirements.iter().any(|r| r.intersects(&self.affinities))
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.items.iter().map(|i| i.unit.name.as_str()).collect();
        write!(
            f,
            "{} [{}] affinities: {}",
            self.name,
            names.join(", "),
            self.affinities
        )
    }
}

/// Builder for [`Module`]; validation runs in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ModuleBuilder {
    name: String,
    items: Vec<ModuleItem>,
    affinities: AffinitySet,
    forgotten_hall: bool,
    pure_fiction: bool,
}

impl ModuleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            affinities: AffinitySet::all(),
            forgotten_hall: true,
            pure_fiction: true,
        }
    }

    pub fn item(mut self, item: ModuleItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = ModuleItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Restricts the affinity whitelist.
    pub fn affinities(mut self, affinities: AffinitySet) -> Self {
        self.affinities = affinities;
        self
    }

    pub fn enable(self, challenge: ChallengeType) -> Self {
        self.set_enabled(challenge, true)
    }

    pub fn disable(self, challenge: ChallengeType) -> Self {
        self.set_enabled(challenge, false)
    }

    fn set_enabled(mut self, challenge: ChallengeType, enabled: bool) -> Self {
        match challenge {
            ChallengeType::ForgottenHall => self.forgotten_hall = enabled,
            ChallengeType::PureFiction => self.pure_fiction = enabled,
        }
        self
    }

    /// Validates and builds the module.
    ///
    /// # Errors
    ///
    /// Fails if the module is empty, holds more than [`TEAM_CAPACITY`]
    /// units, or lists a unit twice.
    pub fn build(self) -> Result<Module> {
        if self.items.is_empty() {
            return Err(TeamForgeError::EmptyModule { module: self.name });
        }
        if self.items.len() > TEAM_CAPACITY {
            return Err(TeamForgeError::TooManyUnits {
                count: self.items.len(),
                module: self.name,
            });
        }
        for (i, item) in self.items.iter().enumerate() {
            if self.items[..i].iter().any(|o| o.unit_id() == item.unit_id()) {
                return Err(TeamForgeError::DuplicateUnit {
                    unit: item.unit_id(),
                    module: self.name,
                });
            }
        }

        Ok(Module {
            name: self.name,
            items: self.items,
            affinities: self.affinities,
            forgotten_hall: self.forgotten_hall,
            pure_fiction: self.pure_fiction,
        })
    }
}
