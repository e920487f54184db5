//! Units and their static roles.

use std::fmt;

use crate::affinity::Affinity;

/// Opaque unit identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Combat role of a unit. Mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    Damage,
    Survival,
    Support,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Damage => write!(f, "Damage"),
            Role::Survival => write!(f, "Survival"),
            Role::Support => write!(f, "Support"),
        }
    }
}

/// Static metadata for one unit.
///
/// A catalyst unit can align the party's affinities with any node
/// requirement, granting discounted match credit to mismatched teammates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub role: Role,
    pub affinity: Affinity,
    #[cfg_attr(feature = "serde", serde(default))]
    pub catalyst: bool,
}

impl Unit {
    /// Creates a non-catalyst unit.
    pub fn new(id: u32, name: impl Into<String>, role: Role, affinity: Affinity) -> Self {
        Self {
            id: UnitId(id),
            name: name.into(),
            role,
            affinity,
            catalyst: false,
        }
    }

    /// Marks this unit as a catalyst.
    pub fn with_catalyst(mut self) -> Self {
        self.catalyst = true;
        self
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.role, self.affinity)
    }
}
