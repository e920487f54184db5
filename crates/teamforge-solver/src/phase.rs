//! Assignment phases.
//!
//! Modules are searched in phase order and each node team keeps the phase
//! of the last module it received as a watermark. A node only accepts
//! modules whose phase is not below its watermark, so every combination of
//! modules reaches a node in exactly one order.

use std::fmt;

use teamforge_core::Module;

/// Ordinal priority class of a module, and watermark of a node team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum NodePhase {
    /// No module assigned yet.
    #[default]
    Open = 0,
    /// Module fields a damage unit.
    Damage = 1,
    /// No damage unit, but a catalyst.
    Catalyst = 2,
    /// Neither damage nor catalyst, but a survival unit.
    Survival = 3,
    /// Anything else.
    Support = 4,
}

impl NodePhase {
    /// Phase of a module, from its role composition.
    pub fn of(module: &Module) -> NodePhase {
        if module.has_damage() {
            NodePhase::Damage
        } else if module.has_catalyst() {
            NodePhase::Catalyst
        } else if module.has_survival() {
            NodePhase::Survival
        } else {
            NodePhase::Support
        }
    }
}

impl fmt::Display for NodePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodePhase::Open => write!(f, "Open"),
            NodePhase::Damage => write!(f, "Damage"),
            NodePhase::Catalyst => write!(f, "Catalyst"),
            NodePhase::Survival => write!(f, "Survival"),
            NodePhase::Support => write!(f, "Support"),
        }
    }
}
