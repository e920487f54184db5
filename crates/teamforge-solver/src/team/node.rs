//! Team assigned to a single node.

use std::borrow::Borrow;

use smallvec::SmallVec;
use teamforge_core::{AffinitySet, Module, ModuleItem, UnitId, TEAM_CAPACITY};
use teamforge_scoring::{score_node, ScoredUnit, TeamScore};

use super::lineup::{lineup, Lineup};
use crate::phase::NodePhase;

/// Modules currently assigned to one node.
///
/// Modules are referenced by their index in the search library. Unit ids
/// are tracked alongside for membership checks; a node never holds more
/// than [`TEAM_CAPACITY`] units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeTeam {
    modules: SmallVec<[usize; TEAM_CAPACITY]>,
    units: SmallVec<[UnitId; TEAM_CAPACITY]>,
    phase: NodePhase,
}

impl NodeTeam {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library indices of the assigned modules, in assignment order.
    #[inline]
    pub fn modules(&self) -> &[usize] {
        &self.modules
    }

    #[inline]
    pub fn unit_ids(&self) -> &[UnitId] {
        &self.units
    }

    #[inline]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[inline]
    pub fn contains_unit(&self, id: UnitId) -> bool {
        self.units.contains(&id)
    }

    /// Phase watermark.
    #[inline]
    pub fn phase(&self) -> NodePhase {
        self.phase
    }

    /// Returns true if `module` fits in the remaining capacity.
    pub fn has_room_for(&self, module: &Module) -> bool {
        self.units.len() + module.unit_count() <= TEAM_CAPACITY
    }

    pub(crate) fn set_phase(&mut self, phase: NodePhase) -> NodePhase {
        std::mem::replace(&mut self.phase, phase)
    }

    pub(crate) fn push(&mut self, index: usize, module: &Module) {
        self.modules.push(index);
        self.units.extend(module.unit_ids());
    }

    pub(crate) fn remove(&mut self, index: usize, module: &Module) -> bool {
        let Some(pos) = self.modules.iter().position(|&m| m == index) else {
            return false;
        };
        self.modules.remove(pos);
        self.units.retain(|id| !module.unit_ids().any(|m| m == *id));
        true
    }

    /// Items of every assigned module, in assignment order.
    pub fn items<'a, M: Borrow<Module> + 'a>(
        &'a self,
        library: &'a [M],
    ) -> impl Iterator<Item = &'a ModuleItem> + 'a {
        self.modules
            .iter()
            .flat_map(move |&i| library[i].borrow().items().iter())
    }

    /// Scores this team against the node's required affinities.
    pub fn score<M: Borrow<Module>>(&self, library: &[M], required: AffinitySet) -> TeamScore {
        score_node(self.items(library).map(ScoredUnit::from), required)
    }

    /// Expands the team into its four-slot lineup.
    pub fn lineup<M: Borrow<Module>>(&self, library: &[M]) -> Lineup {
        lineup(self.items(library))
    }
}
