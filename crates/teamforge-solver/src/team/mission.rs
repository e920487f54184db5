//! Assignment across every node of a mission.

use std::borrow::Borrow;
use std::collections::HashSet;

use teamforge_core::{AffinitySet, Module, UnitId};
use teamforge_scoring::TeamScore;

use super::lineup::Lineup;
use super::node::NodeTeam;
use crate::phase::NodePhase;

/// One node team per node plus the cached aggregate score.
///
/// A unit id appears in at most one node team. The mission is valid once
/// every node team fields at least one unit.
///
/// # Examples
///
/// ```
/// use teamforge_core::{Affinity, AffinitySet, Module, ModuleItem, Role, Unit};
/// use teamforge_solver::MissionTeam;
///
/// let library = vec![
///     Module::new("a", vec![ModuleItem::auto(Unit::new(1, "Blaze", Role::Damage, Affinity::Fire))]).unwrap(),
/// ];
/// let mut team = MissionTeam::new(&[AffinitySet::single(Affinity::Fire)]);
///
/// assert!(!team.is_valid());
/// assert!(team.add_module(0, 0, &library[0]));
/// assert!(!team.add_module(0, 0, &library[0]));
/// assert!(team.is_valid());
///
/// team.recompute_scores(&library);
/// assert!(team.score().total() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MissionTeam {
    requirements: Vec<AffinitySet>,
    nodes: Vec<NodeTeam>,
    assigned: HashSet<UnitId>,
    score: TeamScore,
}

impl MissionTeam {
    /// Creates an empty mission with one node team per requirement.
    pub fn new(requirements: &[AffinitySet]) -> Self {
        Self {
            requirements: requirements.to_vec(),
            nodes: vec![NodeTeam::new(); requirements.len()],
            assigned: HashSet::new(),
            score: TeamScore::ZERO,
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeTeam] {
        &self.nodes
    }

    /// # Panics
    /// Panics if `node` is out of range.
    #[inline]
    pub fn node(&self, node: usize) -> &NodeTeam {
        &self.nodes[node]
    }

    #[inline]
    pub fn requirements(&self) -> &[AffinitySet] {
        &self.requirements
    }

    /// Units fielded across every node.
    #[inline]
    pub fn unit_count(&self) -> usize {
        self.assigned.len()
    }

    #[inline]
    pub fn contains_unit(&self, id: UnitId) -> bool {
        self.assigned.contains(&id)
    }

    /// Aggregate score as of the last [`recompute_scores`](Self::recompute_scores).
    #[inline]
    pub fn score(&self) -> TeamScore {
        self.score
    }

    /// Every node team fields at least one unit.
    pub fn is_valid(&self) -> bool {
        self.nodes.iter().all(|n| !n.is_empty())
    }

    /// Assigns the module at library index `index` to `node`.
    ///
    /// Returns false without changing anything if the node does not exist,
    /// would exceed its capacity, or any of the module's units is already
    /// assigned to some node.
    pub fn add_module(&mut self, node: usize, index: usize, module: &Module) -> bool {
        let Some(team) = self.nodes.get_mut(node) else {
            return false;
        };
        if !team.has_room_for(module) {
            return false;
        }
        if module.unit_ids().any(|id| self.assigned.contains(&id)) {
            return false;
        }
        team.push(index, module);
        self.assigned.extend(module.unit_ids());
        true
    }

    /// Removes a module previously added to `node`. Returns false if it is
    /// not assigned there.
    pub fn remove_module(&mut self, node: usize, index: usize, module: &Module) -> bool {
        let Some(team) = self.nodes.get_mut(node) else {
            return false;
        };
        if !team.remove(index, module) {
            return false;
        }
        for id in module.unit_ids() {
            self.assigned.remove(&id);
        }
        true
    }

    /// Sets the phase watermark of `node`, returning the previous one.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    pub fn set_phase(&mut self, node: usize, phase: NodePhase) -> NodePhase {
        self.nodes[node].set_phase(phase)
    }

    /// Re-derives the aggregate score from every node team.
    ///
    /// An incomplete mission scores zero so it never outranks a complete one.
    pub fn recompute_scores<M: Borrow<Module>>(&mut self, library: &[M]) -> TeamScore {
        self.score = if self.is_valid() {
            self.node_scores(library).into_iter().sum()
        } else {
            TeamScore::ZERO
        };
        self.score
    }

    /// Score of each node team against its requirement, in node order.
    pub fn node_scores<M: Borrow<Module>>(&self, library: &[M]) -> Vec<TeamScore> {
        self.nodes
            .iter()
            .zip(&self.requirements)
            .map(|(team, required)| team.score(library, *required))
            .collect()
    }

    /// Four-slot lineup of every node, in node order.
    pub fn materialize<M: Borrow<Module>>(&self, library: &[M]) -> Vec<Lineup> {
        self.nodes.iter().map(|n| n.lineup(library)).collect()
    }
}
