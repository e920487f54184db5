//! Depth-first branch-and-bound over the module library.
//!
//! Modules are visited in phase order. At each module the search first tries
//! to place it in every node whose watermark allows it, then tries leaving it
//! out. Complete valid assignments are scored and the first one with the
//! highest total is kept.

mod bounder;


use std::borrow::Borrow;

use teamforge_config::SearchConfig;
use teamforge_core::{AffinitySet, Module};
use teamforge_scoring::TeamScore;
use tracing::{debug, info, trace};

use crate::phase::NodePhase;
use crate::stats::SearchStats;
use crate::team::{Lineup, MissionTeam};

pub use bounder::MissionBounder;

/// Exhaustive team assignment search with optional pruning.
///
/// # Examples
///
/// ```
/// use teamforge_config::SearchConfig;
/// use teamforge_core::{Affinity, AffinitySet, Module, ModuleItem, Role, Unit};
/// use teamforge_solver::BranchAndBound;
///
/// let library = vec![
///     Module::new("blaze", vec![ModuleItem::auto(Unit::new(1, "Blaze", Role::Damage, Affinity::Fire))]).unwrap(),
///     Module::new("aegis", vec![ModuleItem::auto(Unit::new(2, "Aegis", Role::Survival, Affinity::Ice))]).unwrap(),
/// ];
/// let requirements = [AffinitySet::single(Affinity::Fire)];
///
/// let outcome = BranchAndBound::new(SearchConfig::default()).solve(&requirements, &library);
/// let best = outcome.best.as_ref().unwrap();
///
/// assert_eq!(best.unit_count(), 2);
/// assert!(outcome.stats.leaves_scored > 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BranchAndBound {
    config: SearchConfig,
}

impl BranchAndBound {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Finds the highest scoring valid assignment of `library` modules to the
    /// nodes described by `requirements`.
    ///
    /// The library is taken as given; callers filter it beforehand (see
    /// [`eligible_modules`](teamforge_core::eligible_modules)). Module
    /// indices in the result refer to positions in `library`.
    pub fn solve<M: Borrow<Module>>(
        &self,
        requirements: &[AffinitySet],
        library: &[M],
    ) -> SearchOutcome {
        let phases: Vec<NodePhase> = library.iter().map(|m| NodePhase::of(m.borrow())).collect();
        let mut order: Vec<usize> = (0..library.len()).collect();
        order.sort_by_key(|&i| phases[i]);

        info!(
            event = "search_start",
            node_count = requirements.len(),
            module_count = library.len(),
            pruning = self.config.enable_pruning,
        );

        let mut stats = SearchStats::default();
        stats.start();

        let mut dfs = Dfs {
            library,
            order: &order,
            phases: &phases,
            bounder: MissionBounder::new(self.config.capacity_bound),
            config: &self.config,
            best: None,
            stats,
        };
        let mut team = MissionTeam::new(requirements);
        dfs.visit(&mut team, 0);

        let Dfs {
            best, mut stats, ..
        } = dfs;
        stats.finish();

        let score = best.as_ref().map_or(TeamScore::ZERO, MissionTeam::score);
        info!(
            event = "search_end",
            duration_ms = stats.elapsed_ms(),
            nodes = stats.nodes_explored,
            leaves = stats.leaves_scored,
            pruned = stats.subtrees_pruned,
            found = best.is_some(),
            score = %score,
        );

        SearchOutcome { best, stats }
    }
}

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best valid mission team, or `None` if no valid assignment exists.
    pub best: Option<MissionTeam>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.best.is_some()
    }

    pub fn best_score(&self) -> Option<TeamScore> {
        self.best.as_ref().map(MissionTeam::score)
    }

    /// Four-slot lineup per node of the best team.
    ///
    /// `library` must be the slice the search ran on.
    pub fn lineups<M: Borrow<Module>>(&self, library: &[M]) -> Option<Vec<Lineup>> {
        self.best.as_ref().map(|team| team.materialize(library))
    }
}

struct Dfs<'a, M> {
    library: &'a [M],
    order: &'a [usize],
    phases: &'a [NodePhase],
    bounder: MissionBounder,
    config: &'a SearchConfig,
    best: Option<MissionTeam>,
    stats: SearchStats,
}

impl<M: Borrow<Module>> Dfs<'_, M> {
    fn visit(&mut self, team: &mut MissionTeam, depth: usize) {
        self.stats.record_node();

        let Some(&index) = self.order.get(depth) else {
            self.score_leaf(team);
            return;
        };

        if self.should_prune(team) {
            self.stats.record_prune();
            return;
        }

        let library = self.library;
        let module = library[index].borrow();
        let phase = self.phases[index];

        for node in 0..team.node_count() {
            if team.node(node).phase() > phase {
                continue;
            }
            if !team.add_module(node, index, module) {
                continue;
            }
            let previous = team.set_phase(node, phase);

            self.visit(team, depth + 1);

            team.set_phase(node, previous);
            let removed = team.remove_module(node, index, module);
            debug_assert!(removed, "module {} missing from node {}", index, node);
        }

        self.visit(team, depth + 1);
    }

    fn score_leaf(&mut self, team: &mut MissionTeam) {
        if !team.is_valid() {
            return;
        }
        let score = team.recompute_scores(self.library);
        self.stats.record_leaf();

        if self.config.log_node_scores {
            for (node, node_score) in team.node_scores(self.library).iter().enumerate() {
                trace!(
                    event = "node_score",
                    node = node,
                    units = team.node(node).unit_count(),
                    score = %node_score,
                );
            }
        }

        let improved = match &self.best {
            None => true,
            Some(best) => score.is_better_than(&best.score()),
        };
        if improved {
            self.stats.record_improvement();
            debug!(
                event = "new_best",
                leaves = self.stats.leaves_scored,
                units = team.unit_count(),
                score = %score,
            );
            self.best = Some(team.clone());
        }
    }

    fn should_prune(&self, team: &mut MissionTeam) -> bool {
        if !self.config.enable_pruning || !team.is_valid() {
            return false;
        }
        let Some(best) = &self.best else {
            return false;
        };
        team.recompute_scores(self.library);
        self.bounder.cannot_improve(team, best)
    }
}
