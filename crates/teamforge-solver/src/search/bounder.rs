//! Optimistic bounds for branch-and-bound pruning.
//!
//! Modules are visited in phase order, so once every node's watermark has
//! moved past a phase no later module can add score in the tiers that phase
//! feeds. The bounder compares the current partial mission against the best
//! complete one on those settled tiers, and caps the still-open tiers by the
//! number of free slots left.
//!
//! Under [`CapacityBound::Derived`] the settled tiers only decide once the
//! count tier is settled too: no completion may field more units than the
//! best. Fixed bounds apply the tier rules as they are, without that check.

use teamforge_config::CapacityBound;
use teamforge_scoring::weights;

use crate::phase::NodePhase;
use crate::team::MissionTeam;

/// Decides when a partial mission can no longer beat the best one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MissionBounder {
    capacity_bound: CapacityBound,
}

impl MissionBounder {
    pub fn new(capacity_bound: CapacityBound) -> Self {
        Self { capacity_bound }
    }

    /// Free slots left in `team` under the capacity bound.
    ///
    /// Negative when a fixed bound is below the number of fielded units.
    pub fn remaining_slots(&self, team: &MissionTeam) -> f64 {
        self.capacity_bound.total_slots(team.node_count()) as f64 - team.unit_count() as f64
    }

    /// Returns true if no completion of `current` can outscore `best`.
    ///
    /// Both scores must be up to date; `current` is expected to be valid.
    pub fn cannot_improve(&self, current: &MissionTeam, best: &MissionTeam) -> bool {
        let nodes = current.nodes();
        let past_catalyst = nodes.iter().all(|n| n.phase() >= NodePhase::Catalyst);
        let past_survival = nodes.iter().all(|n| n.phase() >= NodePhase::Survival);

        let cur = current.score();
        let top = best.score();
        let remaining = self.remaining_slots(current);

        if self.capacity_bound == CapacityBound::Derived
            && cur.count() + remaining * weights::COUNT > top.count()
        {
            return false;
        }

        // Damage is settled once no node can take damage or catalyst modules.
        if past_catalyst && cur.damage() < top.damage() {
            return true;
        }
        if !past_survival {
            return false;
        }
        if cur.survival() < top.survival() {
            return true;
        }

        let support_bound = cur.support() + remaining * weights::SUPPORT;
        if support_bound < top.support() {
            return true;
        }
        support_bound == top.support()
            && cur.affinity() + remaining * weights::AFFINITY_MATCH < top.affinity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamforge_core::{Affinity, Module};
    use teamforge_test::roster::{AEGIS, BLAZE, CIPHER, FROSTBITE, GLACIER, SPARK, ZEPHYR};
    use teamforge_test::{module, requirements};

    fn mission(library: &[Module], placements: &[(usize, usize)], phase: NodePhase) -> MissionTeam {
        let mut team = MissionTeam::new(&requirements(&[&[Affinity::Fire], &[Affinity::Ice]]));
        for &(node, index) in placements {
            assert!(team.add_module(node, index, &library[index]));
        }
        for node in 0..team.node_count() {
            team.set_phase(node, phase);
        }
        team.recompute_scores(library);
        team
    }

    fn library() -> Vec<Module> {
        vec![
            module("fire", &[BLAZE, AEGIS]),
            module("ice", &[FROSTBITE, GLACIER]),
            module("cheer", &[ZEPHYR, SPARK]),
            module("swap-fire", &[FROSTBITE]),
            module("swap-ice", &[BLAZE]),
            module("cipher", &[CIPHER]),
        ]
    }

    #[test]
    fn test_prunes_lower_damage_after_catalyst_phase() {
        let lib = library();
        let best = mission(&lib, &[(0, 0), (1, 1)], NodePhase::Support);
        let current = mission(&lib, &[(0, 3), (1, 4)], NodePhase::Catalyst);

        assert!(current.score().damage() < best.score().damage());
        assert!(MissionBounder::new(CapacityBound::LEGACY).cannot_improve(&current, &best));
    }

    #[test]
    fn test_derived_bound_waits_for_count_tier() {
        let lib = library();
        let best = mission(&lib, &[(0, 0), (1, 1)], NodePhase::Support);
        let current = mission(&lib, &[(0, 3), (1, 4)], NodePhase::Catalyst);

        // Six free slots could still outnumber the best's four units.
        let derived = MissionBounder::default();
        assert_eq!(derived.remaining_slots(&current), 6.0);
        assert!(!derived.cannot_improve(&current, &best));
    }

    #[test]
    fn test_derived_bound_prunes_once_count_settled() {
        let lib = vec![
            module("full", &[BLAZE, AEGIS, ZEPHYR, SPARK]),
            module("cold", &[FROSTBITE, GLACIER, CIPHER]),
        ];
        let reqs = requirements(&[&[Affinity::Fire]]);
        let build = |index: usize, phase: NodePhase| {
            let mut team = MissionTeam::new(&reqs);
            assert!(team.add_module(0, index, &lib[index]));
            team.set_phase(0, phase);
            team.recompute_scores(&lib);
            team
        };
        let best = build(0, NodePhase::Support);
        let current = build(1, NodePhase::Catalyst);

        // Three units plus one free slot cannot outnumber four.
        let derived = MissionBounder::default();
        assert_eq!(derived.remaining_slots(&current), 1.0);
        assert!(current.score().damage() < best.score().damage());
        assert!(derived.cannot_improve(&current, &best));
    }

    #[test]
    fn test_keeps_lower_damage_while_damage_open() {
        let lib = library();
        let best = mission(&lib, &[(0, 0), (1, 1)], NodePhase::Support);
        let current = mission(&lib, &[(0, 3), (1, 4)], NodePhase::Damage);

        assert!(!MissionBounder::default().cannot_improve(&current, &best));
    }

    #[test]
    fn test_prunes_lower_survival_after_survival_phase() {
        let lib = library();
        let best = mission(&lib, &[(0, 0), (1, 1)], NodePhase::Survival);
        // Same damage tier, no survival units.
        let current = mission(&lib, &[(0, 4), (1, 3)], NodePhase::Survival);

        assert_eq!(current.score().damage(), best.score().damage());
        assert!(current.score().survival() < best.score().survival());
        assert!(MissionBounder::new(CapacityBound::LEGACY).cannot_improve(&current, &best));
        assert!(!MissionBounder::default().cannot_improve(&current, &best));
    }

    #[test]
    fn test_support_bound_uses_free_slots() {
        let lib = library();
        let best = mission(&lib, &[(0, 0), (1, 1), (0, 2)], NodePhase::Support);
        let current = mission(&lib, &[(0, 0), (1, 1)], NodePhase::Support);

        // Four free slots under the derived bound cover the 2e4 support gap.
        let derived = MissionBounder::new(CapacityBound::Derived);
        assert_eq!(derived.remaining_slots(&current), 4.0);
        assert!(!derived.cannot_improve(&current, &best));

        // A fixed bound of four leaves no room.
        let tight = MissionBounder::new(CapacityBound::Fixed(4));
        assert_eq!(tight.remaining_slots(&current), 0.0);
        assert!(tight.cannot_improve(&current, &best));
    }

    #[test]
    fn test_equal_support_bound_falls_through_to_affinity() {
        let lib = library();
        let best = mission(&lib, &[(0, 0), (1, 1)], NodePhase::Support);
        let current = mission(&lib, &[(0, 0), (1, 1)], NodePhase::Support);

        let tight = MissionBounder::new(CapacityBound::Fixed(4));
        // Identical teams tie on every tier and are never pruned.
        assert!(!tight.cannot_improve(&current, &best));
    }

    #[test]
    fn test_legacy_bound_can_go_negative() {
        let lib = library();
        let current = mission(&lib, &[(0, 0), (1, 1), (0, 5), (1, 2)], NodePhase::Support);

        let legacy = MissionBounder::new(CapacityBound::LEGACY);
        assert_eq!(legacy.remaining_slots(&current), 1.0);
        let fixed = MissionBounder::new(CapacityBound::Fixed(5));
        assert_eq!(fixed.remaining_slots(&current), -2.0);
    }
}
