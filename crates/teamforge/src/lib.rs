//! TeamForge - Exhaustive team assignment in Rust
//!
//! Give it the required affinities of each node and a library of modules;
//! get back the best four-slot lineup for every node.
//!
//! # Example
//!
//! ```rust
//! use teamforge::prelude::*;
//!
//! let blaze = Unit::new(1, "Blaze", Role::Damage, Affinity::Fire);
//! let aegis = Unit::new(2, "Aegis", Role::Survival, Affinity::Fire);
//! let library = vec![
//!     Module::new("blaze", vec![ModuleItem::auto(blaze)]).unwrap(),
//!     Module::new("aegis", vec![ModuleItem::auto(aegis)]).unwrap(),
//! ];
//! let nodes = [AffinitySet::single(Affinity::Fire), AffinitySet::single(Affinity::Fire)];
//!
//! let lineups = teamforge::search_best_mission_team(&nodes, &library).unwrap();
//! assert_eq!(lineups.len(), 2);
//! assert!(lineups.iter().all(|l| l.iter().any(Option::is_some)));
//! ```

use std::borrow::Borrow;

pub use teamforge_config::{CapacityBound, ConfigError, SearchConfig};
pub use teamforge_core::{
    eligible_modules, Affinity, AffinitySet, ChallengeType, Module, ModuleBuilder, ModuleItem,
    Role, RoleOverride, SlotPreference, TeamForgeError, Unit, UnitId, UnitRegistry, TEAM_CAPACITY,
};
pub use teamforge_scoring::{score_node, ScoredUnit, TeamScore};
pub use teamforge_solver::{
    BranchAndBound, Lineup, MissionTeam, NodePhase, NodeTeam, SearchOutcome, SearchStats,
};

#[cfg(feature = "console")]
pub mod console;

/// Config file picked up by [`search_best_mission_team`] when present.
pub const CONFIG_FILE: &str = "teamforge.toml";

/// Finds the best lineup for every node, or `None` if no assignment gives
/// each node at least one unit.
///
/// Search settings come from `teamforge.toml` in the working directory when
/// it exists and parses; defaults are used otherwise.
pub fn search_best_mission_team<M: Borrow<Module>>(
    requirements: &[AffinitySet],
    library: &[M],
) -> Option<Vec<Lineup>> {
    let config = SearchConfig::load(CONFIG_FILE).unwrap_or_default();
    search_with_config(config, requirements, library)
}

/// Like [`search_best_mission_team`] with explicit settings.
pub fn search_with_config<M: Borrow<Module>>(
    config: SearchConfig,
    requirements: &[AffinitySet],
    library: &[M],
) -> Option<Vec<Lineup>> {
    BranchAndBound::new(config)
        .solve(requirements, library)
        .lineups(library)
}

pub mod prelude {
    pub use super::{
        eligible_modules, search_best_mission_team, search_with_config, Affinity, AffinitySet,
        ChallengeType, Lineup, Module, ModuleItem, Role, RoleOverride, SearchConfig,
        SlotPreference, TeamScore, Unit, UnitId, UnitRegistry,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamforge_test::roster::{AEGIS, BLAZE, CIPHER, FROSTBITE, GLACIER, SPARK, ZEPHYR};
    use teamforge_test::{module, module_with_slots, requirements, sample_registry};

    fn ids(lineup: &Lineup) -> Vec<Option<UnitId>> {
        lineup.iter().map(|s| s.as_ref().map(|u| u.id)).collect()
    }

    #[test]
    fn test_no_solution_is_none() {
        let library: Vec<Module> = Vec::new();
        let reqs = requirements(&[&[Affinity::Fire]]);

        assert!(search_with_config(SearchConfig::default(), &reqs, &library).is_none());
    }

    #[test]
    fn test_default_search_without_config_file() {
        let library = vec![module("a", &[BLAZE]), module("b", &[AEGIS])];
        let reqs = requirements(&[&[Affinity::Fire], &[Affinity::Fire]]);

        let lineups = search_best_mission_team(&reqs, &library).unwrap();

        assert_eq!(ids(&lineups[0]), vec![Some(BLAZE), None, None, None]);
        assert_eq!(ids(&lineups[1]), vec![Some(AEGIS), None, None, None]);
    }

    #[test]
    fn test_slot_preferences_survive_search() {
        let library = vec![module_with_slots(
            "placed",
            &[(BLAZE, SlotPreference::Third), (ZEPHYR, SlotPreference::Auto)],
        )];
        let reqs = requirements(&[&[Affinity::Fire]]);

        let lineups = search_with_config(SearchConfig::default(), &reqs, &library).unwrap();

        assert_eq!(ids(&lineups[0]), vec![Some(ZEPHYR), None, Some(BLAZE), None]);
    }

    #[test]
    fn test_filter_then_search() {
        let library = vec![
            Module::builder("hall-only")
                .items(module("x", &[FROSTBITE, GLACIER]).items().to_vec())
                .disable(ChallengeType::PureFiction)
                .build()
                .unwrap(),
            module("fire", &[BLAZE, CIPHER]),
        ];
        let reqs = requirements(&[&[Affinity::Ice]]);

        let eligible = eligible_modules(&library, ChallengeType::PureFiction, &reqs);
        assert_eq!(eligible.len(), 1);

        let lineups = search_with_config(SearchConfig::default(), &reqs, &eligible).unwrap();
        let fielded: Vec<UnitId> = lineups[0].iter().flatten().map(|u| u.id).collect();
        assert_eq!(fielded.len(), 2);
        assert!(fielded.contains(&BLAZE) && fielded.contains(&CIPHER));
    }

    #[test]
    fn test_registry_built_modules() {
        let registry = sample_registry();
        let items = vec![
            registry.auto_item(BLAZE).unwrap(),
            registry
                .item(SPARK, RoleOverride::Auto, SlotPreference::First)
                .unwrap(),
        ];
        let library = vec![Module::new("lead", items).unwrap()];
        let reqs = requirements(&[&[Affinity::Fire]]);

        let lineups = search_with_config(SearchConfig::default(), &reqs, &library).unwrap();

        assert_eq!(ids(&lineups[0]), vec![Some(SPARK), Some(BLAZE), None, None]);
        assert!(registry.auto_item(UnitId(99)).is_err());
    }
}
