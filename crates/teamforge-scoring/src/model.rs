//! Score model for a single node team.
//!
//! Pure function of the team's units and the node's required affinities.
//! The tiers, highest first:
//!
//! 1. **count**: every fielded unit, `1e8` each.
//! 2. **damage**: `1e6` for having a damage unit, `1e7` more if one matches
//!    a required affinity. Without a native match, a catalyst in the team
//!    grants `0.9 * 1e7 / E` where `E` counts the team's affinities outside
//!    the requirement.
//! 3. **survival**: `1e5` for having at least one survival unit.
//! 4. **support**: `1e4` per support unit.
//! 5. **affinity**: `1e3` per matching unit, plus catalyst-enabled matches
//!    at `0.9 * 1e3 / E` each.

use teamforge_core::{Affinity, AffinitySet, ModuleItem, Role};

use crate::score::TeamScore;

/// Base weights of each score tier.
pub mod weights {
    pub const COUNT: f64 = 1e8;
    pub const DAMAGE_BASE: f64 = 1e6;
    pub const DAMAGE_MATCH: f64 = 1e7;
    pub const SURVIVAL: f64 = 1e5;
    pub const SUPPORT: f64 = 1e4;
    pub const AFFINITY_MATCH: f64 = 1e3;
    /// Discount on credit obtained through a catalyst.
    pub const CATALYST_DISCOUNT: f64 = 0.9;
}

/// What the score model needs to know about one fielded unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredUnit {
    pub role: Role,
    pub affinity: Affinity,
    pub catalyst: bool,
}

impl ScoredUnit {
    pub fn new(role: Role, affinity: Affinity, catalyst: bool) -> Self {
        Self {
            role,
            affinity,
            catalyst,
        }
    }
}

impl From<&ModuleItem> for ScoredUnit {
    fn from(item: &ModuleItem) -> Self {
        ScoredUnit::new(item.effective_role(), item.affinity(), item.is_catalyst())
    }
}

#[derive(Debug, Default)]
struct Tally {
    units: usize,
    damage: usize,
    survival: usize,
    support: usize,
    damage_matched: usize,
    damage_catalyzed: usize,
    other_matched: usize,
    other_catalyzed: usize,
}

/// Scores a node team against its node's required affinities.
///
/// # Examples
///
/// ```
/// use teamforge_core::{Affinity, AffinitySet, Role};
/// use teamforge_scoring::{score_node, ScoredUnit, TeamScore};
///
/// let required = AffinitySet::single(Affinity::Fire);
/// let score = score_node([ScoredUnit::new(Role::Damage, Affinity::Fire, false)], required);
///
/// assert_eq!(score, TeamScore::of(1e8, 1e6 + 1e7, 0.0, 0.0, 1e3));
/// assert!(score_node(Vec::new(), required).is_zero());
/// ```
pub fn score_node<I>(units: I, required: AffinitySet) -> TeamScore
where
    I: IntoIterator<Item = ScoredUnit>,
{
    let units: Vec<ScoredUnit> = units.into_iter().collect();

    let mut team_affinities = AffinitySet::new();
    let mut has_catalyst = false;
    for unit in &units {
        team_affinities.insert(unit.affinity);
        has_catalyst |= unit.catalyst;
    }

    // With a catalyst the team's extra affinities count as matched, at a discount.
    let extra = if has_catalyst {
        team_affinities.difference(&required)
    } else {
        AffinitySet::EMPTY
    };

    let mut tally = Tally::default();
    for unit in &units {
        tally.units += 1;
        let matched = required.contains(unit.affinity);
        let catalyzed = !matched && extra.contains(unit.affinity);
        match unit.role {
            Role::Damage => {
                tally.damage += 1;
                tally.damage_matched += matched as usize;
                tally.damage_catalyzed += catalyzed as usize;
            }
            Role::Survival => tally.survival += 1,
            Role::Support => tally.support += 1,
        }
        if unit.role != Role::Damage {
            tally.other_matched += matched as usize;
            tally.other_catalyzed += catalyzed as usize;
        }
    }

    tally_score(&tally, extra.len())
}

fn tally_score(tally: &Tally, extra: usize) -> TeamScore {
    let count = tally.units as f64 * weights::COUNT;

    let mut damage = 0.0;
    if tally.damage > 0 {
        damage += weights::DAMAGE_BASE;
    }
    if tally.damage_matched > 0 {
        damage += weights::DAMAGE_MATCH;
    } else if tally.damage_catalyzed > 0 && extra > 0 {
        damage += weights::CATALYST_DISCOUNT * weights::DAMAGE_MATCH / extra as f64;
    }

    let survival = if tally.survival > 0 {
        weights::SURVIVAL
    } else {
        0.0
    };

    let support = tally.support as f64 * weights::SUPPORT;

    let mut affinity = (tally.damage_matched + tally.other_matched) as f64 * weights::AFFINITY_MATCH;
    if extra > 0 {
        let catalyzed = (tally.damage_catalyzed + tally.other_catalyzed) as f64;
        affinity += weights::CATALYST_DISCOUNT * catalyzed * weights::AFFINITY_MATCH / extra as f64;
    }

    TeamScore::of(count, damage, survival, support, affinity)
}
