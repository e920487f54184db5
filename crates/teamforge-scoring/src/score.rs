//! TeamScore - five-tier hierarchical score

use std::cmp::Ordering;
use std::fmt;

/// Score of one node team, or the sum over all nodes of a mission.
///
/// Components are real-valued. Their weights are chosen so that each tier's
/// largest possible contribution stays below the next tier's unit increment;
/// comparing totals therefore compares tiers lexicographically:
/// count > damage > survival > support > affinity.
///
/// # Examples
///
/// ```
/// use teamforge_scoring::TeamScore;
///
/// let a = TeamScore::of(1e8, 1e6, 0.0, 0.0, 0.0);
/// let b = TeamScore::of(1e8, 0.0, 1e5, 3e4, 4e3);
///
/// assert!(a > b);
/// assert_eq!((a + b).count(), 2e8);
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamScore {
    count: f64,
    damage: f64,
    survival: f64,
    support: f64,
    affinity: f64,
}

impl TeamScore {
    /// The zero score.
    pub const ZERO: TeamScore = TeamScore {
        count: 0.0,
        damage: 0.0,
        survival: 0.0,
        support: 0.0,
        affinity: 0.0,
    };

    /// Creates a score from its components.
    #[inline]
    pub const fn of(count: f64, damage: f64, survival: f64, support: f64, affinity: f64) -> Self {
        TeamScore {
            count,
            damage,
            survival,
            support,
            affinity,
        }
    }

    /// Unit-count tier.
    #[inline]
    pub const fn count(&self) -> f64 {
        self.count
    }

    /// Damage tier, including type-matched and catalyst credit.
    #[inline]
    pub const fn damage(&self) -> f64 {
        self.damage
    }

    #[inline]
    pub const fn survival(&self) -> f64 {
        self.survival
    }

    #[inline]
    pub const fn support(&self) -> f64 {
        self.support
    }

    /// Generic type-match tier.
    #[inline]
    pub const fn affinity(&self) -> f64 {
        self.affinity
    }

    /// Sum of all components.
    #[inline]
    pub fn total(&self) -> f64 {
        self.count + self.damage + self.survival + self.support + self.affinity
    }

    /// Returns true if every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == TeamScore::ZERO
    }

    /// Returns true if this score's total is strictly greater.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.total() > other.total()
    }
}

impl PartialOrd for TeamScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.total().total_cmp(&other.total()))
    }
}

impl_score_ops!(TeamScore { count, damage, survival, support, affinity } => of);

impl fmt::Debug for TeamScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TeamScore({}, {}, {}, {}, {})",
            self.count, self.damage, self.survival, self.support, self.affinity
        )
    }
}

impl fmt::Display for TeamScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} ({:.0}count/{:.0}damage/{:.0}survival/{:.0}support/{:.0}affinity)",
            self.total(),
            self.count,
            self.damage,
            self.survival,
            self.support,
            self.affinity
        )
    }
}
