//! Elemental affinities.
//!
//! Every unit carries exactly one [`Affinity`]. Nodes and module whitelists
//! use [`AffinitySet`], a copyable bit set over the closed affinity list.

use std::fmt;

/// Elemental affinity of a unit or a node requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Affinity {
    Physical,
    Fire,
    Ice,
    Lightning,
    Wind,
    Quantum,
    Imaginary,
}

impl Affinity {
    /// All affinities in declaration order.
    pub const ALL: [Affinity; 7] = [
        Affinity::Physical,
        Affinity::Fire,
        Affinity::Ice,
        Affinity::Lightning,
        Affinity::Wind,
        Affinity::Quantum,
        Affinity::Imaginary,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Returns the lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Affinity::Physical => "physical",
            Affinity::Fire => "fire",
            Affinity::Ice => "ice",
            Affinity::Lightning => "lightning",
            Affinity::Wind => "wind",
            Affinity::Quantum => "quantum",
            Affinity::Imaginary => "imaginary",
        }
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of affinities.
///
/// # Examples
///
/// ```
/// use teamforge_core::{Affinity, AffinitySet};
///
/// let set = AffinitySet::from_iter([Affinity::Fire, Affinity::Ice]);
/// assert!(set.contains(Affinity::Fire));
/// assert!(!set.contains(Affinity::Wind));
/// assert_eq!(set.len(), 2);
/// assert_eq!(AffinitySet::all().len(), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AffinitySet {
    bits: u8,
}

impl AffinitySet {
    /// The empty set.
    pub const EMPTY: AffinitySet = AffinitySet { bits: 0 };

    const ALL_BITS: u8 = (1 << Affinity::ALL.len()) - 1;

    /// Creates an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates the set holding every affinity.
    #[inline]
    pub const fn all() -> Self {
        AffinitySet {
            bits: Self::ALL_BITS,
        }
    }

    /// Creates a set with a single affinity.
    #[inline]
    pub const fn single(affinity: Affinity) -> Self {
        AffinitySet {
            bits: affinity.bit(),
        }
    }

    #[inline]
    pub const fn contains(&self, affinity: Affinity) -> bool {
        self.bits & affinity.bit() != 0
    }

    /// Adds an affinity, returning true if it was not present.
    pub fn insert(&mut self, affinity: Affinity) -> bool {
        let absent = !self.contains(affinity);
        self.bits |= affinity.bit();
        absent
    }

    /// Removes an affinity, returning true if it was present.
    pub fn remove(&mut self, affinity: Affinity) -> bool {
        let present = self.contains(affinity);
        self.bits &= !affinity.bit();
        present
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns true if every affinity is in the set.
    #[inline]
    pub const fn is_all(&self) -> bool {
        self.bits == Self::ALL_BITS
    }

    /// Affinities in `self` that are not in `other`.
    #[inline]
    pub const fn difference(&self, other: &AffinitySet) -> AffinitySet {
        AffinitySet {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns true if the two sets share at least one affinity.
    #[inline]
    pub const fn intersects(&self, other: &AffinitySet) -> bool {
        self.bits & other.bits != 0
    }

    /// Iterates the affinities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Affinity> + '_ {
        Affinity::ALL.into_iter().filter(|a| self.contains(*a))
    }
}

impl FromIterator<Affinity> for AffinitySet {
    fn from_iter<I: IntoIterator<Item = Affinity>>(iter: I) -> Self {
        let mut set = AffinitySet::new();
        for affinity in iter {
            set.insert(affinity);
        }
        set
    }
}

impl From<Affinity> for AffinitySet {
    fn from(affinity: Affinity) -> Self {
        AffinitySet::single(affinity)
    }
}

impl fmt::Debug for AffinitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for AffinitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return f.write_str("all");
        }
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(|a| a.as_str()).collect();
        f.write_str(&names.join(","))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AffinitySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AffinitySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let affinities = Vec::<Affinity>::deserialize(deserializer)?;
        Ok(affinities.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut set = AffinitySet::new();
        assert!(set.is_empty());
        assert!(set.insert(Affinity::Quantum));
        assert!(!set.insert(Affinity::Quantum));
        assert_eq!(set.len(), 1);
        assert!(set.remove(Affinity::Quantum));
        assert!(!set.remove(Affinity::Quantum));
        assert!(set.is_empty());
    }

    #[test]
    fn test_difference() {
        let team = AffinitySet::from_iter([Affinity::Fire, Affinity::Ice, Affinity::Wind]);
        let required = AffinitySet::from_iter([Affinity::Ice]);
        let extra = team.difference(&required);

        assert_eq!(extra.len(), 2);
        assert!(extra.contains(Affinity::Fire));
        assert!(extra.contains(Affinity::Wind));
        assert!(!extra.contains(Affinity::Ice));
    }

    #[test]
    fn test_intersects() {
        let a = AffinitySet::from_iter([Affinity::Fire, Affinity::Ice]);
        let b = AffinitySet::single(Affinity::Ice);
        let c = AffinitySet::single(Affinity::Imaginary);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_display() {
        assert_eq!(AffinitySet::all().to_string(), "all");
        assert_eq!(AffinitySet::EMPTY.to_string(), "none");
        let set = AffinitySet::from_iter([Affinity::Wind, Affinity::Fire]);
        assert_eq!(set.to_string(), "fire,wind");
    }

    #[test]
    fn test_iter_order() {
        let set = AffinitySet::from_iter([Affinity::Imaginary, Affinity::Physical]);
        let collected: Vec<Affinity> = set.iter().collect();
        assert_eq!(collected, vec![Affinity::Physical, Affinity::Imaginary]);
    }
}
