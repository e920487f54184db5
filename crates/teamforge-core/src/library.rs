//! Module library filtering.
//!
//! The search trusts its input library; callers narrow the configured
//! modules to the active challenge with [`eligible_modules`] first.

use crate::affinity::AffinitySet;
use crate::module::{ChallengeType, Module};

/// Returns the modules enabled for `challenge` whose affinity whitelist
/// meets at least one node requirement. Order is preserved.
pub fn eligible_modules<'a>(
    library: &'a [Module],
    challenge: ChallengeType,
    requirements: &[AffinitySet],
) -> Vec<&'a Module> {
    library
        .iter()
        .filter(|m| m.fits_challenge(challenge) && m.fits_affinities(requirements))
        .collect()
}
