//! Derived statistics over a catch snapshot.
//!
//! Pure functions, recomputed on every call; deterministic for a given
//! snapshot and free of side effects.

use std::collections::HashSet;

use crate::models::Catch;

pub fn total_catches(snapshot: &[Catch]) -> usize {
    snapshot.len()
}

/// The heaviest catch, or `None` for an empty snapshot.
///
/// Ties on weight resolve to the earliest-logged of the tied catches, so the
/// result is stable across recomputations of the same snapshot.
pub fn biggest_fish(snapshot: &[Catch]) -> Option<&Catch> {
    snapshot
        .iter()
        .reduce(|best, catch| if catch.weight > best.weight { catch } else { best })
}

/// Number of distinct species strings. Exact, case-sensitive match; no
/// whitespace or case normalization.
pub fn unique_species_count(snapshot: &[Catch]) -> usize {
    snapshot
        .iter()
        .map(|catch| catch.species.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// The newest catches first, at most `limit` of them. Catches sharing a
/// timestamp keep their insertion order.
pub fn recent_catches(snapshot: &[Catch], limit: usize) -> Vec<&Catch> {
    let mut ordered: Vec<&Catch> = snapshot.iter().collect();
    ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    ordered.truncate(limit);
    ordered
}
