#[cfg(test)]
#[path = "../../tests/unit/solver/selection_test.rs"]
mod selection_test;

use crate::utils::{compare_floats, Random};
use std::cmp::Ordering;

/// Rank of an individual in the population together with its crowding distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ranking {
    /// Index of the pareto front, zero is the best.
    pub rank: usize,
    /// Crowding distance within the front.
    pub crowding_distance: f64,
}

/// Compares two ranked individuals given as `(index, ranking)`: lower rank first, then larger
/// crowding distance, then lower index.
pub fn crowded_compare(a: (usize, &Ranking), b: (usize, &Ranking)) -> Ordering {
    a.1.rank
        .cmp(&b.1.rank)
        .then_with(|| compare_floats(b.1.crowding_distance, a.1.crowding_distance))
        .then_with(|| a.0.cmp(&b.0))
}

/// Picks two individuals uniformly at random and returns index of the better one.
pub fn binary_tournament(rankings: &[Ranking], random: &dyn Random) -> usize {
    debug_assert!(!rankings.is_empty());

    let first = random.uniform_index(rankings.len());
    let second = random.uniform_index(rankings.len());

    match crowded_compare((first, &rankings[first]), (second, &rankings[second])) {
        Ordering::Greater => second,
        _ => first,
    }
}

/// Selects `count` parents by repeated binary tournaments.
pub fn select_parents(rankings: &[Ranking], count: usize, random: &dyn Random) -> Vec<usize> {
    (0..count).map(|_| binary_tournament(rankings, random)).collect()
}
