use itertools::Itertools;

use crate::entities::{Size, Solution, SolutionSet};

/// Enumerates every selection of item positions whose sizes sum exactly to `capacity`,
/// by visiting all `2^n` selections without any pruning.
///
/// Selections are visited in order of increasing size, and lexicographically by position
/// within the same size. Mostly useful to cross-validate [`enumerate_subsets`](super::enumerate_subsets).
///
/// Unlike the backtracking search, a selection matching the capacity is not a dead end:
/// adding zero-sized items to it yields more solutions.
pub fn enumerate_subsets_brute_force(capacity: Size, items: &[Size]) -> SolutionSet {
    let capacity = capacity as i128;

    (0..=items.len())
        .flat_map(|k| (0..items.len()).combinations(k))
        .filter(|positions| positions.iter().map(|&i| items[i] as i128).sum::<i128>() == capacity)
        .map(|positions| Solution::from_selection(positions.iter().map(|&i| items[i]).collect()))
        .collect()
}
