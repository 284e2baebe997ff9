use std::collections::HashMap;

use itertools::Itertools;
use log::error;

use crate::entities::{Size, Solution};

/// Checks whether every solution sums to `capacity` and only uses each item at most once.
pub fn solutions_are_sound(capacity: Size, items: &[Size], solutions: &[Solution]) -> bool {
    let available = items.iter().counts();

    solutions
        .iter()
        .all(|s| solution_is_sound(capacity, &available, s))
}

fn solution_is_sound(capacity: Size, available: &HashMap<&Size, usize>, solution: &Solution) -> bool {
    if solution.total_size() != capacity as i128 {
        error!("solution {solution} does not sum to {capacity}");
        return false;
    }
    for (size, used) in solution.sizes().iter().counts() {
        if available.get(size).copied().unwrap_or(0) < used {
            error!("solution {solution} uses item {size} more often than available");
            return false;
        }
    }
    true
}

/// Checks whether two sets contain the same solutions, irrespective of their order.
pub fn same_solutions(a: &[Solution], b: &[Solution]) -> bool {
    a.iter().sorted().eq(b.iter().sorted())
}
