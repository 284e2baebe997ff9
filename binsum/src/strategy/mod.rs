mod backtracking;
mod brute_force;

#[doc(inline)]
pub use backtracking::enumerate_subsets;
#[doc(inline)]
pub use brute_force::enumerate_subsets_brute_force;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::entities::{Instance, Size, SolutionSet};
use crate::util::assertions;

/// Procedures to enumerate all exact fillings of a bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Visits every selection of items, see [`enumerate_subsets_brute_force`]
    BruteForce,
    /// Depth-first search with pruning, see [`enumerate_subsets`]
    Backtracking,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::BruteForce, Strategy::Backtracking];

    /// Enumerates all selections of `items` which fill a bin of `capacity` exactly
    pub fn solve(&self, capacity: Size, items: &[Size]) -> SolutionSet {
        let solutions = match self {
            Strategy::BruteForce => enumerate_subsets_brute_force(capacity, items),
            Strategy::Backtracking => enumerate_subsets(capacity, items),
        };
        debug_assert!(assertions::solutions_are_sound(capacity, items, &solutions));
        solutions
    }

    pub fn solve_instance(&self, instance: &Instance) -> SolutionSet {
        self.solve(instance.capacity, &instance.items)
    }

    /// Label identifying the strategy in result records
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "BruteForce",
            Strategy::Backtracking => "BackTracking",
        }
    }

    /// Short tag identifying the strategy in file names
    pub fn file_tag(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute_force",
            Strategy::Backtracking => "btracking",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
