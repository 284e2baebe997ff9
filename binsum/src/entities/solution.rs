use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::entities::Size;

/// A selection of items filling a bin exactly, stored as the sorted sizes of the selected items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Solution(Vec<Size>);

/// All solutions of a single instance, in the order they were enumerated.
pub type SolutionSet = Vec<Solution>;

impl Solution {
    /// Creates a solution from the selected sizes, in any order
    pub fn from_selection(mut sizes: Vec<Size>) -> Self {
        sizes.sort_unstable();
        Self(sizes)
    }

    pub fn sizes(&self) -> &[Size] {
        &self.0
    }

    pub fn total_size(&self) -> i128 {
        self.0.iter().map(|&s| s as i128).sum()
    }

    pub fn into_sizes(self) -> Vec<Size> {
        self.0
    }
}

/// Formats the solution as a bracketed list, e.g. `[2, 3, 5]`
impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}
