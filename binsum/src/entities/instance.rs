use std::fmt::{Display, Formatter};

use itertools::Itertools;

/// Integer type used for both the capacity of a bin and the sizes of the items.
pub type Size = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Instance of the subset-sum bin packing problem: a bin of fixed capacity and the items
/// which might be selected to fill it exactly.
pub struct Instance {
    /// Capacity of the bin, never negative
    pub capacity: Size,
    /// Sizes of the items, in the order they were defined. Equal sizes at different positions
    /// are different items.
    pub items: Vec<Size>,
}

impl Instance {
    pub fn new(capacity: Size, items: Vec<Size>) -> Self {
        assert!(capacity >= 0, "capacity must not be negative: {capacity}");

        Self { capacity, items }
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }
}

impl Display for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "capacity: {}, items: [{}]",
            self.capacity,
            self.items.iter().join(", ")
        )
    }
}
