use serde::{Deserialize, Serialize};

use crate::entities::Size;

/// External representation of a single [`Solution`](crate::entities::Solution) of an instance,
/// flattened into one record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExtSolutionRow {
    /// Index of the instance within its source file (0-based)
    pub instance_id: usize,
    /// Capacity of the bin
    pub bin_capacity: Size,
    /// Sorted sizes of the selected items, formatted as `[2, 3, 5]`
    pub bins_array: String,
    /// Label of the strategy which produced the solution
    pub method: String,
    /// Time spent enumerating all solutions of the instance, in seconds
    pub time_taken: f64,
}
