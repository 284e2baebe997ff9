use std::time::Duration;

use crate::entities::{Size, SolutionSet};
use crate::io::ext_repr::ExtSolutionRow;
use crate::strategy::Strategy;

/// Flattens the solutions of one instance into records, one per solution.
/// The elapsed time is shared by all records of the instance.
pub fn export_solutions(
    instance_id: usize,
    capacity: Size,
    strategy: Strategy,
    solutions: &SolutionSet,
    elapsed: Duration,
) -> Vec<ExtSolutionRow> {
    solutions
        .iter()
        .map(|solution| ExtSolutionRow {
            instance_id,
            bin_capacity: capacity,
            bins_array: solution.to_string(),
            method: strategy.label().to_string(),
            time_taken: elapsed.as_secs_f64(),
        })
        .collect()
}
