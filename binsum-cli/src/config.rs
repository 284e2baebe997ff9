use binsum::strategy::Strategy;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Configuration of a run of the driver
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BinsumConfig {
    /// Strategies to run, in order. Every strategy gets its own result file
    pub strategies: Vec<Strategy>,
    /// Suffix of the result file names: `<strategy>_<input stem>_<result_name>.csv`
    pub result_name: String,
}

impl BinsumConfig {
    /// The configured strategies in order of first appearance, without repetitions
    pub fn unique_strategies(&self) -> Vec<Strategy> {
        self.strategies.iter().copied().unique().collect()
    }
}

impl Default for BinsumConfig {
    fn default() -> Self {
        Self {
            strategies: vec![Strategy::Backtracking],
            result_name: "bin_packing_results".to_string(),
        }
    }
}
