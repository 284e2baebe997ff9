use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use binsum::entities::Instance;
use binsum::io::export::export_solutions;
use binsum::io::ext_repr::ExtSolutionRow;
use binsum::strategy::Strategy;
use log::{debug, info, warn};

use crate::config::BinsumConfig;
use crate::io;

/// Outcome of running a single strategy over all instances
#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub strategy: Strategy,
    /// One record per solution, grouped by instance
    pub rows: Vec<ExtSolutionRow>,
    pub n_instances: usize,
    pub n_solutions: usize,
    /// Time spent enumerating, summed over all instances
    pub total_time: Duration,
}

/// One-line summary, e.g. `[BackTracking] 5 instances, 14 solutions in 1.2ms`
impl Display for StrategyReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} instances, {} solutions in {:?}",
            self.strategy, self.n_instances, self.n_solutions, self.total_time
        )
    }
}

/// Runs the configured strategies over a set of instances
pub struct Runner {
    pub instances: Vec<Instance>,
    pub config: BinsumConfig,
}

impl Runner {
    pub fn new(instances: Vec<Instance>, config: BinsumConfig) -> Self {
        Self { instances, config }
    }

    /// Enumerates the solutions of every instance with `strategy`, timing each instance separately
    pub fn run_strategy(&self, strategy: Strategy) -> StrategyReport {
        let mut rows = vec![];
        let mut n_solutions = 0;
        let mut total_time = Duration::ZERO;

        for (inst_id, instance) in self.instances.iter().enumerate() {
            let start = Instant::now();
            let solutions = strategy.solve_instance(instance);
            let elapsed = start.elapsed();

            debug!(
                "[{strategy}] instance {inst_id} ({} items): {} solutions in {elapsed:?}",
                instance.n_items(),
                solutions.len()
            );

            n_solutions += solutions.len();
            total_time += elapsed;
            rows.extend(export_solutions(
                inst_id,
                instance.capacity,
                strategy,
                &solutions,
                elapsed,
            ));
        }

        let report = StrategyReport {
            strategy,
            rows,
            n_instances: self.instances.len(),
            n_solutions,
            total_time,
        };
        info!("{report}");
        report
    }

    /// Runs every configured strategy and writes one result file per strategy into `output_folder`,
    /// which is created if missing. Returns the paths of the written files.
    pub fn run(&self, input_stem: &str, output_folder: &Path) -> Result<Vec<PathBuf>> {
        if !output_folder.exists() {
            fs::create_dir_all(output_folder).with_context(|| {
                format!("could not create solution folder: {}", output_folder.display())
            })?;
        }

        let strategies = self.config.unique_strategies();
        if strategies.is_empty() {
            warn!("[RUN] no strategies configured, nothing to do");
        }

        let mut written = vec![];
        for strategy in strategies {
            let report = self.run_strategy(strategy);
            let path = output_folder.join(result_file_name(
                strategy,
                input_stem,
                &self.config.result_name,
            ));
            io::write_csv(&report.rows, &path)?;
            written.push(path);
        }
        Ok(written)
    }
}

pub fn result_file_name(strategy: Strategy, input_stem: &str, result_name: &str) -> String {
    format!("{}_{input_stem}_{result_name}.csv", strategy.file_tag())
}
