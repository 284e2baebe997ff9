use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod runner;

/// Moment the process started, used to timestamp log records
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
