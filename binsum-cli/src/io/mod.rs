use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use binsum::io::ext_repr::ExtSolutionRow;
use csv::WriterBuilder;
use log::{Level, LevelFilter, info, log, warn};

use crate::EPOCH;
use crate::config::BinsumConfig;

pub mod cli;

/// Columns of the result files, in order
pub const CSV_HEADER: [&str; 5] = [
    "instance_id",
    "bin_capacity",
    "bins_array",
    "method",
    "time_taken",
];

/// Reads the config file if one is given, falls back to [`BinsumConfig::default`] otherwise
pub fn load_config(path: Option<&Path>) -> Result<BinsumConfig> {
    match path {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            Ok(BinsumConfig::default())
        }
        Some(path) => read_config(path),
    }
}

pub fn read_config(path: &Path) -> Result<BinsumConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

/// Writes the records to a CSV file, the header is written even if there are no records
pub fn write_csv(rows: &[ExtSolutionRow], path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("could not create result file: {}", path.display()))?;

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(
        "results written to {:?}",
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(Level::Info, "[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
