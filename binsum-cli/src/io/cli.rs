use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Enumerates every exact filling of a bin for each instance of a file
/// and writes the solutions of every configured strategy to CSV.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Instance file, one instance per line: capacity followed by item sizes
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder receiving one `<file_tag>_<stem>_<result_name>.csv` per strategy, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON config `{"strategies": [...], "result_name": ...}`, the default config is used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
