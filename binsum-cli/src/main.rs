use anyhow::{Context, Result};
use binsum::io::import::read_instances;
use binsum_cli::io;
use binsum_cli::io::cli::Cli;
use binsum_cli::runner::Runner;
use clap::Parser as ClapParser;
use log::info;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = io::load_config(args.config_file.as_deref())?;

    info!("Successfully parsed BinsumConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    let instances = read_instances(&args.input_file)?;
    info!(
        "[MAIN] Parsed {} instances from {}",
        instances.len(),
        args.input_file.display()
    );

    Runner::new(instances, config).run(input_file_stem, &args.solution_folder)?;

    Ok(())
}
