use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::debug;

use crate::entities::{Instance, Size};

/// Parses all instances from the line-oriented text format:
/// one instance per line, whitespace separated integers, the first being the capacity
/// and the remainder the item sizes. Blank lines are skipped.
pub fn parse_instances(text: &str) -> Result<Vec<Instance>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_instance(line).with_context(|| format!("invalid instance on line {}", i + 1)))
        .collect()
}

/// Parses a single instance from one non-blank line
pub fn parse_instance(line: &str) -> Result<Instance> {
    let mut tokens = line.split_whitespace();

    let capacity = match tokens.next() {
        Some(token) => parse_size(token)?,
        None => bail!("missing capacity"),
    };
    if capacity < 0 {
        bail!("capacity must not be negative: {capacity}");
    }
    let items = tokens.map(parse_size).collect::<Result<Vec<_>>>()?;

    Ok(Instance::new(capacity, items))
}

fn parse_size(token: &str) -> Result<Size> {
    token
        .parse::<Size>()
        .with_context(|| format!("not an integer: {token:?}"))
}

/// Reads and parses all instances from a file
pub fn read_instances(path: &Path) -> Result<Vec<Instance>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read instance file: {}", path.display()))?;
    let instances = parse_instances(&text)
        .with_context(|| format!("could not parse instance file: {}", path.display()))?;

    debug!("[IMPORT] parsed {} instances from {}", instances.len(), path.display());

    Ok(instances)
}
