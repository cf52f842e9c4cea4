//! Loading the values to commit to

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use log::info;

/// Values used when no input file is given
pub(crate) const DEMO_VALUES: [&str; 3] = ["test1@gmail.com", "test2@gmail.com", "test3@gmail.com"];

/// Read values from `path`, or fall back to the demo list
pub(crate) fn load_values(path: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let Some(path) = path else {
        info!("no input file given, using {} demo values", DEMO_VALUES.len());
        return Ok(DEMO_VALUES.iter().map(ToString::to_string).collect());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read values from {}", path.display()))?;
    let values = parse_values(&contents);
    if values.is_empty() {
        bail!("{} contains no values", path.display());
    }

    info!("loaded {} values from {}", values.len(), path.display());
    Ok(values)
}

/// One value per line; blank lines are skipped and `\r` is trimmed
pub(crate) fn parse_values(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}
