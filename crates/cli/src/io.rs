//! Reading and writing trait vectors.
//!
//! Inputs are JSON arrays of numbers; `-` reads standard input. Outputs go to
//! standard output as JSON so they can be piped between subcommands.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::Path;

/// Read a JSON array of numbers from `path`, or from stdin if `path` is `-`.
pub fn read_values(path: &Path) -> Result<Vec<f64>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read standard input")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    let values: Vec<f64> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of numbers", path.display()))?;
    tracing::debug!(path = %path.display(), n = values.len(), "read values");
    Ok(values)
}

/// Write `value` to stdout as compact JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, value).context("Failed to serialize output")?;
    writeln!(out)?;
    Ok(())
}
