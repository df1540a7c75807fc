//! Identifier list files
//!
//! One identifier per line, UTF-8, no header, every line newline-terminated.

use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads identifiers from `path`, one per line
///
/// Surrounding whitespace is trimmed. No other validation is applied, so a
/// blank line comes back as an empty identifier.
pub fn load_identifiers(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);

    let mut identifiers = Vec::new();
    for line in reader.lines() {
        identifiers.push(line?.trim().to_string());
    }

    tracing::debug!(
        "Loaded {} identifiers from {}",
        identifiers.len(),
        path.display()
    );
    Ok(identifiers)
}

/// Writes identifiers to `path`, one per line, in iteration order
///
/// Passing an `IdentifierSet` writes them in discovery order.
pub fn save_identifiers<I>(identifiers: I, path: &Path) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path)?);

    let mut count = 0usize;
    for identifier in identifiers {
        writeln!(writer, "{}", identifier.as_ref())?;
        count += 1;
    }
    writer.flush()?;

    tracing::info!("Wrote {} identifiers to {}", count, path.display());
    Ok(())
}
