//! CSV table writer
//!
//! The header row comes from the field names of the first record. All
//! records share one shape because they are built by the same type.

use crate::{HarvestError, Result};
use serde::Serialize;
use std::path::Path;

/// Writes `records` to `path` as CSV with a header row
///
/// # Errors
///
/// * `HarvestError::EmptyInput` - `records` is empty; no file is created
/// * `HarvestError::Csv` / `HarvestError::Io` - the file could not be written
pub fn write_table<R: Serialize>(records: &[R], path: &Path) -> Result<()> {
    if records.is_empty() {
        return Err(HarvestError::EmptyInput);
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
