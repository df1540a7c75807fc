//! Output module for persisting pipeline artifacts
//!
//! This module handles:
//! - The plain-text identifier list shared by both batch jobs
//! - The CSV detail table

mod identifiers;
mod table;

pub use identifiers::{load_identifiers, save_identifiers};
pub use table::write_table;

use std::path::Path;

/// Creates the parent directory of `path` if it does not exist yet
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
