//! Persistence of canonical records as a JSON document and CSV rows.

pub mod csv;
pub mod error;
pub mod json;

pub use crate::csv::{save_csv, timestamped_path, CSV_COLUMNS};
pub use error::ExportError;
pub use json::{load_json, save_json};

use std::path::Path;

/// Creates the parent directory of `path` if it does not exist yet.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), ExportError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.display().to_string(),
                source,
            })
        }
        _ => Ok(()),
    }
}
