use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use vodkadb_core::CanonicalProductRecord;

use crate::{ensure_parent_dir, ExportError};

/// Writes `records` to `path` as a pretty-printed JSON array.
///
/// Non-ASCII text (Polish product names) is written as UTF-8, not escaped.
/// Returns `Ok(None)` without touching the filesystem when `records` is empty.
///
/// # Errors
///
/// Returns [`ExportError`] if the file cannot be created or written.
pub fn save_json(
    records: &[CanonicalProductRecord],
    path: &Path,
) -> Result<Option<PathBuf>, ExportError> {
    if records.is_empty() {
        tracing::warn!(path = %path.display(), "no records to save");
        return Ok(None);
    }

    ensure_parent_dir(path)?;
    let io_err = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| ExportError::Json {
        path: path.display().to_string(),
        source,
    })?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    tracing::info!(path = %path.display(), count = records.len(), "saved JSON");
    Ok(Some(path.to_path_buf()))
}

/// Reads records previously written by [`save_json`].
///
/// A missing file is not an error: it logs a warning and yields an empty vec.
///
/// # Errors
///
/// Returns [`ExportError`] if the file exists but cannot be read or parsed.
pub fn load_json(path: &Path) -> Result<Vec<CanonicalProductRecord>, ExportError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "JSON file does not exist");
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ExportError::Json {
        path: path.display().to_string(),
        source,
    })
}
