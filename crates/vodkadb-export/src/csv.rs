//! Fixed-column CSV rows for spreadsheet consumers.
//!
//! Missing numeric values render as empty cells; quoting follows RFC 4180.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use vodkadb_core::CanonicalProductRecord;

use crate::{ensure_parent_dir, ExportError};

pub const CSV_COLUMNS: [&str; 7] = [
    "name",
    "flavor",
    "volume",
    "alcoholPercentage",
    "price",
    "store",
    "imageSrc",
];

/// Writes `records` as CSV rows under [`CSV_COLUMNS`].
///
/// When `timestamp` is set the file name gains a `_YYYYmmdd_HHMMSS` suffix
/// (see [`timestamped_path`]) so repeated runs do not overwrite each other.
/// Returns the path actually written, or `Ok(None)` when `records` is empty.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created or written.
pub fn save_csv(
    records: &[CanonicalProductRecord],
    path: &Path,
    timestamp: Option<NaiveDateTime>,
) -> Result<Option<PathBuf>, ExportError> {
    if records.is_empty() {
        tracing::warn!(path = %path.display(), "no records to save");
        return Ok(None);
    }

    let target = match timestamp {
        Some(ts) => timestamped_path(path, ts),
        None => path.to_path_buf(),
    };

    ensure_parent_dir(&target)?;
    let io_err = |source| ExportError::Io {
        path: target.display().to_string(),
        source,
    };

    let file = File::create(&target).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CSV_COLUMNS.join(",")).map_err(io_err)?;
    for record in records {
        writeln!(writer, "{}", render_row(record)).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    tracing::info!(path = %target.display(), count = records.len(), "saved CSV");
    Ok(Some(target))
}

/// Inserts `_YYYYmmdd_HHMMSS` between the file stem and its extension.
///
/// `data/vodkas.csv` at 2024-03-01 12:30:05 → `data/vodkas_20240301_123005.csv`.
#[must_use]
pub fn timestamped_path(path: &Path, timestamp: NaiveDateTime) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = timestamp.format("%Y%m%d_%H%M%S");
    let file_name = match path.extension() {
        Some(ext) => format!("{stem}_{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{suffix}"),
    };
    path.with_file_name(file_name)
}

fn render_row(record: &CanonicalProductRecord) -> String {
    let cells = [
        escape(&record.name),
        record.flavor.to_string(),
        record.volume_liters.map(|v| v.to_string()).unwrap_or_default(),
        record
            .alcohol_percentage
            .map(|v| v.to_string())
            .unwrap_or_default(),
        record.price.map(|v| format!("{v:.2}")).unwrap_or_default(),
        escape(&record.store),
        record.image_url.as_deref().map(escape).unwrap_or_default(),
    ];
    cells.join(",")
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
