//! Normalization command handlers for the CLI.
//!
//! Malformed listings are logged and skipped rather than propagated so one
//! bad element does not abort the whole batch.

use std::path::{Path, PathBuf};

use anyhow::Context;
use vodkadb_core::{AppConfig, RawProductRecord};
use vodkadb_export::{save_csv, save_json};
use vodkadb_normalize::{normalize_batch, normalize_product, parse_summary};

/// Resolved arguments of the `normalize` subcommand.
#[derive(Debug)]
pub(crate) struct NormalizeOptions {
    pub(crate) input: PathBuf,
    pub(crate) store: String,
    pub(crate) json: Option<PathBuf>,
    pub(crate) csv: Option<PathBuf>,
    /// Suffix the CSV file name with the current local time.
    pub(crate) timestamp: bool,
    pub(crate) dry_run: bool,
}

/// Normalize every listing in `options.input` and write the results.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a JSON array, the
/// stores registry exists but is invalid, or an output file cannot be written.
pub(crate) fn run_normalize(config: &AppConfig, options: &NormalizeOptions) -> anyhow::Result<()> {
    let raws = read_raw_records(&options.input)?;
    let store = resolve_store_name(&config.stores_path, &options.store)?;
    let records = normalize_batch(raws, &store);

    if options.dry_run {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let json_path = options
        .json
        .clone()
        .unwrap_or_else(|| config.default_json_path());
    let csv_path = options
        .csv
        .clone()
        .unwrap_or_else(|| config.default_csv_path());
    let timestamp = options
        .timestamp
        .then(|| chrono::Local::now().naive_local());

    if let Some(path) = save_json(&records, &json_path)? {
        println!("saved {} records to {}", records.len(), path.display());
    }
    if let Some(path) = save_csv(&records, &csv_path, timestamp)? {
        println!("saved {} records to {}", records.len(), path.display());
    }
    if records.is_empty() {
        println!("no records to save");
    }

    Ok(())
}

/// Normalize a single summary line and print the record as JSON.
///
/// # Errors
///
/// Returns an error if the stores registry exists but is invalid.
pub(crate) fn run_summary(
    config: &AppConfig,
    line: &str,
    store: &str,
    image: Option<String>,
) -> anyhow::Result<()> {
    let store = resolve_store_name(&config.stores_path, store)?;
    let record = normalize_product(parse_summary(line).into_raw(image), &store);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn read_raw_records(path: &Path) -> anyhow::Result<Vec<RawProductRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    parse_raw_records(&content)
        .with_context(|| format!("failed to parse input file {}", path.display()))
}

/// Deserialize each array element independently, skipping the ones that do
/// not match the raw listing shape.
fn parse_raw_records(content: &str) -> anyhow::Result<Vec<RawProductRecord>> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(content).context("input must be a JSON array of listings")?;

    let total = values.len();
    let records: Vec<RawProductRecord> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed listing");
                None
            }
        })
        .collect();

    tracing::info!(total, accepted = records.len(), "read raw listings");
    Ok(records)
}

/// Map a `--store` argument to the registry's display name.
///
/// Falls back to the argument verbatim when there is no registry file or no
/// matching entry.
fn resolve_store_name(stores_path: &Path, query: &str) -> anyhow::Result<String> {
    if !stores_path.exists() {
        tracing::warn!(
            path = %stores_path.display(),
            "stores registry not found; using store name verbatim"
        );
        return Ok(query.to_owned());
    }

    let registry = vodkadb_core::load_stores(stores_path)
        .with_context(|| format!("failed to load stores registry {}", stores_path.display()))?;

    match registry.find(query) {
        Some(store) => Ok(store.name.clone()),
        None => {
            tracing::warn!(store = query, "store not in registry; using name verbatim");
            Ok(query.to_owned())
        }
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
