mod normalize;
mod stores;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::normalize::NormalizeOptions;

#[derive(Debug, Parser)]
#[command(name = "vodkadb-cli")]
#[command(about = "Normalize vodka listings scraped from Polish retail sites")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize a JSON array of raw listings and export JSON and CSV
    Normalize {
        /// JSON file holding an array of raw listings
        #[arg(long)]
        input: PathBuf,
        /// Store display name or slug from the stores registry
        #[arg(long)]
        store: String,
        /// JSON output path (defaults to `<output dir>/vodkas.json`)
        #[arg(long)]
        json: Option<PathBuf>,
        /// CSV output path (defaults to `<output dir>/vodkas.csv`)
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Write the CSV to the exact path without a timestamp suffix
        #[arg(long)]
        no_timestamp: bool,
        /// Print normalized records to stdout instead of writing files
        #[arg(long)]
        dry_run: bool,
    },
    /// Normalize a single `name | volume | ABV` summary line
    Summary {
        /// Summary text, e.g. "Soplica Cytrynówka | 0,5L | 28%"
        line: String,
        #[arg(long)]
        store: String,
        /// Product image URL to attach to the record
        #[arg(long)]
        image: Option<String>,
    },
    /// List stores from the registry
    Stores,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = vodkadb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Normalize {
            input,
            store,
            json,
            csv,
            no_timestamp,
            dry_run,
        } => {
            let options = NormalizeOptions {
                input,
                store,
                json,
                csv,
                timestamp: config.csv_timestamp && !no_timestamp,
                dry_run,
            };
            normalize::run_normalize(&config, &options)?;
        }
        Commands::Summary { line, store, image } => {
            normalize::run_summary(&config, &line, &store, image)?;
        }
        Commands::Stores => stores::run_list_stores(&config)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
