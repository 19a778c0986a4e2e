use vodkadb_core::AppConfig;

/// Print every store in the registry as `name (slug) url`.
///
/// # Errors
///
/// Returns an error if the registry file cannot be read, parsed, or validated.
pub(crate) fn run_list_stores(config: &AppConfig) -> anyhow::Result<()> {
    let registry = vodkadb_core::load_stores(&config.stores_path)?;

    if registry.stores.is_empty() {
        println!("no stores configured in {}", config.stores_path.display());
        return Ok(());
    }

    for store in &registry.stores {
        println!(
            "{:<20} {:<20} {}",
            store.name,
            store.slug(),
            store.url.as_deref().unwrap_or("\u{2014}")
        );
    }

    Ok(())
}
