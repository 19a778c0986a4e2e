use std::path::PathBuf;

use vodkadb_core::{CanonicalProductRecord, Environment, RawField};

use super::*;

const STORES_YAML: &str = r"
stores:
  - name: Biedronka
    url: https://www.biedronka.pl/pl/piwniczka-biedronki,kategoria,wodka
  - name: Lidl
";

const ZUBROWKA_JSON: &str = r#"{
    "name": "Wódka Żubrówka Biała 37,5%",
    "price": "34,99 zł",
    "volume": "0,5l",
    "alcoholPercentage": "",
    "imageSrc": "http://x/y.jpg"
}"#;

fn test_config(dir: &Path) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "warn".to_string(),
        stores_path: dir.join("stores.yaml"),
        output_dir: dir.join("data"),
        csv_timestamp: false,
    }
}

fn options(input: PathBuf, store: &str) -> NormalizeOptions {
    NormalizeOptions {
        input,
        store: store.to_string(),
        json: None,
        csv: None,
        timestamp: false,
        dry_run: false,
    }
}

// -----------------------------------------------------------------------
// parse_raw_records
// -----------------------------------------------------------------------

#[test]
fn parse_raw_records_accepts_text_and_numeric_fields() {
    let wyborowa =
        r#"{"name": "Wódka Wyborowa", "price": 29.99, "volume": 0.7, "alcoholPercentage": 40}"#;
    let records = parse_raw_records(&format!("[{ZUBROWKA_JSON}, {wyborowa}]")).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].price, RawField::Text("34,99 zł".to_string()));
    assert_eq!(records[1].volume, RawField::Number(0.7));
    assert_eq!(records[1].image_url, None);
}

#[test]
fn parse_raw_records_skips_malformed_elements() {
    let records = parse_raw_records(
        r#"[
            {"name": "Wódka Cytrynowa"},
            42,
            {"name": "Wódka Wiśniowa", "price": true},
            {"name": "Wódka Czysta", "price": null}
        ]"#,
    )
    .unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Wódka Cytrynowa", "Wódka Czysta"]);
    assert_eq!(records[1].price, RawField::Absent);
}

#[test]
fn parse_raw_records_rejects_non_array() {
    assert!(parse_raw_records(r#"{"name": "Wódka"}"#).is_err());
    assert!(parse_raw_records("not json").is_err());
}

#[test]
fn parse_raw_records_empty_array() {
    assert!(parse_raw_records("[]").unwrap().is_empty());
}

// -----------------------------------------------------------------------
// resolve_store_name
// -----------------------------------------------------------------------

#[test]
fn resolve_store_name_uses_registry_display_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stores.yaml");
    std::fs::write(&path, STORES_YAML).unwrap();

    assert_eq!(resolve_store_name(&path, "biedronka").unwrap(), "Biedronka");
    assert_eq!(resolve_store_name(&path, "LIDL").unwrap(), "Lidl");
}

#[test]
fn resolve_store_name_unknown_store_is_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stores.yaml");
    std::fs::write(&path, STORES_YAML).unwrap();

    assert_eq!(resolve_store_name(&path, "Żabka").unwrap(), "Żabka");
}

#[test]
fn resolve_store_name_without_registry_is_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");
    assert_eq!(resolve_store_name(&path, "TestStore").unwrap(), "TestStore");
}

#[test]
fn resolve_store_name_invalid_registry_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stores.yaml");
    std::fs::write(&path, "stores:\n  - name: Lidl\n  - name: lidl\n").unwrap();
    assert!(resolve_store_name(&path, "Lidl").is_err());
}

// -----------------------------------------------------------------------
// run_normalize
// -----------------------------------------------------------------------

#[test]
fn run_normalize_writes_json_and_csv() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::write(&config.stores_path, STORES_YAML).unwrap();

    let input = dir.path().join("raw.json");
    std::fs::write(&input, format!("[{ZUBROWKA_JSON}]")).unwrap();

    run_normalize(&config, &options(input, "biedronka")).unwrap();

    let records = vodkadb_export::load_json(&config.default_json_path()).unwrap();
    assert_eq!(
        records,
        vec![CanonicalProductRecord {
            name: "Żubrówka Biała".to_string(),
            flavor: vodkadb_core::Flavor::Pure,
            volume_liters: Some(0.5),
            alcohol_percentage: Some(37),
            price: Some(34.99),
            store: "Biedronka".to_string(),
            image_url: Some("http://x/y.jpg".to_string()),
        }]
    );

    let csv = std::fs::read_to_string(config.default_csv_path()).unwrap();
    assert!(csv.contains("Żubrówka Biała,pure,0.5,37,34.99,Biedronka,http://x/y.jpg"));
}

#[test]
fn run_normalize_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let input = dir.path().join("raw.json");
    std::fs::write(&input, r#"[{"name": "Wódka Wyborowa", "price": 29.99}]"#).unwrap();

    let mut opts = options(input, "Dino");
    opts.dry_run = true;
    run_normalize(&config, &opts).unwrap();

    assert!(!config.output_dir.exists());
}

#[test]
fn run_normalize_missing_input_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let err = run_normalize(&config, &options(dir.path().join("nope.json"), "Dino")).unwrap_err();
    assert!(err.to_string().contains("failed to read input file"));
}
