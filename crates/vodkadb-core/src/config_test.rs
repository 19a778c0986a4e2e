use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "VODKADB_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.stores_path, PathBuf::from("./config/stores.yaml"));
    assert_eq!(cfg.output_dir, PathBuf::from("./data"));
    assert!(cfg.csv_timestamp);
}

#[test]
fn build_app_config_fails_with_invalid_env() {
    let mut map = HashMap::new();
    map.insert("VODKADB_ENV", "qa");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VODKADB_ENV"),
        "expected InvalidEnvVar(VODKADB_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_log_level_override() {
    let mut map = HashMap::new();
    map.insert("VODKADB_LOG_LEVEL", "vodkadb_normalize=trace");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "vodkadb_normalize=trace");
}

#[test]
fn build_app_config_paths_override() {
    let mut map = HashMap::new();
    map.insert("VODKADB_STORES_PATH", "/etc/vodkadb/stores.yaml");
    map.insert("VODKADB_OUTPUT_DIR", "/var/lib/vodkadb");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.stores_path, PathBuf::from("/etc/vodkadb/stores.yaml"));
    assert_eq!(
        cfg.default_json_path(),
        PathBuf::from("/var/lib/vodkadb/vodkas.json")
    );
    assert_eq!(
        cfg.default_csv_path(),
        PathBuf::from("/var/lib/vodkadb/vodkas.csv")
    );
}

#[test]
fn build_app_config_csv_timestamp_accepts_common_spellings() {
    for (raw, expected) in [
        ("false", false),
        ("0", false),
        ("NO", false),
        ("true", true),
        ("1", true),
        ("Yes", true),
    ] {
        let mut map = HashMap::new();
        map.insert("VODKADB_CSV_TIMESTAMP", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.csv_timestamp, expected, "input: {raw}");
    }
}

#[test]
fn build_app_config_csv_timestamp_invalid() {
    let mut map = HashMap::new();
    map.insert("VODKADB_CSV_TIMESTAMP", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VODKADB_CSV_TIMESTAMP"
        ),
        "expected InvalidEnvVar(VODKADB_CSV_TIMESTAMP), got: {result:?}"
    );
}
