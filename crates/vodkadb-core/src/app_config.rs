use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Fallback `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub stores_path: PathBuf,
    /// Directory that receives `vodkas.json` / `vodkas.csv` when no explicit
    /// output path is given.
    pub output_dir: PathBuf,
    /// Append a `_YYYYmmdd_HHMMSS` suffix to CSV file names.
    pub csv_timestamp: bool,
}

impl AppConfig {
    #[must_use]
    pub fn default_json_path(&self) -> PathBuf {
        self.output_dir.join("vodkas.json")
    }

    #[must_use]
    pub fn default_csv_path(&self) -> PathBuf {
        self.output_dir.join("vodkas.csv")
    }
}
