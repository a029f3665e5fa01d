//! Configuration management
//!
//! Env-style configuration surface. Every path defaults to a location
//! under the pocketbook data directory and can be overridden individually:
//!
//! - `POCKETBOOK_CATEGORIES_FILE`, `POCKETBOOK_MAPPINGS_FILE`,
//!   `POCKETBOOK_CREDENTIALS_FILE` - the three local JSON stores
//! - `POCKETBOOK_LEDGER_FILE` - the local CSV ledger
//! - `POCKETBOOK_SOURCE_URL`, `POCKETBOOK_SOURCE_CERT`,
//!   `POCKETBOOK_SOURCE_KEY` - open-banking provider endpoint and mTLS pair
//! - `POCKETBOOK_SHEET_ID`, `POCKETBOOK_LEDGER_CREDS` - spreadsheet ledger
//!   id and service-account credential path

use std::path::{Path, PathBuf};

/// Provider endpoint settings, carried for whoever wires a real source
/// adapter; the core only ships the demo source.
#[derive(Debug, Clone, Default)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub cert_path: Option<PathBuf>,
    pub key_path: Option<PathBuf>,
}

/// Spreadsheet ledger settings, carried for a real ledger adapter
#[derive(Debug, Clone, Default)]
pub struct LedgerConfig {
    pub spreadsheet_id: Option<String>,
    pub credentials_path: Option<PathBuf>,
}

/// Pocketbook configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub categories_file: PathBuf,
    pub mappings_file: PathBuf,
    pub credentials_file: PathBuf,
    pub ledger_file: PathBuf,
    pub source: SourceConfig,
    pub ledger: LedgerConfig,
}

impl Config {
    /// Build the configuration for a data directory, applying env overrides
    pub fn load(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            categories_file: env_path("POCKETBOOK_CATEGORIES_FILE")
                .unwrap_or_else(|| data_dir.join("categories.json")),
            mappings_file: env_path("POCKETBOOK_MAPPINGS_FILE")
                .unwrap_or_else(|| data_dir.join("mappings.json")),
            credentials_file: env_path("POCKETBOOK_CREDENTIALS_FILE")
                .unwrap_or_else(|| data_dir.join("creds").join("tokens.json")),
            ledger_file: env_path("POCKETBOOK_LEDGER_FILE")
                .unwrap_or_else(|| data_dir.join("ledger.csv")),
            source: SourceConfig {
                base_url: env_string("POCKETBOOK_SOURCE_URL"),
                cert_path: env_path("POCKETBOOK_SOURCE_CERT"),
                key_path: env_path("POCKETBOOK_SOURCE_KEY"),
            },
            ledger: LedgerConfig {
                spreadsheet_id: env_string("POCKETBOOK_SHEET_ID"),
                credentials_path: env_path("POCKETBOOK_LEDGER_CREDS"),
            },
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_path(name: &str) -> Option<PathBuf> {
    env_string(name).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_live_under_data_dir() {
        let config = Config::load(Path::new("/tmp/pb-test-home"));
        assert_eq!(
            config.categories_file,
            PathBuf::from("/tmp/pb-test-home/categories.json")
        );
        assert_eq!(
            config.credentials_file,
            PathBuf::from("/tmp/pb-test-home/creds/tokens.json")
        );
        assert_eq!(config.ledger_file, PathBuf::from("/tmp/pb-test-home/ledger.csv"));
    }
}
