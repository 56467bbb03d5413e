//! Runtime configuration for store location and logging.
//!
//! Values come from defaults overridden by `PRIOLIST_*` environment
//! variables; blank variables are ignored.

use crate::logging::default_log_level;
use crate::repo::project_store::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "PRIOLIST_DATA_DIR";
pub const DB_FILE_ENV: &str = "PRIOLIST_DB_FILE";
pub const STORAGE_KEY_ENV: &str = "PRIOLIST_STORAGE_KEY";
pub const LOG_LEVEL_ENV: &str = "PRIOLIST_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "priolist.sqlite3";
const DEFAULT_DATA_DIR_NAME: &str = "priolist";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the database file and the `logs/` folder.
    pub data_dir: PathBuf,
    pub db_file_name: String,
    /// Key of the project blob inside the key-value store.
    pub storage_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: std::env::temp_dir().join(DEFAULT_DATA_DIR_NAME),
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: default_log_level().to_string(),
        }
    }
}

impl AppConfig {
    /// Builds config from defaults and process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds config from defaults and a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(dir) = read(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(file) = read(DB_FILE_ENV) {
            config.db_file_name = file;
        }
        if let Some(key) = read(STORAGE_KEY_ENV) {
            config.storage_key = key;
        }
        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        config
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DATA_DIR_ENV, DB_FILE_ENV, STORAGE_KEY_ENV};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn lookup_overrides_defaults_and_ignores_blank_values() {
        let vars: HashMap<&str, &str> = [
            (DATA_DIR_ENV, "/var/lib/priolist"),
            (DB_FILE_ENV, "  "),
            (STORAGE_KEY_ENV, " tasks "),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/priolist"));
        assert_eq!(config.db_file_name, "priolist.sqlite3");
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(
            config.db_path(),
            PathBuf::from("/var/lib/priolist/priolist.sqlite3")
        );
        assert_eq!(config.log_dir(), PathBuf::from("/var/lib/priolist/logs"));
    }

    #[test]
    fn default_uses_projects_key() {
        assert_eq!(AppConfig::default().storage_key, "projects");
    }
}
