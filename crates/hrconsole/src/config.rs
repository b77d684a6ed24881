use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use hrconsole_core::script::ScriptAction;

/// Scripts shipped with the crate.
pub const DEFAULT_SCRIPTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/sql");

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (default: "local.db")
    pub database_path: String,
    /// Directory holding drop.sql, create.sql and populate.sql
    pub scripts_dir: PathBuf,
    /// Enforce foreign keys on the connection (default: true)
    pub foreign_keys: bool,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HRCONSOLE_DB` - SQLite database path (default: "local.db")
    /// - `HRCONSOLE_SCRIPTS` - SQL scripts directory (default: the crate's `sql/`)
    /// - `HRCONSOLE_FOREIGN_KEYS` - "0"/"false"/"off" disables enforcement
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_path: lookup("HRCONSOLE_DB").unwrap_or_else(|| "local.db".to_string()),
            scripts_dir: lookup("HRCONSOLE_SCRIPTS")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPTS_DIR)),
            foreign_keys: lookup("HRCONSOLE_FOREIGN_KEYS")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Full path of the script behind an action.
    pub fn script_path(&self, action: ScriptAction) -> PathBuf {
        self.scripts_dir.join(action.file_name())
    }

    pub fn with_scripts_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.scripts_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.database_path, "local.db");
        assert_eq!(config.scripts_dir, PathBuf::from(DEFAULT_SCRIPTS_DIR));
        assert!(config.foreign_keys);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HRCONSOLE_DB", "/tmp/hr.db"),
            ("HRCONSOLE_SCRIPTS", "/opt/sql"),
            ("HRCONSOLE_FOREIGN_KEYS", "off"),
            ("REQUEST_TIMEOUT_SECS", "30"),
        ]);

        assert_eq!(config.database_path, "/tmp/hr.db");
        assert_eq!(config.script_path(ScriptAction::Populate), PathBuf::from("/opt/sql/populate.sql"));
        assert!(!config.foreign_keys);
        assert_eq!(config.request_timeout_seconds, 30);
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = config_from(&[("REQUEST_TIMEOUT_SECS", "soon")]);
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("ON"));
        assert!(!parse_flag("False"));
        assert!(!parse_flag(" no "));
    }
}
