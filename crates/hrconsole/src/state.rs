//! Shared application state passed to every request handler.

use std::{path::PathBuf, sync::Arc};

use hrconsole_core::script::ScriptAction;
use hrconsole_core::storage::{ConsoleRepository, Result};

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// Cloned for each request handler; the repository is a trait object so
/// handlers never depend on the SQLite backend directly.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ConsoleRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ConsoleRepository>, config: Config) -> Self {
        Self {
            repo,
            config: Arc::new(config),
        }
    }

    /// Opens the configured database file.
    pub async fn from_config(config: Config) -> Result<Self> {
        let repo = SqliteRepository::open(&config.database_path, config.foreign_keys).await?;
        Ok(Self::new(Arc::new(repo), config))
    }

    /// State backed by an in-memory database (for tests).
    #[cfg(test)]
    pub async fn in_memory(config: Config) -> Self {
        let repo = SqliteRepository::open_in_memory(config.foreign_keys)
            .await
            .expect("in-memory database should open");
        Self::new(Arc::new(repo), config)
    }

    pub fn script_path(&self, action: ScriptAction) -> PathBuf {
        self.config.script_path(action)
    }
}
