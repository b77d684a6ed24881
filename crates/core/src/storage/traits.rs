use std::path::Path;

use async_trait::async_trait;

use crate::catalog::TableId;
use crate::grid::{Row, TableView};
use crate::reconcile::ChangeSet;
use crate::script::ScriptReport;

use super::Result;

/// Storage operations behind the console.
#[async_trait]
pub trait ConsoleRepository: Send + Sync {
    /// Runs every statement of a SQL script file.
    ///
    /// Never fails as a whole: a missing file or a failing statement is
    /// recorded in the report and the remaining statements still run.
    async fn run_script(&self, path: &Path) -> ScriptReport;

    /// Loads a table's columns and rows. A table that does not exist is
    /// returned as [`TableView::Missing`], not as an error.
    async fn load_table(&self, table: TableId) -> Result<TableView>;

    /// Loads every catalog table in tab order.
    async fn load_all(&self) -> Result<Vec<TableView>> {
        let mut views = Vec::with_capacity(TableId::ALL.len());
        for table in TableId::ALL {
            views.push(self.load_table(table).await?);
        }
        Ok(views)
    }

    /// Replaces the full contents of a table with `rows` in one transaction.
    ///
    /// Returns how the new contents differ from the old ones. On error the
    /// table is left untouched.
    async fn replace_rows(&self, table: TableId, rows: Vec<Row>) -> Result<ChangeSet>;

    /// Checks that the database answers queries.
    async fn ping(&self) -> Result<()>;
}
