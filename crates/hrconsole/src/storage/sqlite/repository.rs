//! SQLite repository implementation.
//!
//! Implements [`ConsoleRepository`] from `hrconsole_core::storage` using SQLite.

use std::path::Path;

use async_trait::async_trait;
use rusqlite::params_from_iter;
use tokio_rusqlite::Connection;

use hrconsole_core::catalog::TableId;
use hrconsole_core::grid::{normalize_rows, Column, Row, TableData, TableView};
use hrconsole_core::reconcile::{reconcile, ChangeSet};
use hrconsole_core::script::{split_statements, ScriptReport, StatementError};
use hrconsole_core::storage::{ConsoleRepository, RepositoryError, Result};

use super::conversions::{row_params, row_to_column, row_to_grid_row};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Read column metadata. An absent table yields no columns.
fn read_columns(conn: &rusqlite::Connection, table: TableId) -> rusqlite::Result<Vec<Column>> {
    let mut stmt = conn.prepare(&schema::table_info(table))?;
    let columns = stmt
        .query_map([], row_to_column)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

/// Read every row, assigning grid keys by position starting at 1.
fn read_rows(conn: &rusqlite::Connection, table: TableId) -> rusqlite::Result<Vec<Row>> {
    let mut stmt = conn.prepare(&schema::select_all(table))?;
    let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let mut rows = Vec::new();
    let mut cursor = stmt.query([])?;
    while let Some(row) = cursor.next()? {
        let key = rows.len() as u64 + 1;
        rows.push(row_to_grid_row(row, &names, key)?);
    }
    Ok(rows)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens a file-based database, creating the file if it doesn't exist.
    ///
    /// No tables are created here; the schema is managed through the
    /// create/drop scripts.
    pub async fn open(path: &str, foreign_keys: bool) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::configure(&conn, foreign_keys).await?;

        tracing::debug!(path, foreign_keys, "Opened SQLite database");
        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn open_in_memory(foreign_keys: bool) -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::configure(&conn, foreign_keys).await?;

        Ok(Self { conn })
    }

    async fn configure(conn: &Connection, foreign_keys: bool) -> Result<()> {
        conn.call(move |conn| {
            conn.pragma_update(None, "foreign_keys", foreign_keys)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl ConsoleRepository for SqliteRepository {
    async fn run_script(&self, path: &Path) -> ScriptReport {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "SQL script not found");
                return ScriptReport::missing(path.display());
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "SQL script unreadable");
                return ScriptReport::unreadable(path.display(), e);
            }
        };

        let statements = split_statements(&text);
        let count = statements.len();

        let result = self
            .conn
            .call(move |conn| {
                let mut report = ScriptReport {
                    statements: statements.len(),
                    errors: Vec::new(),
                };

                for (idx, statement) in statements.iter().enumerate() {
                    if let Err(e) = conn.execute_batch(statement) {
                        tracing::warn!(statement = idx + 1, error = %e, "Statement failed");
                        report.record_failure(StatementError::new(idx + 1, statement, e.to_string()));
                    }
                }

                Ok(report)
            })
            .await;

        match result {
            Ok(report) => {
                tracing::info!(
                    path = %path.display(),
                    statements = report.statements,
                    failed = report.errors.len(),
                    "Ran SQL script"
                );
                report
            }
            Err(e) => ScriptReport {
                statements: count,
                errors: vec![map_tokio_rusqlite_error(e).to_string()],
            },
        }
    }

    async fn load_table(&self, table: TableId) -> Result<TableView> {
        self.conn
            .call(move |conn| {
                let columns = read_columns(conn, table).map_err(wrap_err)?;
                if columns.is_empty() {
                    return Ok(TableView::missing(table, TableView::missing_message(table)));
                }

                let rows = read_rows(conn, table).map_err(wrap_err)?;
                Ok(TableView::Loaded(TableData {
                    table,
                    columns,
                    rows,
                }))
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn replace_rows(&self, table: TableId, rows: Vec<Row>) -> Result<ChangeSet> {
        let columns = match self.load_table(table).await? {
            TableView::Loaded(data) => data.columns,
            TableView::Missing { .. } => return Err(RepositoryError::NotFound { table }),
        };
        let rows = normalize_rows(table, &columns, rows)?;

        let changes = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                // Parent tables are rewritten wholesale; check references at COMMIT.
                tx.pragma_update(None, "defer_foreign_keys", true)
                    .map_err(wrap_err)?;

                let original = read_rows(&tx, table).map_err(wrap_err)?;
                let changes = reconcile(&columns, &original, &rows);
                if changes.is_noop() {
                    return Ok(changes);
                }

                tx.execute(&schema::delete_all(table), [])
                    .map_err(wrap_err)?;
                {
                    let mut insert = tx
                        .prepare(&schema::insert_row(table, &columns))
                        .map_err(wrap_err)?;
                    for row in &rows {
                        insert
                            .execute(params_from_iter(row_params(&columns, row)))
                            .map_err(wrap_err)?;
                    }
                }

                tx.commit().map_err(wrap_err)?;
                Ok(changes)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        tracing::info!(%table, summary = %changes.summary(), "Replaced table contents");
        Ok(changes)
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
