use thiserror::Error;

use super::RowKey;

/// Errors raised when a submitted grid does not fit its table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Unknown column {column} for table {table}")]
    UnknownColumn { table: String, column: String },
    #[error("Row key {0} appears more than once")]
    DuplicateRowKey(RowKey),
    #[error("Table {0} has no columns to edit")]
    NoColumns(String),
}
