//! Spreadsheet-like view of a table: columns, rows keyed by column name, and
//! the edits a user can make before committing.

mod cell;
mod column;
mod edit;
mod error;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::TableId;

pub use cell::CellValue;
pub use column::{coerce_cell, Affinity, Column};
pub use edit::{append_blank_row, normalize_rows, remove_selected};
pub use error::GridError;

/// Grid-local row identity. Assigned when a table is loaded (1-based row
/// position) and carried through every edit until the grid is committed.
pub type RowKey = u64;

/// One row of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub key: RowKey,
    #[serde(default)]
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(key: RowKey) -> Self {
        Self {
            key,
            cells: BTreeMap::new(),
        }
    }

    pub fn with_cell(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    /// Cell for a column, `Null` when absent.
    pub fn cell(&self, column: &str) -> &CellValue {
        const NULL: &CellValue = &CellValue::Null;
        self.cells.get(column).unwrap_or(NULL)
    }
}

/// The contents of a table that exists and has columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub table: TableId,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

/// What the console can show for a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TableView {
    Loaded(TableData),
    /// The table does not exist (e.g. after a drop) or reports no columns.
    Missing { table: TableId, reason: String },
}

impl TableView {
    pub fn missing(table: TableId, reason: impl Into<String>) -> Self {
        TableView::Missing {
            table,
            reason: reason.into(),
        }
    }

    pub fn table(&self) -> TableId {
        match self {
            TableView::Loaded(data) => data.table,
            TableView::Missing { table, .. } => *table,
        }
    }

    pub fn data(&self) -> Option<&TableData> {
        match self {
            TableView::Loaded(data) => Some(data),
            TableView::Missing { .. } => None,
        }
    }

    /// Message shown in place of the grid for a missing table.
    pub fn missing_message(table: TableId) -> String {
        format!("{} not found or has no columns", table.sql_name())
    }
}

/// Grid contents sent back by the browser for an edit or a commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridSubmission {
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Keys of the rows ticked in the grid.
    #[serde(default)]
    pub selected: Vec<RowKey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_cell_defaults_to_null() {
        let row = Row::new(1).with_cell("EMP_ID", 3_i64);
        assert_eq!(row.cell("EMP_ID"), &CellValue::Integer(3));
        assert_eq!(row.cell("EMAIL"), &CellValue::Null);
    }

    #[test]
    fn test_table_view_serializes_with_status_tag() {
        let view = TableView::missing(TableId::Leave, "no such table: LEAVE");
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["status"], "missing");
        assert_eq!(json["table"], "leave");
        assert_eq!(json["reason"], "no such table: LEAVE");
    }

    #[test]
    fn test_loaded_view_exposes_data() {
        let view = TableView::Loaded(TableData {
            table: TableId::Department,
            columns: vec![Column::new("DEPT_ID", "INTEGER")],
            rows: vec![Row::new(1).with_cell("DEPT_ID", 1_i64)],
        });

        assert_eq!(view.table(), TableId::Department);
        assert_eq!(view.data().map(|d| d.rows.len()), Some(1));
        assert_eq!(serde_json::to_value(&view).unwrap()["status"], "loaded");
    }

    #[test]
    fn test_missing_message() {
        assert_eq!(
            TableView::missing_message(TableId::PayrollRecord),
            "PAYROLL_RECORD not found or has no columns"
        );
    }

    #[test]
    fn test_submission_defaults() {
        let submission: GridSubmission = serde_json::from_str(r#"{"rows":[{"key":2}]}"#).unwrap();
        assert_eq!(submission.rows[0].key, 2);
        assert!(submission.rows[0].cells.is_empty());
        assert!(submission.selected.is_empty());
    }
}
