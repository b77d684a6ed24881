//! Pure edit operations on a submitted grid.
//!
//! None of these touch storage. The grid is only written back when the user
//! commits, see [`crate::reconcile`].

use std::collections::{BTreeMap, HashSet};

use crate::catalog::TableId;

use super::{coerce_cell, CellValue, Column, GridError, Row, RowKey};

/// Appends a row whose cells are all `Null` and returns its key.
///
/// The new key is one greater than the largest key in the grid, so keys stay
/// unique even after rows in the middle were removed.
pub fn append_blank_row(rows: &mut Vec<Row>, columns: &[Column]) -> RowKey {
    let key = rows.iter().map(|row| row.key).max().unwrap_or(0) + 1;
    let cells = columns
        .iter()
        .map(|column| (column.name.clone(), CellValue::Null))
        .collect();
    rows.push(Row { key, cells });
    key
}

/// Removes every row whose key is selected, preserving the order of the rest.
///
/// Keys that match no row are ignored.
pub fn remove_selected(rows: Vec<Row>, selected: &[RowKey]) -> Vec<Row> {
    let selected: HashSet<RowKey> = selected.iter().copied().collect();
    rows.into_iter()
        .filter(|row| !selected.contains(&row.key))
        .collect()
}

/// Brings submitted rows into the shape of the table.
///
/// Every cell is coerced by its column affinity, columns missing from a row
/// are filled with `Null`, and cells naming columns the table does not have
/// are rejected. Row keys must be unique.
pub fn normalize_rows(
    table: TableId,
    columns: &[Column],
    rows: Vec<Row>,
) -> Result<Vec<Row>, GridError> {
    if columns.is_empty() {
        return Err(GridError::NoColumns(table.sql_name().to_string()));
    }

    let mut seen = HashSet::with_capacity(rows.len());
    let mut normalized = Vec::with_capacity(rows.len());

    for mut row in rows {
        if !seen.insert(row.key) {
            return Err(GridError::DuplicateRowKey(row.key));
        }

        if let Some(unknown) = row
            .cells
            .keys()
            .find(|name| !columns.iter().any(|column| &column.name == *name))
        {
            return Err(GridError::UnknownColumn {
                table: table.sql_name().to_string(),
                column: unknown.clone(),
            });
        }

        let cells: BTreeMap<String, CellValue> = columns
            .iter()
            .map(|column| {
                let value = row.cells.remove(&column.name).unwrap_or_default();
                (column.name.clone(), coerce_cell(value, column.affinity()))
            })
            .collect();

        normalized.push(Row { key: row.key, cells });
    }

    Ok(normalized)
}
