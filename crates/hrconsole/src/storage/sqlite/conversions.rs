//! SQLite row conversion functions.
//!
//! Conversions between SQLite values and grid types. These are testable in
//! isolation without touching a database file.

use std::collections::BTreeMap;

use hrconsole_core::grid::{CellValue, Column, Row, RowKey};
use rusqlite::types::{Value, ValueRef};

/// Convert a `PRAGMA table_info` row to a Column.
///
/// Expected columns: cid, name, type, notnull, dflt_value, pk
pub fn row_to_column(row: &rusqlite::Row) -> rusqlite::Result<Column> {
    let name: String = row.get(1)?;
    let decl_type: Option<String> = row.get(2)?;
    let not_null: i64 = row.get(3)?;
    let primary_key: i64 = row.get(5)?;

    Ok(Column {
        name,
        decl_type: decl_type.unwrap_or_default(),
        not_null: not_null != 0,
        primary_key: u32::try_from(primary_key).unwrap_or(0),
    })
}

/// Convert a result row to a grid Row keyed by column name.
pub fn row_to_grid_row(
    row: &rusqlite::Row,
    names: &[String],
    key: RowKey,
) -> rusqlite::Result<Row> {
    let mut cells = BTreeMap::new();
    for (idx, name) in names.iter().enumerate() {
        cells.insert(name.clone(), value_to_cell(row.get_ref(idx)?));
    }
    Ok(Row { key, cells })
}

pub fn value_to_cell(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(i) => CellValue::Integer(i),
        ValueRef::Real(r) => CellValue::Real(r),
        ValueRef::Text(bytes) => CellValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => CellValue::from_blob(bytes),
    }
}

pub fn cell_to_value(cell: &CellValue) -> Value {
    match cell {
        CellValue::Null => Value::Null,
        CellValue::Integer(i) => Value::Integer(*i),
        CellValue::Real(r) => Value::Real(*r),
        CellValue::Text(s) => Value::Text(s.clone()),
    }
}

/// Parameter values for inserting `row`, in column order.
pub fn row_params(columns: &[Column], row: &Row) -> Vec<Value> {
    columns
        .iter()
        .map(|column| cell_to_value(row.cell(&column.name)))
        .collect()
}
