//! SQL statement builders.
//!
//! Pure functions, no I/O. Table names only ever come from the catalog and
//! column names from `PRAGMA table_info`; both are quoted.

use hrconsole_core::catalog::TableId;
use hrconsole_core::grid::Column;

pub const PING: &str = "SELECT 1";

/// Quote an identifier for SQLite, doubling embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn table_info(table: TableId) -> String {
    format!("PRAGMA table_info({})", table.quoted())
}

pub fn select_all(table: TableId) -> String {
    format!("SELECT * FROM {}", table.quoted())
}

pub fn delete_all(table: TableId) -> String {
    format!("DELETE FROM {}", table.quoted())
}

/// `INSERT` with one positional parameter per column, in column order.
pub fn insert_row(table: TableId, columns: &[Column]) -> String {
    let names: Vec<String> = columns.iter().map(|c| quote_ident(&c.name)).collect();
    let params: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.quoted(),
        names.join(", "),
        params.join(", ")
    )
}
