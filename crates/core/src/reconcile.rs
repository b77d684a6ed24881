//! Reconciling an edited grid against the rows currently stored.
//!
//! The storage layer always writes a committed grid by replacing the whole
//! table. This module works out what that replacement amounts to so it can be
//! reported back to the user.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use crate::grid::{Column, Row};

/// Counts of row changes between the stored table and an edited grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    pub inserted: usize,
    pub updated: usize,
    pub deleted: usize,
    pub unchanged: usize,
}

impl ChangeSet {
    /// True when committing would leave the table as it is.
    pub fn is_noop(&self) -> bool {
        self.inserted == 0 && self.updated == 0 && self.deleted == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} inserted, {} updated, {} deleted",
            self.inserted, self.updated, self.deleted
        )
    }
}

/// The value a row is matched on.
///
/// Tables with a primary key match on the key columns, in key order. Tables
/// without one match on every column. `None` means the row has no identity
/// yet (all key cells are `Null`) and can only be an insert.
pub fn row_identity(columns: &[Column], row: &Row) -> Option<Vec<String>> {
    let mut key_columns: Vec<&Column> = columns.iter().filter(|c| c.is_primary_key()).collect();
    key_columns.sort_by_key(|c| c.primary_key);

    if key_columns.is_empty() {
        return Some(row_tokens(columns.iter(), row));
    }

    if key_columns.iter().all(|c| row.cell(&c.name).is_null()) {
        return None;
    }

    Some(row_tokens(key_columns.into_iter(), row))
}

fn row_tokens<'a>(columns: impl Iterator<Item = &'a Column>, row: &Row) -> Vec<String> {
    columns.map(|c| row.cell(&c.name).identity_token()).collect()
}

fn same_cells(columns: &[Column], a: &Row, b: &Row) -> bool {
    columns
        .iter()
        .all(|c| a.cell(&c.name).identity_token() == b.cell(&c.name).identity_token())
}

/// Set difference between `original` and `edited` by row identity.
///
/// Rows are matched one-to-one, so duplicate rows in a table without a
/// primary key are counted individually.
pub fn reconcile(columns: &[Column], original: &[Row], edited: &[Row]) -> ChangeSet {
    let mut changes = ChangeSet::default();
    let mut pending: HashMap<Vec<String>, VecDeque<&Row>> = HashMap::new();

    for row in original {
        match row_identity(columns, row) {
            Some(identity) => pending.entry(identity).or_default().push_back(row),
            None => changes.deleted += 1,
        }
    }

    for row in edited {
        let matched = row_identity(columns, row)
            .and_then(|identity| pending.get_mut(&identity))
            .and_then(VecDeque::pop_front);

        match matched {
            Some(stored) if same_cells(columns, stored, row) => changes.unchanged += 1,
            Some(_) => changes.updated += 1,
            None => changes.inserted += 1,
        }
    }

    changes.deleted += pending.values().map(VecDeque::len).sum::<usize>();
    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellValue;

    fn keyed_columns() -> Vec<Column> {
        vec![
            Column::new("EMP_ID", "INTEGER").with_primary_key(1),
            Column::new("NAME", "TEXT"),
        ]
    }

    fn emp(key: u64, id: impl Into<CellValue>, name: &str) -> Row {
        Row::new(key).with_cell("EMP_ID", id).with_cell("NAME", name)
    }

    #[test]
    fn test_identical_grid_is_noop() {
        let rows = vec![emp(1, 1_i64, "Ada"), emp(2, 2_i64, "Grace")];
        let changes = reconcile(&keyed_columns(), &rows, &rows);

        assert!(changes.is_noop());
        assert_eq!(changes.unchanged, 2);
    }

    #[test]
    fn test_detects_insert_update_delete() {
        let original = vec![emp(1, 1_i64, "Ada"), emp(2, 2_i64, "Grace"), emp(3, 3_i64, "Alan")];
        let edited = vec![
            emp(1, 1_i64, "Ada"),
            emp(2, 2_i64, "Grace Hopper"),
            emp(4, 4_i64, "Barbara"),
        ];

        let changes = reconcile(&keyed_columns(), &original, &edited);

        assert_eq!(
            changes,
            ChangeSet {
                inserted: 1,
                updated: 1,
                deleted: 1,
                unchanged: 1,
            }
        );
        assert_eq!(changes.summary(), "1 inserted, 1 updated, 1 deleted");
    }

    #[test]
    fn test_blank_key_is_always_an_insert() {
        let original = vec![emp(1, 1_i64, "Ada")];
        let edited = vec![emp(1, 1_i64, "Ada"), emp(2, CellValue::Null, "")];

        let changes = reconcile(&keyed_columns(), &original, &edited);

        assert_eq!(changes.inserted, 1);
        assert_eq!(changes.unchanged, 1);
    }

    #[test]
    fn test_identity_ignores_grid_row_keys() {
        // Same primary key under a different grid key is the same row.
        let original = vec![emp(1, 7_i64, "Ada")];
        let edited = vec![emp(9, 7_i64, "Ada")];

        assert!(reconcile(&keyed_columns(), &original, &edited).is_noop());
    }

    #[test]
    fn test_tables_without_key_match_whole_rows() {
        let columns = vec![Column::new("CODE", "TEXT"), Column::new("AMOUNT", "REAL")];
        let row = |key, code: &str, amount: f64| {
            Row::new(key).with_cell("CODE", code).with_cell("AMOUNT", amount)
        };
        let original = vec![row(1, "BONUS", 100.0), row(2, "BONUS", 100.0)];
        let edited = vec![row(1, "BONUS", 100.0), row(2, "BONUS", 150.0)];

        let changes = reconcile(&columns, &original, &edited);

        // The edited duplicate no longer matches: one delete plus one insert.
        assert_eq!(changes.unchanged, 1);
        assert_eq!(changes.inserted, 1);
        assert_eq!(changes.deleted, 1);
        assert_eq!(changes.updated, 0);
    }

    #[test]
    fn test_composite_key_order() {
        let columns = vec![
            Column::new("PERIOD_ID", "INTEGER").with_primary_key(2),
            Column::new("EMP_ID", "INTEGER").with_primary_key(1),
        ];
        let row = Row::new(1)
            .with_cell("PERIOD_ID", 10_i64)
            .with_cell("EMP_ID", 3_i64);

        assert_eq!(
            row_identity(&columns, &row),
            Some(vec!["i:3".to_string(), "i:10".to_string()])
        );
    }

    #[test]
    fn test_everything_deleted() {
        let original = vec![emp(1, 1_i64, "Ada"), emp(2, 2_i64, "Grace")];
        let changes = reconcile(&keyed_columns(), &original, &[]);
        assert_eq!(changes.deleted, 2);
        assert_eq!(changes.summary(), "0 inserted, 0 updated, 2 deleted");
    }
}
