//! The fixed set of tables managed by the console.
//!
//! Every SQL identifier the console ever interpolates comes from this module.
//! User input is parsed into a [`TableId`] first, so request paths can never
//! smuggle arbitrary table names into a query.

mod error;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use error::CatalogError;

/// One of the six tables in the HR schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableId {
    Employee,
    Department,
    Leave,
    PayrollRecord,
    PayrollPeriod,
    Adjustment,
}

impl TableId {
    /// All tables in tab order.
    pub const ALL: [TableId; 6] = [
        TableId::Employee,
        TableId::Department,
        TableId::Leave,
        TableId::PayrollRecord,
        TableId::PayrollPeriod,
        TableId::Adjustment,
    ];

    /// The tab selected when the console first loads.
    pub const DEFAULT_TAB: TableId = TableId::Employee;

    /// Table name as it appears in the SQL scripts.
    pub fn sql_name(self) -> &'static str {
        match self {
            TableId::Employee => "EMPLOYEE",
            TableId::Department => "DEPARTMENT",
            TableId::Leave => "LEAVE",
            TableId::PayrollRecord => "PAYROLL_RECORD",
            TableId::PayrollPeriod => "PAYROLL_PERIOD",
            TableId::Adjustment => "ADJUSTMENT",
        }
    }

    /// Short value used for the tab and in request paths.
    pub fn tab_value(self) -> &'static str {
        match self {
            TableId::Employee => "emp",
            TableId::Department => "dep",
            TableId::Leave => "lev",
            TableId::PayrollRecord => "p_rec",
            TableId::PayrollPeriod => "p_per",
            TableId::Adjustment => "adj",
        }
    }

    /// Human readable tab label.
    pub fn label(self) -> &'static str {
        match self {
            TableId::Employee => "Employee",
            TableId::Department => "Department",
            TableId::Leave => "Leave",
            TableId::PayrollRecord => "Payroll Record",
            TableId::PayrollPeriod => "Payroll Period",
            TableId::Adjustment => "Adjustment",
        }
    }

    /// Iconify icon shown next to the tab label.
    pub fn icon(self) -> &'static str {
        match self {
            TableId::Employee => "mdi:account-outline",
            TableId::Department => "mingcute:department-line",
            TableId::Leave => "pepicons-pop:leave",
            TableId::PayrollRecord => "mdi:file-outline",
            TableId::PayrollPeriod => "mingcute:time-line",
            TableId::Adjustment => "material-symbols:edit-outline",
        }
    }

    /// DOM id of the panel that holds this table's grid.
    pub fn panel_id(self) -> String {
        format!("{}-panel", self.tab_value())
    }

    /// The table name wrapped in double quotes, safe to splice into SQL.
    pub fn quoted(self) -> String {
        format!("\"{}\"", self.sql_name())
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

impl FromStr for TableId {
    type Err = CatalogError;

    /// Accepts either the tab value (`p_rec`) or the SQL name (`PAYROLL_RECORD`),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TableId::ALL
            .into_iter()
            .find(|table| {
                table.tab_value().eq_ignore_ascii_case(needle)
                    || table.sql_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CatalogError::UnknownTable(needle.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_matches_all() {
        let tabs: Vec<_> = TableId::ALL.iter().map(|t| t.tab_value()).collect();
        assert_eq!(tabs, vec!["emp", "dep", "lev", "p_rec", "p_per", "adj"]);
        assert_eq!(TableId::DEFAULT_TAB.tab_value(), "emp");
    }

    #[test]
    fn test_parse_from_tab_value_and_sql_name() {
        assert_eq!("p_rec".parse::<TableId>().unwrap(), TableId::PayrollRecord);
        assert_eq!("PAYROLL_PERIOD".parse::<TableId>().unwrap(), TableId::PayrollPeriod);
        assert_eq!("employee".parse::<TableId>().unwrap(), TableId::Employee);
        assert_eq!(" LEV ".parse::<TableId>().unwrap(), TableId::Leave);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "users; DROP TABLE EMPLOYEE".parse::<TableId>().unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownTable("users; DROP TABLE EMPLOYEE".to_string())
        );
    }

    #[test]
    fn test_panel_id_and_quoting() {
        assert_eq!(TableId::Adjustment.panel_id(), "adj-panel");
        assert_eq!(TableId::Leave.quoted(), "\"LEAVE\"");
        assert_eq!(TableId::Department.to_string(), "DEPARTMENT");
    }
}
