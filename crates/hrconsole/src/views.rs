//! View models handed to the askama templates.
//!
//! Templates only see plain strings and flags; everything is formatted here.

use hrconsole_core::catalog::TableId;
use hrconsole_core::grid::{Row, TableView};
use hrconsole_core::script::ScriptAction;

/// A tab in the tab strip.
#[derive(Debug, Clone)]
pub struct TabView {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub panel_id: String,
    pub active: bool,
}

impl TabView {
    pub fn all() -> Vec<TabView> {
        TableId::ALL
            .into_iter()
            .map(|table| TabView {
                value: table.tab_value(),
                label: table.label(),
                icon: table.icon(),
                panel_id: table.panel_id(),
                active: table == TableId::DEFAULT_TAB,
            })
            .collect()
    }
}

/// One of the schema action buttons.
#[derive(Debug, Clone)]
pub struct ActionButton {
    pub action: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

impl ActionButton {
    pub fn all() -> Vec<ActionButton> {
        ScriptAction::ALL
            .into_iter()
            .map(|action| ActionButton {
                action: action.as_str(),
                label: action.label(),
                color: action.color(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub key: u64,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub name: String,
    pub decl_type: String,
    pub primary_key: bool,
}

/// The grid panel for one table.
#[derive(Debug, Clone)]
pub struct PanelView {
    pub tab: &'static str,
    pub panel_id: String,
    pub table_name: &'static str,
    /// Shown when the page first loads.
    pub active: bool,
    pub columns: Vec<ColumnView>,
    pub rows: Vec<RowView>,
    /// Message shown instead of the grid when the table is missing.
    pub missing: Option<String>,
    /// The grid holds edits that were not committed yet.
    pub dirty: bool,
    /// Rendered for an out-of-band swap into an existing page.
    pub oob: bool,
}

impl PanelView {
    pub fn from_view(view: &TableView, dirty: bool, oob: bool) -> Self {
        let table = view.table();
        let mut panel = PanelView {
            tab: table.tab_value(),
            panel_id: table.panel_id(),
            table_name: table.sql_name(),
            active: table == TableId::DEFAULT_TAB,
            columns: Vec::new(),
            rows: Vec::new(),
            missing: None,
            dirty,
            oob,
        };

        match view.data() {
            Some(data) => {
                panel.columns = data
                    .columns
                    .iter()
                    .map(|c| ColumnView {
                        name: c.name.clone(),
                        decl_type: c.decl_type.clone(),
                        primary_key: c.is_primary_key(),
                    })
                    .collect();
                panel.rows = data
                    .rows
                    .iter()
                    .map(|row| row_view(&panel.columns, row))
                    .collect();
            }
            None => {
                panel.missing = Some(TableView::missing_message(table));
            }
        }

        panel
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn row_view(columns: &[ColumnView], row: &Row) -> RowView {
    RowView {
        key: row.key,
        cells: columns.iter().map(|c| row.cell(&c.name).to_string()).collect(),
    }
}
