//! SQL script handling: statement splitting, the three schema actions, and
//! the per-statement error report produced by running a script.

mod split;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

pub use split::split_statements;

/// Number of characters of a failing statement echoed back in its error.
pub const PREVIEW_CHARS: usize = 200;

/// One of the schema maintenance actions, each backed by a static script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptAction {
    Drop,
    Create,
    Populate,
}

impl ScriptAction {
    pub const ALL: [ScriptAction; 3] = [
        ScriptAction::Drop,
        ScriptAction::Create,
        ScriptAction::Populate,
    ];

    /// Script file name, relative to the scripts directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ScriptAction::Drop => "drop.sql",
            ScriptAction::Create => "create.sql",
            ScriptAction::Populate => "populate.sql",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScriptAction::Drop => "drop",
            ScriptAction::Create => "create",
            ScriptAction::Populate => "populate",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            ScriptAction::Drop => "Drop",
            ScriptAction::Create => "Create",
            ScriptAction::Populate => "Populate",
        }
    }

    /// Button color.
    pub fn color(self) -> &'static str {
        match self {
            ScriptAction::Drop => "red",
            ScriptAction::Create => "blue",
            ScriptAction::Populate => "green",
        }
    }
}

impl fmt::Display for ScriptAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptAction {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScriptAction::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownAction(s.trim().to_string()))
    }
}

/// A statement that failed while running a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementError {
    /// 1-based position of the statement in the script.
    pub index: usize,
    pub message: String,
    pub preview: String,
}

impl StatementError {
    pub fn new(index: usize, statement: &str, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
            preview: statement.chars().take(PREVIEW_CHARS).collect(),
        }
    }
}

impl fmt::Display for StatementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stmt #{} error: {} -- preview: {:?}",
            self.index, self.message, self.preview
        )
    }
}

/// Outcome of running a script. Running a script never fails as a whole;
/// every problem is recorded here instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Statements found in the script.
    pub statements: usize,
    /// Human readable errors, in statement order.
    pub errors: Vec<String>,
}

impl ScriptReport {
    /// Report for a script file that does not exist.
    pub fn missing(path: impl fmt::Display) -> Self {
        Self {
            statements: 0,
            errors: vec![format!("SQL file not found: {path}")],
        }
    }

    /// Report for a script file that exists but could not be read.
    pub fn unreadable(path: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Self {
            statements: 0,
            errors: vec![format!("SQL file could not be read: {path}: {reason}")],
        }
    }

    pub fn record_failure(&mut self, error: StatementError) {
        self.errors.push(error.to_string());
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!("drop".parse::<ScriptAction>().unwrap(), ScriptAction::Drop);
        assert_eq!("Populate".parse::<ScriptAction>().unwrap(), ScriptAction::Populate);
        assert!(matches!(
            "truncate".parse::<ScriptAction>(),
            Err(CatalogError::UnknownAction(name)) if name == "truncate"
        ));
    }

    #[test]
    fn test_action_file_names() {
        let files: Vec<_> = ScriptAction::ALL.iter().map(|a| a.file_name()).collect();
        assert_eq!(files, vec!["drop.sql", "create.sql", "populate.sql"]);
    }

    #[test]
    fn test_statement_error_display() {
        let error = StatementError::new(3, "DROP TABLE NOPE", "no such table: NOPE");
        assert_eq!(
            error.to_string(),
            "Stmt #3 error: no such table: NOPE -- preview: \"DROP TABLE NOPE\""
        );
    }

    #[test]
    fn test_statement_preview_is_truncated() {
        let statement = "x".repeat(500);
        let error = StatementError::new(1, &statement, "syntax error");
        assert_eq!(error.preview.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn test_missing_report() {
        let report = ScriptReport::missing("sql/drop.sql");
        assert_eq!(report.statements, 0);
        assert_eq!(report.errors, vec!["SQL file not found: sql/drop.sql"]);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_record_failure_keeps_order() {
        let mut report = ScriptReport {
            statements: 3,
            ..Default::default()
        };
        report.record_failure(StatementError::new(1, "A", "first"));
        report.record_failure(StatementError::new(3, "C", "third"));
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].starts_with("Stmt #1"));
        assert!(report.errors[1].starts_with("Stmt #3"));
    }
}
