//! Toast notifications pushed to the browser after an action.

use serde::{Deserialize, Serialize};

use crate::catalog::TableId;
use crate::reconcile::ChangeSet;
use crate::script::{ScriptAction, ScriptReport};

const SUCCESS_ICON: &str = "mdi:check-circle-outline";
const ERROR_ICON: &str = "mdi:alert-circle-outline";

/// A toast shown in the notification container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub color: String,
    pub icon: String,
    /// Success toasts fade on their own; errors stay until dismissed.
    pub auto_dismiss: bool,
}

impl Notification {
    /// A green toast that auto-dismisses.
    pub fn success(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            color: "green".to_string(),
            icon: SUCCESS_ICON.to_string(),
            auto_dismiss: true,
        }
    }

    /// A red toast that requires manual dismissal.
    pub fn error(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            color: "red".to_string(),
            icon: ERROR_ICON.to_string(),
            auto_dismiss: false,
        }
    }

    pub fn is_error(&self) -> bool {
        !self.auto_dismiss
    }

    /// Toast for a finished drop/create/populate run.
    pub fn for_script(action: ScriptAction, report: &ScriptReport) -> Self {
        let name = action.as_str();
        if report.is_clean() {
            let (title, message) = match action {
                ScriptAction::Drop => ("Tables dropped", "All tables were dropped successfully."),
                ScriptAction::Create => ("Tables created", "Tables were created (empty)."),
                ScriptAction::Populate => (
                    "Tables populated",
                    "All tables were populated successfully.",
                ),
            };
            Self::success(format!("{name}-notif-success"), title, message)
        } else {
            Self::error(
                format!("{name}-notif-error"),
                format!("{} completed with errors", action.label()),
                report.errors.join("; "),
            )
        }
    }

    /// Toast for a committed grid.
    pub fn for_commit(table: TableId, changes: &ChangeSet) -> Self {
        Self::success(
            "commit-notif-success",
            "Changes saved",
            format!("{}: {}", table.sql_name(), changes.summary()),
        )
    }

    /// Toast for a commit that was rolled back.
    pub fn commit_failed(table: TableId, reason: impl std::fmt::Display) -> Self {
        Self::error(
            "commit-notif-error",
            "Commit failed",
            format!("{}: {reason}", table.sql_name()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_script_reports_success() {
        let report = ScriptReport {
            statements: 6,
            errors: vec![],
        };

        let drop = Notification::for_script(ScriptAction::Drop, &report);
        assert_eq!(drop.id, "drop-notif-success");
        assert_eq!(drop.title, "Tables dropped");
        assert_eq!(drop.message, "All tables were dropped successfully.");
        assert_eq!(drop.color, "green");
        assert!(drop.auto_dismiss);

        let create = Notification::for_script(ScriptAction::Create, &report);
        assert_eq!(create.message, "Tables were created (empty).");
    }

    #[test]
    fn test_script_errors_are_joined() {
        let report = ScriptReport {
            statements: 3,
            errors: vec!["Stmt #1 error: a".to_string(), "Stmt #3 error: b".to_string()],
        };

        let toast = Notification::for_script(ScriptAction::Populate, &report);

        assert_eq!(toast.id, "populate-notif-error");
        assert_eq!(toast.title, "Populate completed with errors");
        assert_eq!(toast.message, "Stmt #1 error: a; Stmt #3 error: b");
        assert_eq!(toast.color, "red");
        assert_eq!(toast.icon, "mdi:alert-circle-outline");
        assert!(toast.is_error());
    }

    #[test]
    fn test_commit_toasts() {
        let changes = ChangeSet {
            inserted: 1,
            updated: 2,
            deleted: 0,
            unchanged: 4,
        };
        let ok = Notification::for_commit(TableId::Employee, &changes);
        assert_eq!(ok.message, "EMPLOYEE: 1 inserted, 2 updated, 0 deleted");

        let failed = Notification::commit_failed(TableId::Leave, "NOT NULL constraint failed");
        assert_eq!(failed.id, "commit-notif-error");
        assert_eq!(failed.message, "LEAVE: NOT NULL constraint failed");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Notification::success("x", "t", "m")).unwrap();
        assert_eq!(json["autoDismiss"], true);
    }
}
