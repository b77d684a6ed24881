//! Shared response helpers: askama rendering and HTMX detection.

use askama::Template;
use axum::{
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use hrconsole_core::grid::TableView;
use hrconsole_core::notification::Notification;

use crate::views::PanelView;

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// Notification plus panels swapped out-of-band into the page.
#[derive(Template)]
#[template(path = "partials/fragment.html")]
pub struct FragmentTemplate {
    pub notification: Option<Notification>,
    pub panels: Vec<PanelView>,
}

/// Check if the request is from HTMX (or the grid script, which sends the
/// same header).
pub fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers.contains_key("HX-Request")
}

/// JSON body for a schema action.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub notification: Notification,
    pub tables: Vec<TableView>,
}

/// JSON body for a grid operation on a single table.
#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub notification: Option<Notification>,
    pub table: TableView,
    /// True when `table` holds edits that are not stored yet.
    pub dirty: bool,
}

/// Respond to a grid operation with HTML for HTMX and JSON otherwise.
pub fn table_response(
    headers: &HeaderMap,
    table: TableView,
    notification: Option<Notification>,
    dirty: bool,
) -> Response {
    if is_htmx_request(headers) {
        HtmlTemplate(FragmentTemplate {
            panels: vec![PanelView::from_view(&table, dirty, true)],
            notification,
        })
        .into_response()
    } else {
        Json(TableResponse {
            notification,
            table,
            dirty,
        })
        .into_response()
    }
}

#[cfg(test)]
mod tests {
    use hrconsole_core::catalog::TableId;

    use super::*;

    #[test]
    fn test_is_htmx_request() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx_request(&headers));
        headers.insert("HX-Request", "true".parse().unwrap());
        assert!(is_htmx_request(&headers));
    }

    #[test]
    fn test_fragment_renders_oob_panel_and_toast() {
        let fragment = FragmentTemplate {
            notification: Some(Notification::error("drop-notif-error", "Drop completed with errors", "Stmt #1 error: <bad>")),
            panels: vec![PanelView::from_view(
                &TableView::missing(TableId::Employee, "gone"),
                false,
                true,
            )],
        };

        let html = fragment.render().unwrap();

        assert!(html.contains("id=\"drop-notif-error\""));
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Drop completed with errors"));
        // Messages are escaped.
        assert!(html.contains("&lt;bad&gt;"));
        assert!(html.contains("id=\"emp-panel\""));
        assert!(html.contains("hx-swap-oob=\"true\""));
        assert!(html.contains("EMPLOYEE not found or has no columns"));
    }
}
