//! Schema action handlers: drop, create and populate.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};

use hrconsole_core::notification::Notification;
use hrconsole_core::script::ScriptAction;

use crate::{
    handlers::{
        render::{ActionResponse, FragmentTemplate, HtmlTemplate},
        is_htmx_request, AppError,
    },
    state::AppState,
    views::PanelView,
};

/// Run a schema script (POST /api/actions/{action}).
///
/// Responds with the toast for the run and a fresh view of every table,
/// whether or not the script succeeded.
pub async fn run_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(action): Path<String>,
) -> Result<Response, AppError> {
    let action: ScriptAction = action.parse()?;
    let path = state.script_path(action);

    tracing::info!(%action, path = %path.display(), "Running schema action");

    let report = state.repo.run_script(&path).await;
    let notification = Notification::for_script(action, &report);
    let tables = state.repo.load_all().await?;

    if is_htmx_request(&headers) {
        let panels = tables
            .iter()
            .map(|view| PanelView::from_view(view, false, true))
            .collect();
        Ok(HtmlTemplate(FragmentTemplate {
            notification: Some(notification),
            panels,
        })
        .into_response())
    } else {
        Ok(Json(ActionResponse {
            notification,
            tables,
        })
        .into_response())
    }
}
