//! Table grid handlers.
//!
//! Adding a blank row and deleting selected rows only reshape the grid the
//! browser sent; nothing is stored until the grid is committed.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
    Json,
};

use hrconsole_core::catalog::TableId;
use hrconsole_core::grid::{
    append_blank_row, normalize_rows, remove_selected, GridSubmission, Row, TableData, TableView,
};
use hrconsole_core::notification::Notification;
use hrconsole_core::storage::RepositoryError;

use crate::{
    handlers::{render::table_response, AppError},
    state::AppState,
};

/// Rebuild a submitted grid against the table's current columns.
async fn submitted_grid(
    state: &AppState,
    table: TableId,
    rows: Vec<Row>,
) -> Result<TableData, AppError> {
    let columns = match state.repo.load_table(table).await? {
        TableView::Loaded(data) => data.columns,
        TableView::Missing { .. } => return Err(RepositoryError::NotFound { table }.into()),
    };
    let rows = normalize_rows(table, &columns, rows)?;

    Ok(TableData {
        table,
        columns,
        rows,
    })
}

/// List every table (GET /api/tables).
pub async fn list_tables(State(state): State<AppState>) -> Result<Json<Vec<TableView>>, AppError> {
    Ok(Json(state.repo.load_all().await?))
}

/// Get one table (GET /api/tables/{table}).
pub async fn get_table(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(table): Path<String>,
) -> Result<Response, AppError> {
    let table: TableId = table.parse()?;
    let view = state.repo.load_table(table).await?;

    Ok(table_response(&headers, view, None, false))
}

/// Append a blank row to the submitted grid (POST /api/tables/{table}/rows/blank).
pub async fn add_blank_row(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(table): Path<String>,
    Json(submission): Json<GridSubmission>,
) -> Result<Response, AppError> {
    let table: TableId = table.parse()?;
    let mut grid = submitted_grid(&state, table, submission.rows).await?;

    let key = append_blank_row(&mut grid.rows, &grid.columns);
    tracing::debug!(%table, key, "Added blank row");

    Ok(table_response(&headers, TableView::Loaded(grid), None, true))
}

/// Drop the selected rows from the submitted grid (POST /api/tables/{table}/rows/delete).
pub async fn delete_selected_rows(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(table): Path<String>,
    Json(submission): Json<GridSubmission>,
) -> Result<Response, AppError> {
    let table: TableId = table.parse()?;
    let mut grid = submitted_grid(&state, table, submission.rows).await?;

    let before = grid.rows.len();
    grid.rows = remove_selected(grid.rows, &submission.selected);
    tracing::debug!(%table, removed = before - grid.rows.len(), "Removed selected rows");

    Ok(table_response(&headers, TableView::Loaded(grid), None, true))
}

/// Commit the submitted grid (PUT /api/tables/{table}/rows).
///
/// A grid that does not fit the table is rejected with 400 before anything
/// is written. Otherwise the table's contents are replaced by the grid in one
/// transaction; a rejected commit is reported as a toast and the user keeps
/// their edits.
pub async fn commit_rows(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(table): Path<String>,
    Json(submission): Json<GridSubmission>,
) -> Result<Response, AppError> {
    let table: TableId = table.parse()?;
    let grid = submitted_grid(&state, table, submission.rows).await?;

    match state.repo.replace_rows(table, grid.rows.clone()).await {
        Ok(changes) => {
            let view = state.repo.load_table(table).await?;
            let notification = Notification::for_commit(table, &changes);
            Ok(table_response(&headers, view, Some(notification), false))
        }
        Err(err @ RepositoryError::NotFound { .. }) => Err(err.into()),
        Err(err) => {
            tracing::warn!(%table, error = %err, "Commit rolled back");
            let notification = Notification::commit_failed(table, &err);
            Ok(table_response(
                &headers,
                TableView::Loaded(grid),
                Some(notification),
                true,
            ))
        }
    }
}
