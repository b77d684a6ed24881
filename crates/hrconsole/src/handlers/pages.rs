use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::{
    handlers::{render::HtmlTemplate, AppError},
    state::AppState,
    views::{ActionButton, PanelView, TabView},
};

/// Console page: action buttons, notification container and one tab per table.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    buttons: Vec<ActionButton>,
    tabs: Vec<TabView>,
    panels: Vec<PanelView>,
}

/// Handler for the console page (GET /).
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let views = state.repo.load_all().await?;
    let panels = views
        .iter()
        .map(|view| PanelView::from_view(view, false, false))
        .collect();

    Ok(HtmlTemplate(IndexTemplate {
        buttons: ActionButton::all(),
        tabs: TabView::all(),
        panels,
    }))
}
