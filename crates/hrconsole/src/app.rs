use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        actions::run_action,
        health::{livez, readyz},
        pages::index,
        static_files::serve_static,
        tables::{add_blank_row, commit_rows, delete_selected_rows, get_table, list_tables},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let timeout = state.config.request_timeout();

    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("hx-request")]);

    let api_routes = Router::new()
        // Schema scripts
        .route("/actions/{action}", post(run_action))
        // Table grids
        .route("/tables", get(list_tables))
        .route("/tables/{table}", get(get_table))
        .route("/tables/{table}/rows", put(commit_rows))
        .route("/tables/{table}/rows/blank", post(add_blank_row))
        .route("/tables/{table}/rows/delete", post(delete_selected_rows))
        .layer(cors);

    Router::new()
        .route("/", get(index))
        .route("/static/{filename}", get(serve_static))
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}
