//! Static file serving handler for JavaScript/CSS assets.
//!
//! Assets are compiled into the binary so the console works from any
//! working directory.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

const CONSOLE_JS: &str = include_str!("../../static/console.js");
const CONSOLE_CSS: &str = include_str!("../../static/console.css");

/// Serve an embedded asset (GET /static/{filename}).
pub async fn serve_static(Path(filename): Path<String>) -> Response {
    let (contents, content_type) = match filename.as_str() {
        "console.js" => (CONSOLE_JS, "application/javascript; charset=utf-8"),
        "console.css" => (CONSOLE_CSS, "text/css; charset=utf-8"),
        _ => return (StatusCode::NOT_FOUND, "Not found").into_response(),
    };

    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        contents,
    )
        .into_response()
}
