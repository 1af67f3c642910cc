//! Frontend pages: index and the custom 404 fallback

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::state::AppState;

/// Serve `frontend/index.html`
pub async fn index(State(state): State<AppState>) -> Response {
    let path = state.frontend_dir().join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!("index.html not readable at {}: {}", path.display(), e);
            (StatusCode::NOT_FOUND, "index.html not found").into_response()
        }
    }
}

/// Router fallback: serve `frontend/404.html` when present, else an inline
/// stub, always with status 404.
pub async fn not_found(State(state): State<AppState>) -> Response {
    let path = state.frontend_dir().join("404.html");
    let html = match tokio::fs::read_to_string(&path).await {
        Ok(html) => html,
        Err(_) => {
            "<h1>404 - Page not found</h1><a href='/'>Back to start</a>".to_string()
        }
    };
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}
