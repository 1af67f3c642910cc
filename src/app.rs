//! Router assembly

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config().paths.static_dir.clone();
    let frontend_dir = state.frontend_dir().clone();

    Router::new()
        .route("/", get(routes::frontend::index))
        .route("/health", get(routes::health::health_check))
        .nest("/documento", routes::documents::router())
        .nest("/qr", routes::qr::router())
        .nest_service("/static", ServeDir::new(static_dir))
        .nest_service("/frontend", ServeDir::new(frontend_dir))
        .fallback(routes::frontend::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
