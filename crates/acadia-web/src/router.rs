//! Axum router — maps all URL paths to handlers.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use crate::state::SharedState;
use crate::handlers::{
    dashboard::dashboard,
    modules::open_module,
    upload::{upload, validate_pdf, preview_pdf},
    api::{api_session, put_results, clear_results, health},
};

/// Build and return the full Axum router.
/// Takes either an `AppState` or an already shared one.
pub fn build_router(state: impl Into<SharedState>) -> Router {
    let shared: SharedState = state.into();
    let static_dir = ServeDir::new(&shared.config.server.static_dir);

    Router::new()
        // Pages
        .route("/",                     get(dashboard))
        .route("/modules/{slug}/open",  post(open_module))
        .route("/upload",               post(upload))
        .route("/upload/validate",      post(validate_pdf))
        .route("/upload/preview",       post(preview_pdf))

        // API endpoints
        .route("/api/session",          get(api_session))
        .route("/api/session/results",  put(put_results).delete(clear_results))
        .route("/api/health",           get(health))

        // Static files
        .nest_service("/static", static_dir)

        // Middleware; uploads are not size-limited here
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
