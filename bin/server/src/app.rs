//! HTTP routing for the guildpass server.

use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{api, auth};

/// Builds the application router.
///
/// `/` serves `index.html` from `static_dir`; any path not matched by a
/// route falls back to the files in that directory.
pub fn router(state: Arc<auth::AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/login", get(auth::login))
        .route("/callback", get(auth::callback))
        .route("/api/verify-role", post(api::verify_role))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
