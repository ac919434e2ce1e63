use axum::{Router, http::Uri, routing::get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::{error::AppError, state::AppState};

pub mod characters;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod params;
pub mod planets;
pub mod sitemap;
pub mod users;

// Build the router without binding state; it will be provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/health", get(health::health_check))
        .nest("/user", users::router())
        .nest("/character", characters::router())
        .nest("/planet", planets::router())
        .nest("/favorite", favorites::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
}

/// Treats `/character/` like `/character`. Must wrap the whole router, since
/// routing happens before any inner layer could rewrite the path.
pub fn normalize_paths(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route");
    AppError::NotFound("Not Found".into())
}
