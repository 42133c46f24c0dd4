pub mod ad;
pub mod category;
pub mod health;
pub mod location;
pub mod user;

use axum::routing::get;
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Paths keep their trailing slash; actions other than list and detail get
/// their own path segment.
///
/// ```text
/// /                                                index
///
/// /ad/                                             list (GET)
/// /ad/create/                                      create (POST)
/// /ad/{id}/                                        detail (GET)
/// /ad/{id}/update/                                 update (PATCH)
/// /ad/{id}/upload_image/                           upload image (POST, multipart)
/// /ad/{id}/delete/                                 delete (DELETE)
///
/// /cat/ ...                                        same shape, no image
/// /user/ ...                                       same shape, no image
/// /loc/ ...                                        same shape, no image
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index::index))
        .merge(ad::router(config.max_upload_bytes))
        .merge(category::router())
        .merge(user::router())
        .merge(location::router())
}
