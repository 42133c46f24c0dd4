//! Route definitions for the `/ad` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::ad;
use crate::state::AppState;

/// ```text
/// GET    /ad/                       -> list
/// POST   /ad/create/                -> create
/// GET    /ad/{id}/                  -> get_by_id
/// PATCH  /ad/{id}/update/           -> update
/// POST   /ad/{id}/upload_image/     -> upload_image
/// DELETE /ad/{id}/delete/           -> delete
/// ```
///
/// The upload route accepts bodies up to `max_upload_bytes`.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/ad/", get(ad::list))
        .route("/ad/create/", post(ad::create))
        .route("/ad/{id}/", get(ad::get_by_id))
        .route("/ad/{id}/update/", patch(ad::update))
        .route(
            "/ad/{id}/upload_image/",
            post(ad::upload_image).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/ad/{id}/delete/", delete(ad::delete))
}
