//! Route definitions for the `/cat` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// ```text
/// GET    /cat/                -> list
/// POST   /cat/create/         -> create
/// GET    /cat/{id}/           -> get_by_id
/// PATCH  /cat/{id}/update/    -> update
/// DELETE /cat/{id}/delete/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cat/", get(category::list))
        .route("/cat/create/", post(category::create))
        .route("/cat/{id}/", get(category::get_by_id))
        .route("/cat/{id}/update/", patch(category::update))
        .route("/cat/{id}/delete/", delete(category::delete))
}
