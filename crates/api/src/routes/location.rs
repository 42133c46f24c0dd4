//! Route definitions for the `/loc` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::location;
use crate::state::AppState;

/// ```text
/// GET    /loc/                -> list
/// POST   /loc/create/         -> create
/// GET    /loc/{id}/           -> get_by_id
/// PATCH  /loc/{id}/update/    -> update
/// DELETE /loc/{id}/delete/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/loc/", get(location::list))
        .route("/loc/create/", post(location::create))
        .route("/loc/{id}/", get(location::get_by_id))
        .route("/loc/{id}/update/", patch(location::update))
        .route("/loc/{id}/delete/", delete(location::delete))
}
