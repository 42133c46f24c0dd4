//! Route definitions for the `/user` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// GET    /user/                -> list
/// POST   /user/create/         -> create
/// GET    /user/{id}/           -> get_by_id
/// PATCH  /user/{id}/update/    -> update
/// DELETE /user/{id}/delete/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/", get(user::list))
        .route("/user/create/", post(user::create))
        .route("/user/{id}/", get(user::get_by_id))
        .route("/user/{id}/update/", patch(user::update))
        .route("/user/{id}/delete/", delete(user::delete))
}
