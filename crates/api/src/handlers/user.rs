//! Handlers for the `/user` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use classifieds_core::error::CoreError;
use classifieds_core::types::DbId;
use classifieds_db::models::user::{CreateUser, UpdateUser, User, UserListItem};
use classifieds_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::paginate;
use crate::query::PageParams;
use crate::response::{PageResponse, StatusResponse};
use crate::state::AppState;

/// GET /user/
///
/// Each item carries `ads_published`, the number of the user's published ads.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PageResponse<UserListItem>>> {
    let total = UserRepo::count(&state.pool).await?;
    let (paginator, page) = paginate(&state, total, params.page.as_deref());
    let items = UserRepo::list_page(&state.pool, page.limit, page.offset).await?;
    Ok(Json(PageResponse::new(items, &paginator)))
}

/// GET /user/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("User", id)))?;
    Ok(Json(user))
}

/// POST /user/create/
///
/// `location` is a name; an unknown name creates a new location.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PATCH /user/{id}/update/
///
/// Overwrites password, names, age and location; keys missing from the
/// body are cleared.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("User", id)))?;
    Ok(Json(user))
}

/// DELETE /user/{id}/delete/
///
/// The user's ads are removed with them.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    if UserRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = id, "User deleted");
        Ok(Json(StatusResponse::ok()))
    } else {
        Err(AppError::Core(CoreError::not_found("User", id)))
    }
}
