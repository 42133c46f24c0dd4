//! Handlers for the `/loc` resource.
//!
//! Locations are also created implicitly, by name, when users are created
//! or updated.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use classifieds_core::error::CoreError;
use classifieds_core::types::DbId;
use classifieds_db::models::location::{CreateLocation, Location, UpdateLocation};
use classifieds_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::paginate;
use crate::query::PageParams;
use crate::response::{PageResponse, StatusResponse};
use crate::state::AppState;

/// GET /loc/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PageResponse<Location>>> {
    let total = LocationRepo::count(&state.pool).await?;
    let (paginator, page) = paginate(&state, total, params.page.as_deref());
    let items = LocationRepo::list_page(&state.pool, page.limit, page.offset).await?;
    Ok(Json(PageResponse::new(items, &paginator)))
}

/// GET /loc/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Location>> {
    let location = LocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Location", id)))?;
    Ok(Json(location))
}

/// POST /loc/create/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    let location = LocationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// PATCH /loc/{id}/update/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLocation>,
) -> AppResult<Json<Location>> {
    let location = LocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Location", id)))?;
    Ok(Json(location))
}

/// DELETE /loc/{id}/delete/
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    if LocationRepo::delete(&state.pool, id).await? {
        Ok(Json(StatusResponse::ok()))
    } else {
        Err(AppError::Core(CoreError::not_found("Location", id)))
    }
}
