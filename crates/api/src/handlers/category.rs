//! Handlers for the `/cat` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use classifieds_core::error::CoreError;
use classifieds_core::types::DbId;
use classifieds_db::models::category::{Category, CreateCategory, UpdateCategory};
use classifieds_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::paginate;
use crate::query::PageParams;
use crate::response::{PageResponse, StatusResponse};
use crate::state::AppState;

/// GET /cat/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PageResponse<Category>>> {
    let total = CategoryRepo::count(&state.pool).await?;
    let (paginator, page) = paginate(&state, total, params.page.as_deref());
    let items = CategoryRepo::list_page(&state.pool, page.limit, page.offset).await?;
    Ok(Json(PageResponse::new(items, &paginator)))
}

/// GET /cat/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Category", id)))?;
    Ok(Json(category))
}

/// POST /cat/create/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PATCH /cat/{id}/update/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Category", id)))?;
    Ok(Json(category))
}

/// DELETE /cat/{id}/delete/
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    if CategoryRepo::delete(&state.pool, id).await? {
        Ok(Json(StatusResponse::ok()))
    } else {
        Err(AppError::Core(CoreError::not_found("Category", id)))
    }
}
