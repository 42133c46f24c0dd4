//! Handlers for the `/ad` resource.
//!
//! Ads reference an author (user) and a category; both are looked up
//! before any write so a dangling id answers 404 rather than a constraint
//! error.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use classifieds_core::error::CoreError;
use classifieds_core::types::DbId;
use classifieds_db::models::ad::{Ad, CreateAd, UpdateAd};
use classifieds_db::repositories::{AdRepo, CategoryRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::paginate;
use crate::media;
use crate::query::AdListParams;
use crate::response::{AdResponse, PageResponse, StatusResponse};
use crate::state::AppState;

/// GET /ad/
///
/// Most expensive first. Supports `cat`, `text`, `price_from`, `price_to`
/// and `is_published` filters alongside `page`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AdListParams>,
) -> AppResult<Json<PageResponse<AdResponse>>> {
    let filter = params.filter();
    let total = AdRepo::count(&state.pool, &filter).await?;
    let (paginator, page) = paginate(&state, total, params.page.as_deref());

    let items = AdRepo::list_page(&state.pool, &filter, page.limit, page.offset)
        .await?
        .into_iter()
        .map(|ad| AdResponse::from_ad(ad, &state.config.media_url))
        .collect();
    Ok(Json(PageResponse::new(items, &paginator)))
}

/// GET /ad/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AdResponse>> {
    let ad = AdRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Ad", id)))?;
    Ok(Json(AdResponse::from_ad(ad, &state.config.media_url)))
}

/// POST /ad/create/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAd>,
) -> AppResult<(StatusCode, Json<AdResponse>)> {
    ensure_user(&state, input.author_id).await?;
    ensure_category(&state, input.category_id).await?;

    let ad = AdRepo::create(&state.pool, &input).await?;
    tracing::info!(ad_id = ad.id, author_id = ad.author_id, "Ad created");
    Ok((
        StatusCode::CREATED,
        Json(AdResponse::from_ad(ad, &state.config.media_url)),
    ))
}

/// PATCH /ad/{id}/update/
///
/// Overwrites name, price, description, `is_published` and `category_id`.
/// Keys missing from the body are written as null; leaving out a required
/// one (`name`, `is_published`, `category_id`) is a validation error.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAd>,
) -> AppResult<Json<AdResponse>> {
    if AdRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::not_found("Ad", id)));
    }
    if let Some(category_id) = input.category_id {
        ensure_category(&state, category_id).await?;
    }

    let ad = AdRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Ad", id)))?;
    Ok(Json(AdResponse::from_ad(ad, &state.config.media_url)))
}

/// POST /ad/{id}/upload_image/
///
/// Accepts a multipart form with a required `image` field. The file is
/// stored under the media root and its path recorded on the ad.
pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<AdResponse>> {
    if AdRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::not_found("Ad", id)));
    }

    let mut image: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        image = Some((filename, data.to_vec()));
    }

    let (filename, data) =
        image.ok_or_else(|| AppError::BadRequest("Missing required 'image' field".into()))?;

    let ext = media::image_extension(&filename).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Unsupported image file '{filename}'. Supported: {}",
            media::SUPPORTED_IMAGE_EXTENSIONS.join(", ")
        ))
    })?;

    let relative_path = media::ad_image_path(id, chrono::Utc::now().timestamp(), &ext);
    let ad = save_image(&state, id, &relative_path, &data).await?;
    tracing::info!(ad_id = id, path = %relative_path, "Ad image uploaded");
    Ok(Json(AdResponse::from_ad(ad, &state.config.media_url)))
}

/// Write the image file and record its path on the ad.
///
/// If the ad is gone by the time the path is recorded, or recording fails,
/// the written file is removed again.
pub async fn save_image(
    state: &AppState,
    id: DbId,
    relative_path: &str,
    data: &[u8],
) -> AppResult<Ad> {
    let media_root = &state.config.media_root;
    media::store(media_root, relative_path, data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    match AdRepo::set_image(&state.pool, id, relative_path).await {
        Ok(Some(ad)) => Ok(ad),
        Ok(None) => {
            media::discard(media_root, relative_path).await;
            Err(AppError::Core(CoreError::not_found("Ad", id)))
        }
        Err(e) => {
            media::discard(media_root, relative_path).await;
            Err(e.into())
        }
    }
}

/// DELETE /ad/{id}/delete/
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    if AdRepo::delete(&state.pool, id).await? {
        Ok(Json(StatusResponse::ok()))
    } else {
        Err(AppError::Core(CoreError::not_found("Ad", id)))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_user(state: &AppState, id: DbId) -> AppResult<()> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::not_found("User", id)))
}

async fn ensure_category(state: &AppState, id: DbId) -> AppResult<()> {
    CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::not_found("Category", id)))
}
