use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;
use crate::handlers::common::{double_option, pagination, AppJson, AppQuery};
use crate::models::{CreateWornPhoto, UpdateWornPhoto, WornPhoto, WornPhotoFilter};
use crate::repositories::{Repository, WornPhotoRepository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWornPhotoRequest {
    pub worn_id: i32,
    pub photo_type: String,
    /// Media store reference
    pub image: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateWornPhotoRequest {
    pub worn_id: Option<i32>,
    pub photo_type: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WornPhotoResponse {
    pub id: i32,
    pub worn_id: i32,
    pub photo_type: String,
    pub image: String,
    /// `image` resolved against the media URL
    pub image_url: String,
    pub notes: Option<String>,
    /// Text representation, e.g. `Worn #3 - closeup`
    pub label: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl WornPhotoResponse {
    pub fn new(p: WornPhoto, media_url: &str) -> Self {
        Self {
            label: p.to_string(),
            image_url: p.image_url(media_url),
            id: p.id,
            worn_id: p.worn_id,
            photo_type: p.photo_type,
            image: p.image,
            notes: p.notes,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WornPhotoListResponse {
    pub data: Vec<WornPhotoResponse>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListWornPhotosParams {
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
    #[param(default = 0, minimum = 0)]
    pub offset: Option<i64>,
    pub worn_id: Option<i32>,
    /// Substring match on the photo type
    pub search: Option<String>,
}

// ============ Handlers ============

/// Attach a photo to a wear session
#[utoipa::path(
    post,
    path = "/api/worn-photos",
    request_body = CreateWornPhotoRequest,
    responses(
        (status = 200, description = "Photo created successfully", body = WornPhotoResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Wear session not found")
    ),
    tag = "Worn Photos"
)]
pub async fn create_worn_photo(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateWornPhotoRequest>,
) -> AppResult<Json<WornPhotoResponse>> {
    let create_photo = CreateWornPhoto {
        worn_id: payload.worn_id,
        photo_type: payload.photo_type,
        image: payload.image,
        notes: payload.notes,
    };

    let photo = WornPhotoRepository::create(&state.db, &create_photo).await?;
    Ok(Json(WornPhotoResponse::new(photo, &state.config.media_url)))
}

/// List photos, most recent wear session first
#[utoipa::path(
    get,
    path = "/api/worn-photos",
    params(ListWornPhotosParams),
    responses(
        (status = 200, description = "List of photos", body = WornPhotoListResponse)
    ),
    tag = "Worn Photos"
)]
pub async fn list_worn_photos(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListWornPhotosParams>,
) -> AppResult<Json<WornPhotoListResponse>> {
    let (limit, offset) = pagination(params.limit, params.offset);
    let filter = WornPhotoFilter {
        worn_id: params.worn_id,
        search: params.search,
    };

    let photos = WornPhotoRepository::list(&state.db, &filter, limit, offset).await?;
    let total = WornPhotoRepository::count(&state.db, &filter).await?;
    let media_url = &state.config.media_url;

    Ok(Json(WornPhotoListResponse {
        data: photos
            .into_iter()
            .map(|p| WornPhotoResponse::new(p, media_url))
            .collect(),
        total,
        limit,
        offset,
    }))
}

/// Get a photo by ID
#[utoipa::path(
    get,
    path = "/api/worn-photos/{id}",
    params(
        ("id" = i32, Path, description = "Photo ID")
    ),
    responses(
        (status = 200, description = "Photo details", body = WornPhotoResponse),
        (status = 404, description = "Photo not found")
    ),
    tag = "Worn Photos"
)]
pub async fn get_worn_photo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<WornPhotoResponse>> {
    let photo = WornPhotoRepository::find_by_id(&state.db, id).await?;
    Ok(Json(WornPhotoResponse::new(photo, &state.config.media_url)))
}

/// Update a photo
#[utoipa::path(
    put,
    path = "/api/worn-photos/{id}",
    params(
        ("id" = i32, Path, description = "Photo ID")
    ),
    request_body = UpdateWornPhotoRequest,
    responses(
        (status = 200, description = "Photo updated successfully", body = WornPhotoResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Photo or wear session not found")
    ),
    tag = "Worn Photos"
)]
pub async fn update_worn_photo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateWornPhotoRequest>,
) -> AppResult<Json<WornPhotoResponse>> {
    let update_photo = UpdateWornPhoto {
        worn_id: payload.worn_id,
        photo_type: payload.photo_type,
        image: payload.image,
        notes: payload.notes,
    };

    let photo = WornPhotoRepository::update(&state.db, id, &update_photo).await?;
    Ok(Json(WornPhotoResponse::new(photo, &state.config.media_url)))
}

/// Delete a photo
#[utoipa::path(
    delete,
    path = "/api/worn-photos/{id}",
    params(
        ("id" = i32, Path, description = "Photo ID")
    ),
    responses(
        (status = 204, description = "Photo deleted successfully"),
        (status = 404, description = "Photo not found")
    ),
    tag = "Worn Photos"
)]
pub async fn delete_worn_photo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    WornPhotoRepository::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
