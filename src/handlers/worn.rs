use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;
use crate::handlers::common::{double_option, pagination, AppJson, AppQuery, PaginationParams};
use crate::handlers::worn_layer::{WornLayerListResponse, WornLayerResponse};
use crate::handlers::worn_photo::{WornPhotoListResponse, WornPhotoResponse};
use crate::models::{CreateWorn, UpdateWorn, Worn, WornFilter, WornLayerFilter, WornPhotoFilter};
use crate::repositories::{
    Repository, WornLayerRepository, WornPhotoRepository, WornRepository,
};
use crate::state::AppState;

// ============ Request/Response DTOs ============

/// `worn_at` is set by the server when the session is created
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWornRequest {
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateWornRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WornResponse {
    pub id: i32,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub worn_at: time::OffsetDateTime,
    pub notes: Option<String>,
    /// Text representation, e.g. `Worn #3 on 2024-06-01 18:30`
    pub label: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Worn> for WornResponse {
    fn from(w: Worn) -> Self {
        Self {
            label: w.to_string(),
            id: w.id,
            worn_at: w.worn_at,
            notes: w.notes,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WornListResponse {
    pub data: Vec<WornResponse>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListWornParams {
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
    #[param(default = 0, minimum = 0)]
    pub offset: Option<i64>,
    /// Substring match on the notes
    pub search: Option<String>,
}

// ============ Handlers ============

/// Start a new wear session
#[utoipa::path(
    post,
    path = "/api/worn",
    request_body = CreateWornRequest,
    responses(
        (status = 200, description = "Wear session created successfully", body = WornResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "Worn"
)]
pub async fn create_worn(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateWornRequest>,
) -> AppResult<Json<WornResponse>> {
    let create_worn = CreateWorn {
        notes: payload.notes,
    };

    let worn = WornRepository::create(&state.db, &create_worn).await?;
    Ok(Json(worn.into()))
}

/// List wear sessions, most recent first
#[utoipa::path(
    get,
    path = "/api/worn",
    params(ListWornParams),
    responses(
        (status = 200, description = "List of wear sessions", body = WornListResponse)
    ),
    tag = "Worn"
)]
pub async fn list_worn(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListWornParams>,
) -> AppResult<Json<WornListResponse>> {
    let (limit, offset) = pagination(params.limit, params.offset);
    let filter = WornFilter {
        search: params.search,
    };

    let worn = WornRepository::list(&state.db, &filter, limit, offset).await?;
    let total = WornRepository::count(&state.db, &filter).await?;

    Ok(Json(WornListResponse {
        data: worn.into_iter().map(|w| w.into()).collect(),
        total,
        limit,
        offset,
    }))
}

/// Get a wear session by ID
#[utoipa::path(
    get,
    path = "/api/worn/{id}",
    params(
        ("id" = i32, Path, description = "Worn ID")
    ),
    responses(
        (status = 200, description = "Wear session details", body = WornResponse),
        (status = 404, description = "Wear session not found")
    ),
    tag = "Worn"
)]
pub async fn get_worn(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<WornResponse>> {
    let worn = WornRepository::find_by_id(&state.db, id).await?;
    Ok(Json(worn.into()))
}

/// Update the notes of a wear session
#[utoipa::path(
    put,
    path = "/api/worn/{id}",
    params(
        ("id" = i32, Path, description = "Worn ID")
    ),
    request_body = UpdateWornRequest,
    responses(
        (status = 200, description = "Wear session updated successfully", body = WornResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Wear session not found")
    ),
    tag = "Worn"
)]
pub async fn update_worn(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateWornRequest>,
) -> AppResult<Json<WornResponse>> {
    let update_worn = UpdateWorn {
        notes: payload.notes,
    };

    let worn = WornRepository::update(&state.db, id, &update_worn).await?;
    Ok(Json(worn.into()))
}

/// Delete a wear session together with its photos and layers
#[utoipa::path(
    delete,
    path = "/api/worn/{id}",
    params(
        ("id" = i32, Path, description = "Worn ID")
    ),
    responses(
        (status = 204, description = "Wear session deleted successfully"),
        (status = 404, description = "Wear session not found")
    ),
    tag = "Worn"
)]
pub async fn delete_worn(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    WornRepository::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the photos of a wear session
#[utoipa::path(
    get,
    path = "/api/worn/{id}/photos",
    params(
        ("id" = i32, Path, description = "Worn ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Photos of the wear session", body = WornPhotoListResponse),
        (status = 404, description = "Wear session not found")
    ),
    tag = "Worn"
)]
pub async fn list_photos_for_worn(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<WornPhotoListResponse>> {
    WornRepository::find_by_id(&state.db, id).await?;

    let (limit, offset) = pagination(params.limit, params.offset);
    let filter = WornPhotoFilter {
        worn_id: Some(id),
        search: None,
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

/// List the layers of a wear session in application order
#[utoipa::path(
    get,
    path = "/api/worn/{id}/layers",
    params(
        ("id" = i32, Path, description = "Worn ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Layers of the wear session", body = WornLayerListResponse),
        (status = 404, description = "Wear session not found")
    ),
    tag = "Worn"
)]
pub async fn list_layers_for_worn(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<WornLayerListResponse>> {
    WornRepository::find_by_id(&state.db, id).await?;

    let (limit, offset) = pagination(params.limit, params.offset);
    let filter = WornLayerFilter {
        worn_id: Some(id),
        polish_id: None,
    };

    let layers = WornLayerRepository::list(&state.db, &filter, limit, offset).await?;
    let total = WornLayerRepository::count(&state.db, &filter).await?;

    Ok(Json(WornLayerListResponse {
        data: layers.into_iter().map(WornLayerResponse::from).collect(),
        total,
        limit,
        offset,
    }))
}
