use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;
use crate::handlers::common::{pagination, parse_choice, AppJson, AppQuery};
use crate::models::{CreateWornLayer, PolishType, UpdateWornLayer, WornLayer, WornLayerFilter};
use crate::repositories::{Repository, WornLayerRepository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWornLayerRequest {
    pub worn_id: i32,
    /// Position in the application order, unique within the wear session
    pub order: i32,
    /// Defaults to `base_coat`
    pub layer_type: Option<String>,
    pub polish_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateWornLayerRequest {
    pub worn_id: Option<i32>,
    pub order: Option<i32>,
    pub layer_type: Option<String>,
    pub polish_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WornLayerResponse {
    pub id: i32,
    pub worn_id: i32,
    pub order: i32,
    pub layer_type: PolishType,
    pub polish_id: i32,
    pub polish_name: String,
    /// Text representation, e.g. `3 - Layer 0: Grey Matters (Base Coat)`
    pub label: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<WornLayer> for WornLayerResponse {
    fn from(l: WornLayer) -> Self {
        Self {
            label: l.to_string(),
            id: l.id,
            worn_id: l.worn_id,
            order: l.order,
            layer_type: l.layer_type,
            polish_id: l.polish_id,
            polish_name: l.polish_name,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WornLayerListResponse {
    pub data: Vec<WornLayerResponse>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListWornLayersParams {
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
    #[param(default = 0, minimum = 0)]
    pub offset: Option<i64>,
    pub worn_id: Option<i32>,
    pub polish_id: Option<i32>,
}

// ============ Handlers ============

/// Add a layer to a wear session
#[utoipa::path(
    post,
    path = "/api/worn-layers",
    request_body = CreateWornLayerRequest,
    responses(
        (status = 200, description = "Layer created successfully", body = WornLayerResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Wear session or polish not found"),
        (status = 409, description = "Layer order already used in this wear session")
    ),
    tag = "Worn Layers"
)]
pub async fn create_worn_layer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateWornLayerRequest>,
) -> AppResult<Json<WornLayerResponse>> {
    let create_layer = CreateWornLayer {
        worn_id: payload.worn_id,
        order: payload.order,
        layer_type: parse_choice(payload.layer_type.as_deref())?,
        polish_id: payload.polish_id,
    };

    let layer = WornLayerRepository::create(&state.db, &create_layer).await?;
    Ok(Json(layer.into()))
}

/// List layers, most recent wear session first, then by layer order
#[utoipa::path(
    get,
    path = "/api/worn-layers",
    params(ListWornLayersParams),
    responses(
        (status = 200, description = "List of layers", body = WornLayerListResponse)
    ),
    tag = "Worn Layers"
)]
pub async fn list_worn_layers(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListWornLayersParams>,
) -> AppResult<Json<WornLayerListResponse>> {
    let (limit, offset) = pagination(params.limit, params.offset);
    let filter = WornLayerFilter {
        worn_id: params.worn_id,
        polish_id: params.polish_id,
    };

    let layers = WornLayerRepository::list(&state.db, &filter, limit, offset).await?;
    let total = WornLayerRepository::count(&state.db, &filter).await?;

    Ok(Json(WornLayerListResponse {
        data: layers.into_iter().map(|l| l.into()).collect(),
        total,
        limit,
        offset,
    }))
}

/// Get a layer by ID
#[utoipa::path(
    get,
    path = "/api/worn-layers/{id}",
    params(
        ("id" = i32, Path, description = "Layer ID")
    ),
    responses(
        (status = 200, description = "Layer details", body = WornLayerResponse),
        (status = 404, description = "Layer not found")
    ),
    tag = "Worn Layers"
)]
pub async fn get_worn_layer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<WornLayerResponse>> {
    let layer = WornLayerRepository::find_by_id(&state.db, id).await?;
    Ok(Json(layer.into()))
}

/// Update a layer
#[utoipa::path(
    put,
    path = "/api/worn-layers/{id}",
    params(
        ("id" = i32, Path, description = "Layer ID")
    ),
    request_body = UpdateWornLayerRequest,
    responses(
        (status = 200, description = "Layer updated successfully", body = WornLayerResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Layer or referenced record not found"),
        (status = 409, description = "Layer order already used in this wear session")
    ),
    tag = "Worn Layers"
)]
pub async fn update_worn_layer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateWornLayerRequest>,
) -> AppResult<Json<WornLayerResponse>> {
    let update_layer = UpdateWornLayer {
        worn_id: payload.worn_id,
        order: payload.order,
        layer_type: parse_choice(payload.layer_type.as_deref())?,
        polish_id: payload.polish_id,
    };

    let layer = WornLayerRepository::update(&state.db, id, &update_layer).await?;
    Ok(Json(layer.into()))
}

/// Delete a layer
#[utoipa::path(
    delete,
    path = "/api/worn-layers/{id}",
    params(
        ("id" = i32, Path, description = "Layer ID")
    ),
    responses(
        (status = 204, description = "Layer deleted successfully"),
        (status = 404, description = "Layer not found")
    ),
    tag = "Worn Layers"
)]
pub async fn delete_worn_layer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    WornLayerRepository::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
