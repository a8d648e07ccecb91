use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;
use crate::handlers::common::{double_option, pagination, parse_choice, AppJson, AppQuery};
use crate::models::{CreatePolish, Polish, PolishFilter, PolishType, Shade, UpdatePolish};
use crate::repositories::{PolishRepository, Repository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

/// Enum fields accept `nail_polish`, `nail polish` or the stored code `NP`
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePolishRequest {
    pub brand_id: i32,
    pub location_id: i32,
    pub name: String,
    pub product_url: Option<String>,
    /// Defaults to `true`
    pub is_available: Option<bool>,
    /// Defaults to `pink`
    pub shade: Option<String>,
    /// Defaults to `nail_polish`
    pub polish_type: Option<String>,
    pub collection_id: Option<i32>,
}

/// `product_url` and `collection_id` are cleared with an explicit `null`
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePolishRequest {
    pub brand_id: Option<i32>,
    pub location_id: Option<i32>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub product_url: Option<Option<String>>,
    pub is_available: Option<bool>,
    pub shade: Option<String>,
    pub polish_type: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub collection_id: Option<Option<i32>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordAvailabilityRequest {
    pub is_available: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PolishResponse {
    pub id: i32,
    pub brand_id: i32,
    pub brand_name: String,
    pub location_id: i32,
    pub location_name: String,
    pub collection_id: Option<i32>,
    pub collection_name: Option<String>,
    pub name: String,
    pub product_url: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>)]
    pub check_url_at: Option<time::OffsetDateTime>,
    pub is_available: bool,
    pub shade: Shade,
    pub polish_type: PolishType,
    /// Text representation, e.g. `Essie: Ballet Slippers (Collection: Classics)`
    pub label: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Polish> for PolishResponse {
    fn from(p: Polish) -> Self {
        Self {
            label: p.to_string(),
            id: p.id,
            brand_id: p.brand_id,
            brand_name: p.brand_name,
            location_id: p.location_id,
            location_name: p.location_name,
            collection_id: p.collection_id,
            collection_name: p.collection_name,
            name: p.name,
            product_url: p.product_url,
            check_url_at: p.check_url_at,
            is_available: p.is_available,
            shade: p.shade,
            polish_type: p.polish_type,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PolishListResponse {
    pub data: Vec<PolishResponse>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPolishesParams {
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
    #[param(default = 0, minimum = 0)]
    pub offset: Option<i64>,
    pub brand_id: Option<i32>,
    pub location_id: Option<i32>,
    pub collection_id: Option<i32>,
    pub shade: Option<String>,
    pub polish_type: Option<String>,
    pub is_available: Option<bool>,
    /// Matches polish name, brand name, shade, polish type or collection name
    pub search: Option<String>,
}

// ============ Handlers ============

/// Create a new polish
#[utoipa::path(
    post,
    path = "/api/polishes",
    request_body = CreatePolishRequest,
    responses(
        (status = 200, description = "Polish created successfully", body = PolishResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Brand, location or collection not found"),
        (status = 409, description = "Polish with the same brand, location and name exists")
    ),
    tag = "Polishes"
)]
pub async fn create_polish(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePolishRequest>,
) -> AppResult<Json<PolishResponse>> {
    let create_polish = CreatePolish {
        brand_id: payload.brand_id,
        location_id: payload.location_id,
        name: payload.name,
        product_url: payload.product_url,
        is_available: payload.is_available,
        shade: parse_choice(payload.shade.as_deref())?,
        polish_type: parse_choice(payload.polish_type.as_deref())?,
        collection_id: payload.collection_id,
    };

    let polish = PolishRepository::create(&state.db, &create_polish).await?;
    Ok(Json(polish.into()))
}

/// List polishes ordered by name
#[utoipa::path(
    get,
    path = "/api/polishes",
    params(ListPolishesParams),
    responses(
        (status = 200, description = "List of polishes", body = PolishListResponse),
        (status = 400, description = "Invalid shade or polish type")
    ),
    tag = "Polishes"
)]
pub async fn list_polishes(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListPolishesParams>,
) -> AppResult<Json<PolishListResponse>> {
    let (limit, offset) = pagination(params.limit, params.offset);
    let filter = PolishFilter {
        brand_id: params.brand_id,
        location_id: params.location_id,
        collection_id: params.collection_id,
        shade: parse_choice(params.shade.as_deref())?,
        polish_type: parse_choice(params.polish_type.as_deref())?,
        is_available: params.is_available,
        search: params.search,
    };

    let polishes = PolishRepository::list(&state.db, &filter, limit, offset).await?;
    let total = PolishRepository::count(&state.db, &filter).await?;

    Ok(Json(PolishListResponse {
        data: polishes.into_iter().map(|p| p.into()).collect(),
        total,
        limit,
        offset,
    }))
}

/// Get a polish by ID
#[utoipa::path(
    get,
    path = "/api/polishes/{id}",
    params(
        ("id" = i32, Path, description = "Polish ID")
    ),
    responses(
        (status = 200, description = "Polish details", body = PolishResponse),
        (status = 404, description = "Polish not found")
    ),
    tag = "Polishes"
)]
pub async fn get_polish(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PolishResponse>> {
    let polish = PolishRepository::find_by_id(&state.db, id).await?;
    Ok(Json(polish.into()))
}

/// Update a polish
#[utoipa::path(
    put,
    path = "/api/polishes/{id}",
    params(
        ("id" = i32, Path, description = "Polish ID")
    ),
    request_body = UpdatePolishRequest,
    responses(
        (status = 200, description = "Polish updated successfully", body = PolishResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Polish or referenced record not found"),
        (status = 409, description = "Polish with the same brand, location and name exists")
    ),
    tag = "Polishes"
)]
pub async fn update_polish(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdatePolishRequest>,
) -> AppResult<Json<PolishResponse>> {
    let update_polish = UpdatePolish {
        brand_id: payload.brand_id,
        location_id: payload.location_id,
        name: payload.name,
        product_url: payload.product_url,
        is_available: payload.is_available,
        shade: parse_choice(payload.shade.as_deref())?,
        polish_type: parse_choice(payload.polish_type.as_deref())?,
        collection_id: payload.collection_id,
    };

    let polish = PolishRepository::update(&state.db, id, &update_polish).await?;
    Ok(Json(polish.into()))
}

/// Delete a polish together with the worn layers that used it
#[utoipa::path(
    delete,
    path = "/api/polishes/{id}",
    params(
        ("id" = i32, Path, description = "Polish ID")
    ),
    responses(
        (status = 204, description = "Polish deleted successfully"),
        (status = 404, description = "Polish not found")
    ),
    tag = "Polishes"
)]
pub async fn delete_polish(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    PolishRepository::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Record the result of checking the polish's product URL
#[utoipa::path(
    post,
    path = "/api/polishes/{id}/availability",
    params(
        ("id" = i32, Path, description = "Polish ID")
    ),
    request_body = RecordAvailabilityRequest,
    responses(
        (status = 200, description = "Availability recorded", body = PolishResponse),
        (status = 404, description = "Polish not found")
    ),
    tag = "Polishes"
)]
pub async fn record_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<RecordAvailabilityRequest>,
) -> AppResult<Json<PolishResponse>> {
    let polish = PolishRepository::record_availability(&state.db, id, payload.is_available).await?;
    Ok(Json(polish.into()))
}
