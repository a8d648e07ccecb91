use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;
use crate::handlers::common::{pagination, AppJson, AppQuery};
use crate::models::{Brand, BrandFilter, CreateBrand, UpdateBrand};
use crate::repositories::{BrandRepository, Repository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBrandRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBrandRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BrandResponse {
    pub id: i32,
    pub name: String,
    /// Text representation, e.g. `Brand: Essie`
    pub label: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Brand> for BrandResponse {
    fn from(b: Brand) -> Self {
        Self {
            label: b.to_string(),
            id: b.id,
            name: b.name,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BrandListResponse {
    pub data: Vec<BrandResponse>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBrandsParams {
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
    #[param(default = 0, minimum = 0)]
    pub offset: Option<i64>,
    /// Substring match on the brand name
    pub search: Option<String>,
}

// ============ Handlers ============

/// Create a new brand
#[utoipa::path(
    post,
    path = "/api/brands",
    request_body = CreateBrandRequest,
    responses(
        (status = 200, description = "Brand created successfully", body = BrandResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "Brands"
)]
pub async fn create_brand(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBrandRequest>,
) -> AppResult<Json<BrandResponse>> {
    let create_brand = CreateBrand { name: payload.name };

    let brand = BrandRepository::create(&state.db, &create_brand).await?;
    Ok(Json(brand.into()))
}

/// List brands ordered by name
#[utoipa::path(
    get,
    path = "/api/brands",
    params(ListBrandsParams),
    responses(
        (status = 200, description = "List of brands", body = BrandListResponse)
    ),
    tag = "Brands"
)]
pub async fn list_brands(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListBrandsParams>,
) -> AppResult<Json<BrandListResponse>> {
    let (limit, offset) = pagination(params.limit, params.offset);
    let filter = BrandFilter {
        search: params.search,
    };

    let brands = BrandRepository::list(&state.db, &filter, limit, offset).await?;
    let total = BrandRepository::count(&state.db, &filter).await?;

    Ok(Json(BrandListResponse {
        data: brands.into_iter().map(|b| b.into()).collect(),
        total,
        limit,
        offset,
    }))
}

/// Get a brand by ID
#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    params(
        ("id" = i32, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand details", body = BrandResponse),
        (status = 404, description = "Brand not found")
    ),
    tag = "Brands"
)]
pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BrandResponse>> {
    let brand = BrandRepository::find_by_id(&state.db, id).await?;
    Ok(Json(brand.into()))
}

/// Update a brand
#[utoipa::path(
    put,
    path = "/api/brands/{id}",
    params(
        ("id" = i32, Path, description = "Brand ID")
    ),
    request_body = UpdateBrandRequest,
    responses(
        (status = 200, description = "Brand updated successfully", body = BrandResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Brand not found")
    ),
    tag = "Brands"
)]
pub async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateBrandRequest>,
) -> AppResult<Json<BrandResponse>> {
    let update_brand = UpdateBrand { name: payload.name };

    let brand = BrandRepository::update(&state.db, id, &update_brand).await?;
    Ok(Json(brand.into()))
}

/// Delete a brand together with its collections, polishes and their worn layers
#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    params(
        ("id" = i32, Path, description = "Brand ID")
    ),
    responses(
        (status = 204, description = "Brand deleted successfully"),
        (status = 404, description = "Brand not found")
    ),
    tag = "Brands"
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    BrandRepository::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
