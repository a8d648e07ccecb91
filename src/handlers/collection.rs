use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;
use crate::handlers::common::{pagination, AppJson, AppQuery};
use crate::models::{Collection, CollectionFilter, CreateCollection, UpdateCollection};
use crate::repositories::{CollectionRepository, Repository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCollectionRequest {
    pub brand_id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCollectionRequest {
    pub brand_id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionResponse {
    pub id: i32,
    pub brand_id: i32,
    pub brand_name: String,
    pub name: String,
    /// Text representation, e.g. `Essie: Summer 2024`
    pub label: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Collection> for CollectionResponse {
    fn from(c: Collection) -> Self {
        Self {
            label: c.to_string(),
            id: c.id,
            brand_id: c.brand_id,
            brand_name: c.brand_name,
            name: c.name,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionListResponse {
    pub data: Vec<CollectionResponse>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCollectionsParams {
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
    #[param(default = 0, minimum = 0)]
    pub offset: Option<i64>,
    pub brand_id: Option<i32>,
    /// Exact collection name
    pub name: Option<String>,
    /// Substring match on the collection name
    pub search: Option<String>,
}

// ============ Handlers ============

/// Create a new collection for a brand
#[utoipa::path(
    post,
    path = "/api/collections",
    request_body = CreateCollectionRequest,
    responses(
        (status = 200, description = "Collection created successfully", body = CollectionResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Brand not found")
    ),
    tag = "Collections"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCollectionRequest>,
) -> AppResult<Json<CollectionResponse>> {
    let create_collection = CreateCollection {
        brand_id: payload.brand_id,
        name: payload.name,
    };

    let collection = CollectionRepository::create(&state.db, &create_collection).await?;
    Ok(Json(collection.into()))
}

/// List collections ordered by name
#[utoipa::path(
    get,
    path = "/api/collections",
    params(ListCollectionsParams),
    responses(
        (status = 200, description = "List of collections", body = CollectionListResponse)
    ),
    tag = "Collections"
)]
pub async fn list_collections(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListCollectionsParams>,
) -> AppResult<Json<CollectionListResponse>> {
    let (limit, offset) = pagination(params.limit, params.offset);
    let filter = CollectionFilter {
        brand_id: params.brand_id,
        name: params.name,
        search: params.search,
    };

    let collections = CollectionRepository::list(&state.db, &filter, limit, offset).await?;
    let total = CollectionRepository::count(&state.db, &filter).await?;

    Ok(Json(CollectionListResponse {
        data: collections.into_iter().map(|c| c.into()).collect(),
        total,
        limit,
        offset,
    }))
}

/// Get a collection by ID
#[utoipa::path(
    get,
    path = "/api/collections/{id}",
    params(
        ("id" = i32, Path, description = "Collection ID")
    ),
    responses(
        (status = 200, description = "Collection details", body = CollectionResponse),
        (status = 404, description = "Collection not found")
    ),
    tag = "Collections"
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CollectionResponse>> {
    let collection = CollectionRepository::find_by_id(&state.db, id).await?;
    Ok(Json(collection.into()))
}

/// Update a collection
#[utoipa::path(
    put,
    path = "/api/collections/{id}",
    params(
        ("id" = i32, Path, description = "Collection ID")
    ),
    request_body = UpdateCollectionRequest,
    responses(
        (status = 200, description = "Collection updated successfully", body = CollectionResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Collection or brand not found")
    ),
    tag = "Collections"
)]
pub async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateCollectionRequest>,
) -> AppResult<Json<CollectionResponse>> {
    let update_collection = UpdateCollection {
        brand_id: payload.brand_id,
        name: payload.name,
    };

    let collection = CollectionRepository::update(&state.db, id, &update_collection).await?;
    Ok(Json(collection.into()))
}

/// Delete a collection together with its polishes and their worn layers
#[utoipa::path(
    delete,
    path = "/api/collections/{id}",
    params(
        ("id" = i32, Path, description = "Collection ID")
    ),
    responses(
        (status = 204, description = "Collection deleted successfully"),
        (status = 404, description = "Collection not found")
    ),
    tag = "Collections"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    CollectionRepository::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
