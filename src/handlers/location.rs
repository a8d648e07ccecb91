use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;
use crate::handlers::common::{pagination, AppJson, AppQuery};
use crate::models::{Location, LocationFilter, CreateLocation, UpdateLocation};
use crate::repositories::{LocationRepository, Repository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLocationRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLocationRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationResponse {
    pub id: i32,
    pub name: String,
    /// Text representation, e.g. `Location: Top Drawer`
    pub label: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Location> for LocationResponse {
    fn from(l: Location) -> Self {
        Self {
            label: l.to_string(),
            id: l.id,
            name: l.name,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LocationListResponse {
    pub data: Vec<LocationResponse>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListLocationsParams {
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
    #[param(default = 0, minimum = 0)]
    pub offset: Option<i64>,
    /// Substring match on the location name
    pub search: Option<String>,
}

// ============ Handlers ============

/// Create a new location
#[utoipa::path(
    post,
    path = "/api/locations",
    request_body = CreateLocationRequest,
    responses(
        (status = 200, description = "Location created successfully", body = LocationResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "Locations"
)]
pub async fn create_location(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateLocationRequest>,
) -> AppResult<Json<LocationResponse>> {
    let create_location = CreateLocation { name: payload.name };

    let location = LocationRepository::create(&state.db, &create_location).await?;
    Ok(Json(location.into()))
}

/// List locations ordered by name
#[utoipa::path(
    get,
    path = "/api/locations",
    params(ListLocationsParams),
    responses(
        (status = 200, description = "List of locations", body = LocationListResponse)
    ),
    tag = "Locations"
)]
pub async fn list_locations(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListLocationsParams>,
) -> AppResult<Json<LocationListResponse>> {
    let (limit, offset) = pagination(params.limit, params.offset);
    let filter = LocationFilter {
        search: params.search,
    };

    let locations = LocationRepository::list(&state.db, &filter, limit, offset).await?;
    let total = LocationRepository::count(&state.db, &filter).await?;

    Ok(Json(LocationListResponse {
        data: locations.into_iter().map(|b| b.into()).collect(),
        total,
        limit,
        offset,
    }))
}

/// Get a location by ID
#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location details", body = LocationResponse),
        (status = 404, description = "Location not found")
    ),
    tag = "Locations"
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LocationResponse>> {
    let location = LocationRepository::find_by_id(&state.db, id).await?;
    Ok(Json(location.into()))
}

/// Update a location
#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    request_body = UpdateLocationRequest,
    responses(
        (status = 200, description = "Location updated successfully", body = LocationResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Location not found")
    ),
    tag = "Locations"
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateLocationRequest>,
) -> AppResult<Json<LocationResponse>> {
    let update_location = UpdateLocation { name: payload.name };

    let location = LocationRepository::update(&state.db, id, &update_location).await?;
    Ok(Json(location.into()))
}

/// Delete a location together with its polishes and their worn layers
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 204, description = "Location deleted successfully"),
        (status = 404, description = "Location not found")
    ),
    tag = "Locations"
)]
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    LocationRepository::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
