use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::admin::{self, EntityDescriptor};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminSiteResponse {
    pub site_header: String,
    pub site_title: String,
    pub index_title: String,
    pub entities: Vec<EntityDescriptor>,
}

/// Describe the admin site and every entity it manages
#[utoipa::path(
    get,
    path = "/api/admin",
    responses(
        (status = 200, description = "Admin site descriptor", body = AdminSiteResponse)
    ),
    tag = "Admin"
)]
pub async fn admin_site(State(state): State<AppState>) -> Json<AdminSiteResponse> {
    Json(AdminSiteResponse {
        site_header: state.config.site_header.clone(),
        site_title: state.config.site_title.clone(),
        index_title: state.config.index_title.clone(),
        entities: admin::entities(),
    })
}
