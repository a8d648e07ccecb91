// Library crate for the nail polish tracker
// Exports modules for use by the server binary and tests

pub mod admin;
pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod state;
pub mod validation;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    admin_site, create_brand, create_collection, create_location, create_polish, create_worn,
    create_worn_layer, create_worn_photo, delete_brand, delete_collection, delete_location,
    delete_polish, delete_worn, delete_worn_layer, delete_worn_photo, get_brand, get_collection,
    get_location, get_polish, get_worn, get_worn_layer, get_worn_photo, list_brands,
    list_collections, list_layers_for_worn, list_locations, list_photos_for_worn, list_polishes,
    list_worn, list_worn_layers, list_worn_photos, record_availability, update_brand,
    update_collection, update_location, update_polish, update_worn, update_worn_layer,
    update_worn_photo,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Nail Polish Tracker is running" }))
        // Admin site descriptor
        .route("/api/admin", get(admin_site))
        // Brand routes
        .route("/api/brands", get(list_brands).post(create_brand))
        .route(
            "/api/brands/{id}",
            get(get_brand).put(update_brand).delete(delete_brand),
        )
        // Location routes
        .route("/api/locations", get(list_locations).post(create_location))
        .route(
            "/api/locations/{id}",
            get(get_location).put(update_location).delete(delete_location),
        )
        // Collection routes
        .route(
            "/api/collections",
            get(list_collections).post(create_collection),
        )
        .route(
            "/api/collections/{id}",
            get(get_collection)
                .put(update_collection)
                .delete(delete_collection),
        )
        // Polish routes
        .route("/api/polishes", get(list_polishes).post(create_polish))
        .route(
            "/api/polishes/{id}",
            get(get_polish).put(update_polish).delete(delete_polish),
        )
        .route("/api/polishes/{id}/availability", post(record_availability))
        // Wear session routes
        .route("/api/worn", get(list_worn).post(create_worn))
        .route(
            "/api/worn/{id}",
            get(get_worn).put(update_worn).delete(delete_worn),
        )
        .route("/api/worn/{id}/photos", get(list_photos_for_worn))
        .route("/api/worn/{id}/layers", get(list_layers_for_worn))
        // Photo routes
        .route(
            "/api/worn-photos",
            get(list_worn_photos).post(create_worn_photo),
        )
        .route(
            "/api/worn-photos/{id}",
            get(get_worn_photo)
                .put(update_worn_photo)
                .delete(delete_worn_photo),
        )
        // Layer routes
        .route(
            "/api/worn-layers",
            get(list_worn_layers).post(create_worn_layer),
        )
        .route(
            "/api/worn-layers/{id}",
            get(get_worn_layer)
                .put(update_worn_layer)
                .delete(delete_worn_layer),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
