use anyhow::Context;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use polish_tracker::admin::{Choice, EntityDescriptor, FieldDescriptor, FieldKind};
use polish_tracker::config::{Config, LogFormat};
use polish_tracker::handlers::{
    AdminSiteResponse, BrandListResponse, BrandResponse, CollectionListResponse,
    CollectionResponse, CreateBrandRequest, CreateCollectionRequest, CreateLocationRequest,
    CreatePolishRequest, CreateWornLayerRequest, CreateWornPhotoRequest, CreateWornRequest,
    LocationListResponse, LocationResponse, PolishListResponse, PolishResponse,
    RecordAvailabilityRequest, UpdateBrandRequest, UpdateCollectionRequest,
    UpdateLocationRequest, UpdatePolishRequest, UpdateWornLayerRequest, UpdateWornPhotoRequest,
    UpdateWornRequest, WornLayerListResponse, WornLayerResponse, WornListResponse,
    WornPhotoListResponse, WornPhotoResponse, WornResponse,
};
use polish_tracker::models::{PolishType, Shade};
use polish_tracker::state::AppState;
use polish_tracker::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::admin::admin_site,
        handlers::brand::create_brand,
        handlers::brand::list_brands,
        handlers::brand::get_brand,
        handlers::brand::update_brand,
        handlers::brand::delete_brand,
        handlers::location::create_location,
        handlers::location::list_locations,
        handlers::location::get_location,
        handlers::location::update_location,
        handlers::location::delete_location,
        handlers::collection::create_collection,
        handlers::collection::list_collections,
        handlers::collection::get_collection,
        handlers::collection::update_collection,
        handlers::collection::delete_collection,
        handlers::polish::create_polish,
        handlers::polish::list_polishes,
        handlers::polish::get_polish,
        handlers::polish::update_polish,
        handlers::polish::delete_polish,
        handlers::polish::record_availability,
        handlers::worn::create_worn,
        handlers::worn::list_worn,
        handlers::worn::get_worn,
        handlers::worn::update_worn,
        handlers::worn::delete_worn,
        handlers::worn::list_photos_for_worn,
        handlers::worn::list_layers_for_worn,
        handlers::worn_photo::create_worn_photo,
        handlers::worn_photo::list_worn_photos,
        handlers::worn_photo::get_worn_photo,
        handlers::worn_photo::update_worn_photo,
        handlers::worn_photo::delete_worn_photo,
        handlers::worn_layer::create_worn_layer,
        handlers::worn_layer::list_worn_layers,
        handlers::worn_layer::get_worn_layer,
        handlers::worn_layer::update_worn_layer,
        handlers::worn_layer::delete_worn_layer,
    ),
    components(schemas(
        PolishType,
        Shade,
        AdminSiteResponse,
        EntityDescriptor,
        FieldDescriptor,
        FieldKind,
        Choice,
        CreateBrandRequest,
        UpdateBrandRequest,
        BrandResponse,
        BrandListResponse,
        CreateLocationRequest,
        UpdateLocationRequest,
        LocationResponse,
        LocationListResponse,
        CreateCollectionRequest,
        UpdateCollectionRequest,
        CollectionResponse,
        CollectionListResponse,
        CreatePolishRequest,
        UpdatePolishRequest,
        RecordAvailabilityRequest,
        PolishResponse,
        PolishListResponse,
        CreateWornRequest,
        UpdateWornRequest,
        WornResponse,
        WornListResponse,
        CreateWornPhotoRequest,
        UpdateWornPhotoRequest,
        WornPhotoResponse,
        WornPhotoListResponse,
        CreateWornLayerRequest,
        UpdateWornLayerRequest,
        WornLayerResponse,
        WornLayerListResponse,
    )),
    tags(
        (name = "Admin", description = "Admin site description"),
        (name = "Brands", description = "Polish brand management endpoints"),
        (name = "Locations", description = "Storage location management endpoints"),
        (name = "Collections", description = "Brand collection management endpoints"),
        (name = "Polishes", description = "Polish inventory endpoints"),
        (name = "Worn", description = "Wear session endpoints"),
        (name = "Worn Photos", description = "Wear session photo endpoints"),
        (name = "Worn Layers", description = "Wear session layer endpoints")
    )
)]
struct ApiDoc;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format);
    let addr = config.server_addr();

    // Initialize application state (connects and migrates the database)
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .context("Failed to initialize application state")?;
    tracing::info!("Database ready");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
