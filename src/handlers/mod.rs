pub mod admin;
pub mod brand;
pub mod collection;
pub mod common;
pub mod location;
pub mod polish;
pub mod worn;
pub mod worn_layer;
pub mod worn_photo;

pub use admin::{admin_site, AdminSiteResponse};
pub use brand::{
    create_brand, delete_brand, get_brand, list_brands, update_brand, BrandListResponse,
    BrandResponse, CreateBrandRequest, UpdateBrandRequest,
};
pub use collection::{
    create_collection, delete_collection, get_collection, list_collections, update_collection,
    CollectionListResponse, CollectionResponse, CreateCollectionRequest, UpdateCollectionRequest,
};
pub use common::{AppJson, AppQuery, PaginationParams};
pub use location::{
    create_location, delete_location, get_location, list_locations, update_location,
    CreateLocationRequest, LocationListResponse, LocationResponse, UpdateLocationRequest,
};
pub use polish::{
    create_polish, delete_polish, get_polish, list_polishes, record_availability, update_polish,
    CreatePolishRequest, PolishListResponse, PolishResponse, RecordAvailabilityRequest,
    UpdatePolishRequest,
};
pub use worn::{
    create_worn, delete_worn, get_worn, list_layers_for_worn, list_photos_for_worn, list_worn,
    update_worn, CreateWornRequest, UpdateWornRequest, WornListResponse, WornResponse,
};
pub use worn_layer::{
    create_worn_layer, delete_worn_layer, get_worn_layer, list_worn_layers, update_worn_layer,
    CreateWornLayerRequest, UpdateWornLayerRequest, WornLayerListResponse, WornLayerResponse,
};
pub use worn_photo::{
    create_worn_photo, delete_worn_photo, get_worn_photo, list_worn_photos, update_worn_photo,
    CreateWornPhotoRequest, UpdateWornPhotoRequest, WornPhotoListResponse, WornPhotoResponse,
};
