pub use super::brand::Entity as BrandEntity;
pub use super::collection::Entity as CollectionEntity;
pub use super::location::Entity as LocationEntity;
pub use super::polish::Entity as PolishEntity;
pub use super::sea_orm_active_enums::{PolishType, Shade};
pub use super::worn::Entity as WornEntity;
pub use super::worn_layer::Entity as WornLayerEntity;
pub use super::worn_photo::Entity as WornPhotoEntity;
