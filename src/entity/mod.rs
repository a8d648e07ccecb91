pub mod brand;
pub mod collection;
pub mod location;
pub mod polish;
pub mod sea_orm_active_enums;
pub mod worn;
pub mod worn_layer;
pub mod worn_photo;

mod timestamps;

pub mod prelude;

pub use prelude::*;
