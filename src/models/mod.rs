pub mod brand;
pub mod collection;
pub mod location;
pub mod polish;
pub mod worn;
pub mod worn_layer;
pub mod worn_photo;

pub use brand::*;
pub use collection::*;
pub use location::*;
pub use polish::*;
pub use worn::*;
pub use worn_layer::*;
pub use worn_photo::*;

pub use crate::entity::sea_orm_active_enums::{PolishType, Shade};
