pub mod brand;
pub mod collection;
pub mod location;
pub mod polish;
pub mod worn;
pub mod worn_layer;
pub mod worn_photo;

mod cascade;

pub use brand::BrandRepository;
pub use collection::CollectionRepository;
pub use location::LocationRepository;
pub use polish::PolishRepository;
pub use worn::WornRepository;
pub use worn_layer::WornLayerRepository;
pub use worn_photo::WornPhotoRepository;

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PrimaryKeyTrait, QueryFilter,
    QuerySelect,
};

use crate::error::{AppError, AppResult};

/// Uniform CRUD operations over one entity kind
#[async_trait]
pub trait Repository<T>
where
    T: Send + Sync,
{
    type Create: Send + Sync;
    type Update: Send + Sync;
    type Filter: Send + Sync;

    /// Validate, check references and insert a new record
    async fn create(db: &DatabaseConnection, input: &Self::Create) -> AppResult<T>;

    /// Find entity by ID
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<T>;

    /// Apply a partial update; timestamps other than `updated_at` never change
    async fn update(db: &DatabaseConnection, id: i32, input: &Self::Update) -> AppResult<T>;

    /// Delete entity by ID, cascading to owned records
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()>;

    /// List entities matching the filter, in the entity's default order
    async fn list(
        db: &DatabaseConnection,
        filter: &Self::Filter,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<T>>;

    /// Count entities matching the filter
    async fn count(db: &DatabaseConnection, filter: &Self::Filter) -> AppResult<u64>;
}

/// Load a record by primary key or fail with `NotFound("{what} {id}")`
pub(crate) async fn fetch<E, C>(conn: &C, id: i32, what: &str) -> AppResult<E::Model>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {}", what, id)))
}

/// Map ids to names for a batch of related records
pub(crate) async fn name_map<E, C>(
    conn: &C,
    id_column: E::Column,
    name_column: E::Column,
    ids: Vec<i32>,
) -> AppResult<HashMap<i32, String>>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(i32, String)> = E::find()
        .select_only()
        .column(id_column)
        .column(name_column)
        .filter(id_column.is_in(ids))
        .into_tuple()
        .all(conn)
        .await?;

    Ok(rows.into_iter().collect())
}

/// Trimmed, non-empty search term
pub(crate) fn search_term(search: &Option<String>) -> Option<&str> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
}
