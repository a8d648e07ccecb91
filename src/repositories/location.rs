use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};

use crate::entity::location::{self, ActiveModel, Column};
use crate::entity::{polish, LocationEntity};
use crate::error::AppResult;
use crate::models::{CreateLocation, Location, LocationFilter, UpdateLocation};
use crate::repositories::cascade::delete_polishes;
use crate::repositories::{fetch, search_term, Repository};

/// Location repository for database operations
pub struct LocationRepository;

impl LocationRepository {
    fn filtered(filter: &LocationFilter) -> Select<LocationEntity> {
        let mut query = LocationEntity::find();

        if let Some(term) = search_term(&filter.search) {
            query = query.filter(Column::Name.contains(term));
        }

        query
    }
}

#[async_trait]
impl Repository<Location> for LocationRepository {
    type Create = CreateLocation;
    type Update = UpdateLocation;
    type Filter = LocationFilter;

    async fn create(db: &DatabaseConnection, input: &CreateLocation) -> AppResult<Location> {
        input.validate()?;

        let model = ActiveModel {
            name: Set(input.name.trim().to_string()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        tracing::info!(location_id = result.id, "Location created");
        Ok(result.into())
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Location> {
        let model = fetch::<LocationEntity, _>(db, id, "Location").await?;
        Ok(model.into())
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: &UpdateLocation,
    ) -> AppResult<Location> {
        input.validate()?;

        let model = fetch::<LocationEntity, _>(db, id, "Location").await?;
        let mut active: ActiveModel = model.into();

        if let Some(name) = &input.name {
            active.name = Set(name.trim().to_string());
        }

        let result = active.update(db).await?;
        Ok(result.into())
    }

    /// Deletes the location and every polish stored there
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let txn = db.begin().await?;
        let model = fetch::<LocationEntity, _>(&txn, id, "Location").await?;

        let removed = delete_polishes(
            &txn,
            Condition::all().add(polish::Column::LocationId.eq(id)),
        )
        .await?;

        model.delete(&txn).await?;
        txn.commit().await?;

        tracing::info!(
            location_id = id,
            polishes = removed.polishes,
            layers = removed.layers,
            "Location deleted"
        );
        Ok(())
    }

    async fn list(
        db: &DatabaseConnection,
        filter: &LocationFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<Location>> {
        let models = Self::filtered(filter)
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .limit(limit.max(1))
            .offset(offset)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection, filter: &LocationFilter) -> AppResult<u64> {
        let count = Self::filtered(filter).count(db).await?;
        Ok(count)
    }
}

impl From<location::Model> for Location {
    fn from(m: location::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
