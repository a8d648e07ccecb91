use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};

use crate::entity::worn::{self, ActiveModel, Column};
use crate::entity::{worn_layer, worn_photo, WornEntity, WornLayerEntity, WornPhotoEntity};
use crate::error::AppResult;
use crate::models::{CreateWorn, UpdateWorn, Worn, WornFilter};
use crate::repositories::{fetch, search_term, Repository};

/// Worn repository for database operations
pub struct WornRepository;

impl WornRepository {
    fn filtered(filter: &WornFilter) -> Select<WornEntity> {
        let mut query = WornEntity::find();

        if let Some(term) = search_term(&filter.search) {
            query = query.filter(Column::Notes.contains(term));
        }

        query
    }
}

#[async_trait]
impl Repository<Worn> for WornRepository {
    type Create = CreateWorn;
    type Update = UpdateWorn;
    type Filter = WornFilter;

    /// `worn_at` is stamped with the creation time
    async fn create(db: &DatabaseConnection, input: &CreateWorn) -> AppResult<Worn> {
        input.validate()?;

        let model = ActiveModel {
            notes: Set(input.notes.clone()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        tracing::info!(worn_id = result.id, "Worn session created");
        Ok(result.into())
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Worn> {
        let model = fetch::<WornEntity, _>(db, id, "Worn").await?;
        Ok(model.into())
    }

    async fn update(db: &DatabaseConnection, id: i32, input: &UpdateWorn) -> AppResult<Worn> {
        input.validate()?;

        let model = fetch::<WornEntity, _>(db, id, "Worn").await?;
        let mut active: ActiveModel = model.into();

        if let Some(notes) = &input.notes {
            active.notes = Set(notes.clone());
        }

        let result = active.update(db).await?;
        Ok(result.into())
    }

    /// Deletes the session with its photos and layers
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let txn = db.begin().await?;
        let model = fetch::<WornEntity, _>(&txn, id, "Worn").await?;

        let photos = WornPhotoEntity::delete_many()
            .filter(worn_photo::Column::WornId.eq(id))
            .exec(&txn)
            .await?;
        let layers = WornLayerEntity::delete_many()
            .filter(worn_layer::Column::WornId.eq(id))
            .exec(&txn)
            .await?;

        model.delete(&txn).await?;
        txn.commit().await?;

        tracing::info!(
            worn_id = id,
            photos = photos.rows_affected,
            layers = layers.rows_affected,
            "Worn session deleted"
        );
        Ok(())
    }

    /// Most recent sessions first
    async fn list(
        db: &DatabaseConnection,
        filter: &WornFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<Worn>> {
        let models = Self::filtered(filter)
            .order_by_desc(Column::WornAt)
            .order_by_desc(Column::Id)
            .limit(limit.max(1))
            .offset(offset)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection, filter: &WornFilter) -> AppResult<u64> {
        let count = Self::filtered(filter).count(db).await?;
        Ok(count)
    }
}

impl From<worn::Model> for Worn {
    fn from(m: worn::Model) -> Self {
        Self {
            id: m.id,
            worn_at: m.worn_at,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
