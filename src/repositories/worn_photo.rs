use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
    TransactionTrait,
};

use crate::entity::worn_photo::{self, ActiveModel, Column, Relation};
use crate::entity::{worn, WornEntity, WornPhotoEntity};
use crate::error::AppResult;
use crate::models::{CreateWornPhoto, UpdateWornPhoto, WornPhoto, WornPhotoFilter};
use crate::repositories::{fetch, search_term, Repository};

/// Worn photo repository. Image bytes live in the media store; only the
/// reference is persisted here.
pub struct WornPhotoRepository;

impl WornPhotoRepository {
    fn filtered(filter: &WornPhotoFilter) -> Select<WornPhotoEntity> {
        let mut query = WornPhotoEntity::find();

        if let Some(worn_id) = filter.worn_id {
            query = query.filter(Column::WornId.eq(worn_id));
        }
        if let Some(term) = search_term(&filter.search) {
            query = query.filter(Column::PhotoType.contains(term));
        }

        query
    }
}

#[async_trait]
impl Repository<WornPhoto> for WornPhotoRepository {
    type Create = CreateWornPhoto;
    type Update = UpdateWornPhoto;
    type Filter = WornPhotoFilter;

    async fn create(db: &DatabaseConnection, input: &CreateWornPhoto) -> AppResult<WornPhoto> {
        input.validate()?;

        let txn = db.begin().await?;
        let worn = fetch::<WornEntity, _>(&txn, input.worn_id, "Worn").await?;

        let model = ActiveModel {
            worn_id: Set(worn.id),
            photo_type: Set(input.photo_type.trim().to_string()),
            image: Set(input.image.clone()),
            notes: Set(input.notes.clone()),
            ..Default::default()
        };

        let result = model.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(photo_id = result.id, worn_id = worn.id, "Worn photo created");
        Ok(result.into())
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<WornPhoto> {
        let model = fetch::<WornPhotoEntity, _>(db, id, "Worn photo").await?;
        Ok(model.into())
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: &UpdateWornPhoto,
    ) -> AppResult<WornPhoto> {
        input.validate()?;

        let txn = db.begin().await?;
        let model = fetch::<WornPhotoEntity, _>(&txn, id, "Worn photo").await?;
        let mut active: ActiveModel = model.into();

        if let Some(worn_id) = input.worn_id {
            fetch::<WornEntity, _>(&txn, worn_id, "Worn").await?;
            active.worn_id = Set(worn_id);
        }
        if let Some(photo_type) = &input.photo_type {
            active.photo_type = Set(photo_type.trim().to_string());
        }
        if let Some(image) = &input.image {
            active.image = Set(image.clone());
        }
        if let Some(notes) = &input.notes {
            active.notes = Set(notes.clone());
        }

        let result = active.update(&txn).await?;
        txn.commit().await?;

        Ok(result.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let model = fetch::<WornPhotoEntity, _>(db, id, "Worn photo").await?;
        model.delete(db).await?;
        Ok(())
    }

    /// Ordered by the parent session, most recent first
    async fn list(
        db: &DatabaseConnection,
        filter: &WornPhotoFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<WornPhoto>> {
        let models = Self::filtered(filter)
            .join(JoinType::InnerJoin, Relation::Worn.def())
            .order_by_desc(worn::Column::WornAt)
            .order_by_desc(Column::Id)
            .limit(limit.max(1))
            .offset(offset)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection, filter: &WornPhotoFilter) -> AppResult<u64> {
        let count = Self::filtered(filter).count(db).await?;
        Ok(count)
    }
}

impl From<worn_photo::Model> for WornPhoto {
    fn from(m: worn_photo::Model) -> Self {
        Self {
            id: m.id,
            worn_id: m.worn_id,
            photo_type: m.photo_type,
            image: m.image,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
