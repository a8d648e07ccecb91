use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};

use crate::entity::brand::{self, ActiveModel, Column};
use crate::entity::{collection, polish, BrandEntity, CollectionEntity};
use crate::error::AppResult;
use crate::models::{Brand, BrandFilter, CreateBrand, UpdateBrand};
use crate::repositories::cascade::delete_polishes;
use crate::repositories::{fetch, search_term, Repository};

/// Brand repository for database operations
pub struct BrandRepository;

impl BrandRepository {
    fn filtered(filter: &BrandFilter) -> Select<BrandEntity> {
        let mut query = BrandEntity::find();

        if let Some(term) = search_term(&filter.search) {
            query = query.filter(Column::Name.contains(term));
        }

        query
    }
}

#[async_trait]
impl Repository<Brand> for BrandRepository {
    type Create = CreateBrand;
    type Update = UpdateBrand;
    type Filter = BrandFilter;

    async fn create(db: &DatabaseConnection, input: &CreateBrand) -> AppResult<Brand> {
        input.validate()?;

        let model = ActiveModel {
            name: Set(input.name.trim().to_string()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        tracing::info!(brand_id = result.id, "Brand created");
        Ok(result.into())
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Brand> {
        let model = fetch::<BrandEntity, _>(db, id, "Brand").await?;
        Ok(model.into())
    }

    async fn update(db: &DatabaseConnection, id: i32, input: &UpdateBrand) -> AppResult<Brand> {
        input.validate()?;

        let model = fetch::<BrandEntity, _>(db, id, "Brand").await?;
        let mut active: ActiveModel = model.into();

        if let Some(name) = &input.name {
            active.name = Set(name.trim().to_string());
        }

        let result = active.update(db).await?;
        Ok(result.into())
    }

    /// Deletes the brand, its collections, every polish of the brand or of
    /// those collections, and the worn layers using those polishes
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let txn = db.begin().await?;
        let model = fetch::<BrandEntity, _>(&txn, id, "Brand").await?;

        let collection_ids: Vec<i32> = CollectionEntity::find()
            .select_only()
            .column(collection::Column::Id)
            .filter(collection::Column::BrandId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        let removed = delete_polishes(
            &txn,
            Condition::any()
                .add(polish::Column::BrandId.eq(id))
                .add(polish::Column::CollectionId.is_in(collection_ids)),
        )
        .await?;

        let collections = CollectionEntity::delete_many()
            .filter(collection::Column::BrandId.eq(id))
            .exec(&txn)
            .await?;

        model.delete(&txn).await?;
        txn.commit().await?;

        tracing::info!(
            brand_id = id,
            collections = collections.rows_affected,
            polishes = removed.polishes,
            layers = removed.layers,
            "Brand deleted"
        );
        Ok(())
    }

    async fn list(
        db: &DatabaseConnection,
        filter: &BrandFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<Brand>> {
        let models = Self::filtered(filter)
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .limit(limit.max(1))
            .offset(offset)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection, filter: &BrandFilter) -> AppResult<u64> {
        let count = Self::filtered(filter).count(db).await?;
        Ok(count)
    }
}

// Conversion from SeaORM model to our domain model
impl From<brand::Model> for Brand {
    fn from(m: brand::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
