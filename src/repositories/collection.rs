use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
    TransactionTrait,
};

use crate::entity::collection::{self, ActiveModel, Column};
use crate::entity::{brand, polish, BrandEntity, CollectionEntity};
use crate::error::AppResult;
use crate::models::{Collection, CollectionFilter, CreateCollection, UpdateCollection};
use crate::repositories::cascade::delete_polishes;
use crate::repositories::{fetch, name_map, search_term, Repository};

/// Collection repository for database operations
pub struct CollectionRepository;

impl CollectionRepository {
    fn filtered(filter: &CollectionFilter) -> Select<CollectionEntity> {
        let mut query = CollectionEntity::find();

        if let Some(brand_id) = filter.brand_id {
            query = query.filter(Column::BrandId.eq(brand_id));
        }
        if let Some(name) = &filter.name {
            query = query.filter(Column::Name.eq(name.as_str()));
        }
        if let Some(term) = search_term(&filter.search) {
            query = query.filter(Column::Name.contains(term));
        }

        query
    }

    /// Attach brand names to a batch of collection rows
    async fn hydrate<C>(conn: &C, models: Vec<collection::Model>) -> AppResult<Vec<Collection>>
    where
        C: ConnectionTrait,
    {
        let brand_ids = models.iter().map(|m| m.brand_id).collect();
        let brands =
            name_map::<BrandEntity, _>(conn, brand::Column::Id, brand::Column::Name, brand_ids)
                .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let brand_name = brands.get(&m.brand_id).cloned().unwrap_or_default();
                to_collection(m, brand_name)
            })
            .collect())
    }
}

#[async_trait]
impl Repository<Collection> for CollectionRepository {
    type Create = CreateCollection;
    type Update = UpdateCollection;
    type Filter = CollectionFilter;

    async fn create(db: &DatabaseConnection, input: &CreateCollection) -> AppResult<Collection> {
        input.validate()?;

        let txn = db.begin().await?;
        let brand = fetch::<BrandEntity, _>(&txn, input.brand_id, "Brand").await?;

        let model = ActiveModel {
            brand_id: Set(brand.id),
            name: Set(input.name.trim().to_string()),
            ..Default::default()
        };

        let result = model.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(
            collection_id = result.id,
            brand_id = brand.id,
            "Collection created"
        );
        Ok(to_collection(result, brand.name))
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Collection> {
        let model = fetch::<CollectionEntity, _>(db, id, "Collection").await?;
        let brand = fetch::<BrandEntity, _>(db, model.brand_id, "Brand").await?;
        Ok(to_collection(model, brand.name))
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: &UpdateCollection,
    ) -> AppResult<Collection> {
        input.validate()?;

        let txn = db.begin().await?;
        let model = fetch::<CollectionEntity, _>(&txn, id, "Collection").await?;
        let brand_id = input.brand_id.unwrap_or(model.brand_id);
        let brand = fetch::<BrandEntity, _>(&txn, brand_id, "Brand").await?;

        let mut active: ActiveModel = model.into();
        active.brand_id = Set(brand.id);
        if let Some(name) = &input.name {
            active.name = Set(name.trim().to_string());
        }

        let result = active.update(&txn).await?;
        txn.commit().await?;

        Ok(to_collection(result, brand.name))
    }

    /// Deletes the collection and every polish linked to it
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let txn = db.begin().await?;
        let model = fetch::<CollectionEntity, _>(&txn, id, "Collection").await?;

        let removed = delete_polishes(
            &txn,
            Condition::all().add(polish::Column::CollectionId.eq(id)),
        )
        .await?;

        model.delete(&txn).await?;
        txn.commit().await?;

        tracing::info!(
            collection_id = id,
            polishes = removed.polishes,
            layers = removed.layers,
            "Collection deleted"
        );
        Ok(())
    }

    async fn list(
        db: &DatabaseConnection,
        filter: &CollectionFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<Collection>> {
        let models = Self::filtered(filter)
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .limit(limit.max(1))
            .offset(offset)
            .all(db)
            .await?;

        Self::hydrate(db, models).await
    }

    async fn count(db: &DatabaseConnection, filter: &CollectionFilter) -> AppResult<u64> {
        let count = Self::filtered(filter).count(db).await?;
        Ok(count)
    }
}

fn to_collection(m: collection::Model, brand_name: String) -> Collection {
    Collection {
        id: m.id,
        brand_id: m.brand_id,
        brand_name,
        name: m.name,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}
