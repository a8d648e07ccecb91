use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    JoinType, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Select, Set, TransactionTrait,
};
use time::OffsetDateTime;

use crate::entity::polish::{self, ActiveModel, Column, Relation};
use crate::entity::{
    brand, collection, location, worn_layer, BrandEntity, CollectionEntity, LocationEntity,
    PolishEntity, WornLayerEntity,
};
use crate::error::{AppError, AppResult};
use crate::models::{
    CreatePolish, Polish, PolishFilter, PolishType, UpdatePolish, DEFAULT_POLISH_TYPE,
    DEFAULT_SHADE,
};
use crate::repositories::{fetch, name_map, search_term, Repository};

const UNIQUE_KEY: &str = "brand, location, name";

/// Polish repository for database operations
pub struct PolishRepository;

impl PolishRepository {
    fn filtered(filter: &PolishFilter) -> Select<PolishEntity> {
        let mut query = PolishEntity::find();

        if let Some(brand_id) = filter.brand_id {
            query = query.filter(Column::BrandId.eq(brand_id));
        }
        if let Some(location_id) = filter.location_id {
            query = query.filter(Column::LocationId.eq(location_id));
        }
        if let Some(collection_id) = filter.collection_id {
            query = query.filter(Column::CollectionId.eq(collection_id));
        }
        if let Some(shade) = filter.shade {
            query = query.filter(Column::Shade.eq(shade));
        }
        if let Some(polish_type) = filter.polish_type {
            query = query.filter(Column::PolishType.eq(polish_type));
        }
        if let Some(is_available) = filter.is_available {
            query = query.filter(Column::IsAvailable.eq(is_available));
        }

        if let Some(term) = search_term(&filter.search) {
            let mut condition = Condition::any()
                .add(Column::Name.contains(term))
                .add(brand::Column::Name.contains(term))
                .add(Column::Shade.contains(term))
                .add(Column::PolishType.contains(term))
                .add(collection::Column::Name.contains(term));

            // "nail polish" should find NP rows as well
            if let Ok(polish_type) = term.parse::<PolishType>() {
                condition = condition.add(Column::PolishType.eq(polish_type));
            }

            query = query
                .join(JoinType::LeftJoin, Relation::Brand.def())
                .join(JoinType::LeftJoin, Relation::Collection.def())
                .filter(condition);
        }

        query
    }

    /// Attach brand, location and collection names to a batch of polish rows
    async fn hydrate<C>(conn: &C, models: Vec<polish::Model>) -> AppResult<Vec<Polish>>
    where
        C: ConnectionTrait,
    {
        let brands = name_map::<BrandEntity, _>(
            conn,
            brand::Column::Id,
            brand::Column::Name,
            models.iter().map(|m| m.brand_id).collect(),
        )
        .await?;
        let locations = name_map::<LocationEntity, _>(
            conn,
            location::Column::Id,
            location::Column::Name,
            models.iter().map(|m| m.location_id).collect(),
        )
        .await?;
        let collections = name_map::<CollectionEntity, _>(
            conn,
            collection::Column::Id,
            collection::Column::Name,
            models.iter().filter_map(|m| m.collection_id).collect(),
        )
        .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let brand_name = brands.get(&m.brand_id).cloned().unwrap_or_default();
                let location_name = locations.get(&m.location_id).cloned().unwrap_or_default();
                let collection_name = m.collection_id.and_then(|id| collections.get(&id).cloned());
                to_polish(m, brand_name, location_name, collection_name)
            })
            .collect())
    }

    async fn hydrate_one<C>(conn: &C, model: polish::Model) -> AppResult<Polish>
    where
        C: ConnectionTrait,
    {
        Self::hydrate(conn, vec![model])
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal("Polish hydration returned no rows".to_string()))
    }

    /// Record the outcome of a product URL availability check.
    /// This is the only write path for `check_url_at`.
    pub async fn record_availability(
        db: &DatabaseConnection,
        id: i32,
        is_available: bool,
    ) -> AppResult<Polish> {
        let model = fetch::<PolishEntity, _>(db, id, "Polish").await?;

        let mut active: ActiveModel = model.into();
        active.is_available = Set(is_available);
        active.check_url_at = Set(Some(OffsetDateTime::now_utc()));

        let result = active.update(db).await?;
        tracing::info!(polish_id = id, is_available, "Polish availability recorded");
        Self::hydrate_one(db, result).await
    }
}

#[async_trait]
impl Repository<Polish> for PolishRepository {
    type Create = CreatePolish;
    type Update = UpdatePolish;
    type Filter = PolishFilter;

    async fn create(db: &DatabaseConnection, input: &CreatePolish) -> AppResult<Polish> {
        input.validate()?;

        let txn = db.begin().await?;
        let brand = fetch::<BrandEntity, _>(&txn, input.brand_id, "Brand").await?;
        let location = fetch::<LocationEntity, _>(&txn, input.location_id, "Location").await?;
        let collection = match input.collection_id {
            Some(collection_id) => {
                Some(fetch::<CollectionEntity, _>(&txn, collection_id, "Collection").await?)
            }
            None => None,
        };

        let model = ActiveModel {
            brand_id: Set(brand.id),
            location_id: Set(location.id),
            collection_id: Set(collection.as_ref().map(|c| c.id)),
            name: Set(input.name.trim().to_string()),
            product_url: Set(input.product_url.clone()),
            check_url_at: Set(None),
            is_available: Set(input.is_available.unwrap_or(true)),
            shade: Set(input.shade.unwrap_or(DEFAULT_SHADE)),
            polish_type: Set(input.polish_type.unwrap_or(DEFAULT_POLISH_TYPE)),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| AppError::from_write(e, "Polish", UNIQUE_KEY))?;
        txn.commit().await?;

        tracing::info!(
            polish_id = result.id,
            brand_id = brand.id,
            location_id = location.id,
            "Polish created"
        );
        Ok(to_polish(
            result,
            brand.name,
            location.name,
            collection.map(|c| c.name),
        ))
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Polish> {
        let model = fetch::<PolishEntity, _>(db, id, "Polish").await?;
        Self::hydrate_one(db, model).await
    }

    async fn update(db: &DatabaseConnection, id: i32, input: &UpdatePolish) -> AppResult<Polish> {
        input.validate()?;

        let txn = db.begin().await?;
        let model = fetch::<PolishEntity, _>(&txn, id, "Polish").await?;
        let mut active: ActiveModel = model.into();

        if let Some(brand_id) = input.brand_id {
            fetch::<BrandEntity, _>(&txn, brand_id, "Brand").await?;
            active.brand_id = Set(brand_id);
        }
        if let Some(location_id) = input.location_id {
            fetch::<LocationEntity, _>(&txn, location_id, "Location").await?;
            active.location_id = Set(location_id);
        }
        if let Some(collection_id) = input.collection_id {
            if let Some(collection_id) = collection_id {
                fetch::<CollectionEntity, _>(&txn, collection_id, "Collection").await?;
            }
            active.collection_id = Set(collection_id);
        }
        if let Some(name) = &input.name {
            active.name = Set(name.trim().to_string());
        }
        if let Some(product_url) = &input.product_url {
            active.product_url = Set(product_url.clone());
        }
        if let Some(is_available) = input.is_available {
            active.is_available = Set(is_available);
        }
        if let Some(shade) = input.shade {
            active.shade = Set(shade);
        }
        if let Some(polish_type) = input.polish_type {
            active.polish_type = Set(polish_type);
        }

        // The unique index re-checks (brand, location, name) against other rows only
        let result = active
            .update(&txn)
            .await
            .map_err(|e| AppError::from_write(e, "Polish", UNIQUE_KEY))?;
        txn.commit().await?;

        Self::hydrate_one(db, result).await
    }

    /// Deletes the polish and the worn layers that used it
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let txn = db.begin().await?;
        let model = fetch::<PolishEntity, _>(&txn, id, "Polish").await?;

        let layers = WornLayerEntity::delete_many()
            .filter(worn_layer::Column::PolishId.eq(id))
            .exec(&txn)
            .await?;

        model.delete(&txn).await?;
        txn.commit().await?;

        tracing::info!(polish_id = id, layers = layers.rows_affected, "Polish deleted");
        Ok(())
    }

    async fn list(
        db: &DatabaseConnection,
        filter: &PolishFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<Polish>> {
        let models = Self::filtered(filter)
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .limit(limit.max(1))
            .offset(offset)
            .all(db)
            .await?;

        Self::hydrate(db, models).await
    }

    async fn count(db: &DatabaseConnection, filter: &PolishFilter) -> AppResult<u64> {
        let count = Self::filtered(filter).count(db).await?;
        Ok(count)
    }
}

fn to_polish(
    m: polish::Model,
    brand_name: String,
    location_name: String,
    collection_name: Option<String>,
) -> Polish {
    Polish {
        id: m.id,
        brand_id: m.brand_id,
        brand_name,
        location_id: m.location_id,
        location_name,
        collection_id: m.collection_id,
        collection_name,
        name: m.name,
        product_url: m.product_url,
        check_url_at: m.check_url_at,
        is_available: m.is_available,
        shade: m.shade,
        polish_type: m.polish_type,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}
