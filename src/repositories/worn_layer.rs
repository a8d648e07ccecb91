use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
    TransactionTrait,
};

use crate::entity::worn_layer::{self, ActiveModel, Column, Relation};
use crate::entity::{polish, worn, PolishEntity, WornEntity, WornLayerEntity};
use crate::error::{AppError, AppResult};
use crate::models::{
    CreateWornLayer, UpdateWornLayer, WornLayer, WornLayerFilter, DEFAULT_LAYER_TYPE,
};
use crate::repositories::{fetch, name_map, Repository};

const UNIQUE_KEY: &str = "worn, order";

/// Worn layer repository for database operations
pub struct WornLayerRepository;

impl WornLayerRepository {
    fn filtered(filter: &WornLayerFilter) -> Select<WornLayerEntity> {
        let mut query = WornLayerEntity::find();

        if let Some(worn_id) = filter.worn_id {
            query = query.filter(Column::WornId.eq(worn_id));
        }
        if let Some(polish_id) = filter.polish_id {
            query = query.filter(Column::PolishId.eq(polish_id));
        }

        query
    }

    /// Attach polish names to a batch of layer rows
    async fn hydrate<C>(conn: &C, models: Vec<worn_layer::Model>) -> AppResult<Vec<WornLayer>>
    where
        C: ConnectionTrait,
    {
        let polish_ids = models.iter().map(|m| m.polish_id).collect();
        let polishes =
            name_map::<PolishEntity, _>(conn, polish::Column::Id, polish::Column::Name, polish_ids)
                .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let polish_name = polishes.get(&m.polish_id).cloned().unwrap_or_default();
                to_layer(m, polish_name)
            })
            .collect())
    }
}

#[async_trait]
impl Repository<WornLayer> for WornLayerRepository {
    type Create = CreateWornLayer;
    type Update = UpdateWornLayer;
    type Filter = WornLayerFilter;

    async fn create(db: &DatabaseConnection, input: &CreateWornLayer) -> AppResult<WornLayer> {
        input.validate()?;

        let txn = db.begin().await?;
        let worn = fetch::<WornEntity, _>(&txn, input.worn_id, "Worn").await?;
        let polish = fetch::<PolishEntity, _>(&txn, input.polish_id, "Polish").await?;

        let model = ActiveModel {
            worn_id: Set(worn.id),
            order: Set(input.order),
            layer_type: Set(input.layer_type.unwrap_or(DEFAULT_LAYER_TYPE)),
            polish_id: Set(polish.id),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| AppError::from_write(e, "Worn layer", UNIQUE_KEY))?;
        txn.commit().await?;

        tracing::info!(
            layer_id = result.id,
            worn_id = worn.id,
            order = result.order,
            "Worn layer created"
        );
        Ok(to_layer(result, polish.name))
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<WornLayer> {
        let model = fetch::<WornLayerEntity, _>(db, id, "Worn layer").await?;
        let polish = fetch::<PolishEntity, _>(db, model.polish_id, "Polish").await?;
        Ok(to_layer(model, polish.name))
    }

    async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: &UpdateWornLayer,
    ) -> AppResult<WornLayer> {
        input.validate()?;

        let txn = db.begin().await?;
        let model = fetch::<WornLayerEntity, _>(&txn, id, "Worn layer").await?;
        let polish_id = input.polish_id.unwrap_or(model.polish_id);
        let polish = fetch::<PolishEntity, _>(&txn, polish_id, "Polish").await?;

        let mut active: ActiveModel = model.into();
        active.polish_id = Set(polish.id);

        if let Some(worn_id) = input.worn_id {
            fetch::<WornEntity, _>(&txn, worn_id, "Worn").await?;
            active.worn_id = Set(worn_id);
        }
        if let Some(order) = input.order {
            active.order = Set(order);
        }
        if let Some(layer_type) = input.layer_type {
            active.layer_type = Set(layer_type);
        }

        let result = active
            .update(&txn)
            .await
            .map_err(|e| AppError::from_write(e, "Worn layer", UNIQUE_KEY))?;
        txn.commit().await?;

        Ok(to_layer(result, polish.name))
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let model = fetch::<WornLayerEntity, _>(db, id, "Worn layer").await?;
        model.delete(db).await?;
        Ok(())
    }

    /// Most recent session first, then by layer order within a session
    async fn list(
        db: &DatabaseConnection,
        filter: &WornLayerFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<WornLayer>> {
        let models = Self::filtered(filter)
            .join(JoinType::InnerJoin, Relation::Worn.def())
            .order_by_desc(worn::Column::WornAt)
            .order_by_desc(Column::WornId)
            .order_by_asc(Column::Order)
            .limit(limit.max(1))
            .offset(offset)
            .all(db)
            .await?;

        Self::hydrate(db, models).await
    }

    async fn count(db: &DatabaseConnection, filter: &WornLayerFilter) -> AppResult<u64> {
        let count = Self::filtered(filter).count(db).await?;
        Ok(count)
    }
}

fn to_layer(m: worn_layer::Model, polish_name: String) -> WornLayer {
    WornLayer {
        id: m.id,
        worn_id: m.worn_id,
        order: m.order,
        layer_type: m.layer_type,
        polish_id: m.polish_id,
        polish_name,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}
