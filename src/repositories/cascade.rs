use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use crate::entity::{polish, worn_layer, PolishEntity, WornLayerEntity};

/// Rows removed by a cascading delete
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Removed {
    pub polishes: u64,
    pub layers: u64,
}

/// Delete every polish matching `condition` and the worn layers that use them
pub(crate) async fn delete_polishes<C>(conn: &C, condition: Condition) -> Result<Removed, DbErr>
where
    C: ConnectionTrait,
{
    let ids: Vec<i32> = PolishEntity::find()
        .select_only()
        .column(polish::Column::Id)
        .filter(condition)
        .into_tuple()
        .all(conn)
        .await?;

    if ids.is_empty() {
        return Ok(Removed::default());
    }

    let layers = WornLayerEntity::delete_many()
        .filter(worn_layer::Column::PolishId.is_in(ids.clone()))
        .exec(conn)
        .await?;

    let polishes = PolishEntity::delete_many()
        .filter(polish::Column::Id.is_in(ids))
        .exec(conn)
        .await?;

    Ok(Removed {
        polishes: polishes.rows_affected,
        layers: layers.rows_affected,
    })
}
