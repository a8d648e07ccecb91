use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PolishType;
use super::timestamps::Stamp;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "worn_layers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub worn_id: i32,
    pub order: i32,
    pub layer_type: PolishType,
    pub polish_id: i32,
    pub created_at: TimeDateTimeWithTimeZone,
    pub updated_at: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::worn::Entity",
        from = "Column::WornId",
        to = "super::worn::Column::Id",
        on_delete = "Cascade"
    )]
    Worn,
    #[sea_orm(
        belongs_to = "super::polish::Entity",
        from = "Column::PolishId",
        to = "super::polish::Column::Id",
        on_delete = "Cascade"
    )]
    Polish,
}

impl Related<super::worn::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worn.def()
    }
}

impl Related<super::polish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Polish.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let stamp = Stamp::new(insert);
        self.created_at = stamp.frozen(self.created_at);
        self.updated_at = stamp.touched();
        Ok(self)
    }
}
