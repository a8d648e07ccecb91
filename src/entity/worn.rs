use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use super::timestamps::Stamp;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "worn")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub worn_at: TimeDateTimeWithTimeZone,
    pub notes: Option<String>,
    pub created_at: TimeDateTimeWithTimeZone,
    pub updated_at: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::worn_photo::Entity")]
    Photos,
    #[sea_orm(has_many = "super::worn_layer::Entity")]
    Layers,
}

impl Related<super::worn_photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photos.def()
    }
}

impl Related<super::worn_layer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Layers.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // worn_at shares the creation instant and is frozen with it
        let stamp = Stamp::new(insert);
        self.worn_at = stamp.frozen(self.worn_at);
        self.created_at = stamp.frozen(self.created_at);
        self.updated_at = stamp.touched();
        Ok(self)
    }
}
