use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use super::timestamps::Stamp;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "worn_photos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub worn_id: i32,
    pub photo_type: String,
    /// Opaque reference into the media store
    pub image: String,
    pub notes: Option<String>,
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
}

impl Related<super::worn::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worn.def()
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
