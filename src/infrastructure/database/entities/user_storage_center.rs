//! Pivot between users and storage_centers

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_storage_centers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub storage_center_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::storage_center::Entity",
        from = "Column::StorageCenterId",
        to = "super::storage_center::Column::Id",
        on_delete = "Cascade"
    )]
    StorageCenter,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::storage_center::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StorageCenter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
