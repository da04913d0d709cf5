//! User entity for database

use sea_orm::entity::prelude::*;

/// User model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(nullable)]
    pub first_name: Option<String>,
    #[sea_orm(nullable)]
    pub last_name: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    /// bcrypt hash
    pub password: String,
    #[sea_orm(nullable)]
    pub charge_per_month: Option<f64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::refresh_token::Entity")]
    RefreshTokens,
}

impl Related<super::refresh_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RefreshTokens.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_service::Relation::Service.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_service::Relation::User.def().rev())
    }
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_server::Relation::Server.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_server::Relation::User.def().rev())
    }
}

impl Related<super::storage_center::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_storage_center::Relation::StorageCenter.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_storage_center::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
