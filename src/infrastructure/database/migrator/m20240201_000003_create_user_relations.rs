//! Create the user ↔ catalog pivot tables
//!
//! Rows cascade away when either side is deleted.

use sea_orm_migration::prelude::*;

use super::m20240201_000001_create_users::Users;
use super::m20240201_000002_create_catalog::{Servers, Services, StorageCenters};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Build a `(user_id, <target>_id)` pivot table
fn pivot_table(
    table: impl IntoIden + 'static,
    target_col: impl IntoIden + 'static,
    target_table: impl IntoIden + 'static,
    name: &str,
) -> TableCreateStatement {
    let table = table.into_iden();
    let target_col = target_col.into_iden();
    let target_table = target_table.into_iden();

    Table::create()
        .table(table.clone())
        .if_not_exists()
        .col(ColumnDef::new(Pivot::UserId).integer().not_null())
        .col(ColumnDef::new(target_col.clone()).integer().not_null())
        .col(
            ColumnDef::new(Pivot::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(Pivot::UserId)
                .col(target_col.clone()),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{}_user", name))
                .from(table.clone(), Pivot::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{}_target", name))
                .from(table, target_col)
                .to(target_table, Alias::new("id"))
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(pivot_table(
                UserServices::Table,
                UserServices::ServiceId,
                Services::Table,
                "user_services",
            ))
            .await?;

        manager
            .create_table(pivot_table(
                UserServers::Table,
                UserServers::ServerId,
                Servers::Table,
                "user_servers",
            ))
            .await?;

        manager
            .create_table(pivot_table(
                UserStorageCenters::Table,
                UserStorageCenters::StorageCenterId,
                StorageCenters::Table,
                "user_storage_centers",
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserStorageCenters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserServers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserServices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Pivot {
    UserId,
    CreatedAt,
}

#[derive(Iden)]
pub enum UserServices {
    Table,
    ServiceId,
}

#[derive(Iden)]
pub enum UserServers {
    Table,
    ServerId,
}

#[derive(Iden)]
pub enum UserStorageCenters {
    Table,
    StorageCenterId,
}
