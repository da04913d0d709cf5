//! SeaORM implementation of UserRepository

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::debug;

use super::catalog_repository::{
    server_model_to_domain, service_model_to_domain, storage_center_model_to_domain,
};
use super::{db_err, is_unique_violation};
use crate::domain::{
    CreateUserDto, DomainError, DomainResult, RelationKind, Server, Service, StorageCenter,
    UpdateUserDto, User, UserRepository,
};
use crate::infrastructure::database::entities::{
    refresh_token, server, service, service_group, storage_center, user, user_server,
    user_service, user_storage_center,
};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        password_hash: model.password,
        charge_per_month: model.charge_per_month,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn email_conflict(e: sea_orm::DbErr) -> DomainError {
    if is_unique_violation(&e) {
        DomainError::Conflict("Email already exists".to_string())
    } else {
        db_err(e)
    }
}

// ── Relation replacement ────────────────────────────────────────

fn ensure_all_found(kind: RelationKind, found: u64, expected: usize) -> DomainResult<()> {
    if found as usize != expected {
        return Err(DomainError::RelationNotFound {
            relation: kind.label(),
        });
    }
    Ok(())
}

/// Replace one relation set of a user inside `txn`.
///
/// Duplicate IDs collapse to one pivot row. Every ID must reference an
/// existing row.
async fn replace_relation(
    txn: &DatabaseTransaction,
    user_id: i32,
    kind: RelationKind,
    ids: &[i32],
) -> DomainResult<()> {
    let ids: Vec<i32> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
    let now = Utc::now();

    match kind {
        RelationKind::Services => {
            let found = service::Entity::find()
                .filter(service::Column::Id.is_in(ids.iter().copied()))
                .count(txn)
                .await
                .map_err(db_err)?;
            ensure_all_found(kind, found, ids.len())?;

            user_service::Entity::delete_many()
                .filter(user_service::Column::UserId.eq(user_id))
                .exec(txn)
                .await
                .map_err(db_err)?;

            if !ids.is_empty() {
                user_service::Entity::insert_many(ids.iter().map(|&service_id| {
                    user_service::ActiveModel {
                        user_id: Set(user_id),
                        service_id: Set(service_id),
                        created_at: Set(now),
                    }
                }))
                .exec_without_returning(txn)
                .await
                .map_err(db_err)?;
            }
        }
        RelationKind::Servers => {
            let found = server::Entity::find()
                .filter(server::Column::Id.is_in(ids.iter().copied()))
                .count(txn)
                .await
                .map_err(db_err)?;
            ensure_all_found(kind, found, ids.len())?;

            user_server::Entity::delete_many()
                .filter(user_server::Column::UserId.eq(user_id))
                .exec(txn)
                .await
                .map_err(db_err)?;

            if !ids.is_empty() {
                user_server::Entity::insert_many(ids.iter().map(|&server_id| {
                    user_server::ActiveModel {
                        user_id: Set(user_id),
                        server_id: Set(server_id),
                        created_at: Set(now),
                    }
                }))
                .exec_without_returning(txn)
                .await
                .map_err(db_err)?;
            }
        }
        RelationKind::StorageCenters => {
            let found = storage_center::Entity::find()
                .filter(storage_center::Column::Id.is_in(ids.iter().copied()))
                .count(txn)
                .await
                .map_err(db_err)?;
            ensure_all_found(kind, found, ids.len())?;

            user_storage_center::Entity::delete_many()
                .filter(user_storage_center::Column::UserId.eq(user_id))
                .exec(txn)
                .await
                .map_err(db_err)?;

            if !ids.is_empty() {
                user_storage_center::Entity::insert_many(ids.iter().map(|&storage_center_id| {
                    user_storage_center::ActiveModel {
                        user_id: Set(user_id),
                        storage_center_id: Set(storage_center_id),
                        created_at: Set(now),
                    }
                }))
                .exec_without_returning(txn)
                .await
                .map_err(db_err)?;
            }
        }
    }

    debug!(user_id, relation = kind.label(), count = ids.len(), "Relation replaced");
    Ok(())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, dto: CreateUserDto) -> DomainResult<User> {
        let now = Utc::now();
        let model = user::ActiveModel {
            first_name: Set(dto.first_name),
            last_name: Set(dto.last_name),
            email: Set(dto.email),
            password: Set(dto.password_hash),
            charge_per_month: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = model.insert(&self.db).await.map_err(email_conflict)?;
        Ok(user_model_to_domain(model))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn update(&self, id: i32, dto: UpdateUserDto) -> DomainResult<User> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = user::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("User", id))?;

        for (kind, ids) in dto.relation_replacements() {
            if let Some(ids) = ids {
                replace_relation(&txn, id, kind, ids).await?;
            }
        }

        let mut active: user::ActiveModel = existing.into();
        if let Some(first_name) = dto.first_name {
            active.first_name = Set(Some(first_name));
        }
        if let Some(last_name) = dto.last_name {
            active.last_name = Set(Some(last_name));
        }
        if let Some(email) = dto.email {
            active.email = Set(email);
        }
        if let Some(password_hash) = dto.password_hash {
            active.password = Set(password_hash);
        }
        if let Some(charge) = dto.charge_per_month {
            active.charge_per_month = Set(Some(charge));
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&txn).await.map_err(email_conflict)?;
        txn.commit().await.map_err(db_err)?;

        Ok(user_model_to_domain(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        user_service::Entity::delete_many()
            .filter(user_service::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        user_server::Entity::delete_many()
            .filter(user_server::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        user_storage_center::Entity::delete_many()
            .filter(user_storage_center::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        refresh_token::Entity::delete_many()
            .filter(refresh_token::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let result = user::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("User", id));
        }

        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn services(&self, user_id: i32) -> DomainResult<Vec<Service>> {
        let rows = service::Entity::find()
            .join(JoinType::InnerJoin, user_service::Relation::Service.def().rev())
            .filter(user_service::Column::UserId.eq(user_id))
            .order_by_asc(service::Column::Id)
            .find_also_related(service_group::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|(model, group)| service_model_to_domain(model, group))
            .collect())
    }

    async fn servers(&self, user_id: i32) -> DomainResult<Vec<Server>> {
        let rows = server::Entity::find()
            .join(JoinType::InnerJoin, user_server::Relation::Server.def().rev())
            .filter(user_server::Column::UserId.eq(user_id))
            .order_by_asc(server::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(server_model_to_domain).collect())
    }

    async fn storage_centers(&self, user_id: i32) -> DomainResult<Vec<StorageCenter>> {
        let rows = storage_center::Entity::find()
            .join(
                JoinType::InnerJoin,
                user_storage_center::Relation::StorageCenter.def().rev(),
            )
            .filter(user_storage_center::Column::UserId.eq(user_id))
            .order_by_asc(storage_center::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(storage_center_model_to_domain).collect())
    }
}
