//! SeaORM implementation of ServiceRepository, plus the catalog
//! entity → domain conversions shared with the user repository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::db_err;
use crate::domain::{DomainResult, Server, Service, ServiceGroup, ServiceRepository, StorageCenter};
use crate::infrastructure::database::entities::{server, service, service_group, storage_center};

pub struct SeaOrmServiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(super) fn service_model_to_domain(
    model: service::Model,
    group: Option<service_group::Model>,
) -> Service {
    Service {
        id: model.id,
        name: model.name,
        description: model.description,
        group_id: model.group_id,
        group: group.map(|g| ServiceGroup {
            id: g.id,
            name: g.name,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

pub(super) fn server_model_to_domain(model: server::Model) -> Server {
    Server {
        id: model.id,
        name: model.name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

pub(super) fn storage_center_model_to_domain(model: storage_center::Model) -> StorageCenter {
    StorageCenter {
        id: model.id,
        name: model.name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn find_with_group(&self, id: i32) -> DomainResult<Option<Service>> {
        let row = service::Entity::find_by_id(id)
            .find_also_related(service_group::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(|(model, group)| service_model_to_domain(model, group)))
    }
}
