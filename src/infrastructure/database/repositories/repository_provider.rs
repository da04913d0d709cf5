//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::{BlacklistRepository, ServiceRepository, TokenRepository, UserRepository};

use super::catalog_repository::SeaOrmServiceRepository;
use super::token_repository::{SeaOrmBlacklistRepository, SeaOrmTokenRepository};
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let user = repos.users().find_by_email("jane@example.com").await?;
/// let service = repos.services().find_with_group(3).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    services: SeaOrmServiceRepository,
    tokens: SeaOrmTokenRepository,
    blacklist: SeaOrmBlacklistRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            services: SeaOrmServiceRepository::new(db.clone()),
            tokens: SeaOrmTokenRepository::new(db.clone()),
            blacklist: SeaOrmBlacklistRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn services(&self) -> &dyn ServiceRepository {
        &self.services
    }

    fn tokens(&self) -> &dyn TokenRepository {
        &self.tokens
    }

    fn blacklist(&self) -> &dyn BlacklistRepository {
        &self.blacklist
    }
}
