//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod catalog_repository;
pub mod repository_provider;
pub mod token_repository;
pub mod user_repository;

pub use catalog_repository::SeaOrmServiceRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use token_repository::{SeaOrmBlacklistRepository, SeaOrmTokenRepository};
pub use user_repository::SeaOrmUserRepository;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

pub(crate) fn db_err(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

pub(crate) fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
