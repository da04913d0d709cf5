//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::catalog::ServiceRepository;
use super::token::{BlacklistRepository, TokenRepository};
use super::user::UserRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let user = repos.users().find_by_id(1).await?;
///     let revoked = repos.blacklist().is_blacklisted(token).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn services(&self) -> &dyn ServiceRepository;
    fn tokens(&self) -> &dyn TokenRepository;
    fn blacklist(&self) -> &dyn BlacklistRepository;
}
