use async_trait::async_trait;

use super::{CreateUserDto, UpdateUserDto, User};
use crate::domain::catalog::{Server, Service, StorageCenter};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Apply relation replacements and scalar changes atomically.
    ///
    /// Fails with `RelationNotFound` if any ID in a replacement list does
    /// not exist; nothing is written in that case.
    async fn update(&self, id: i32, dto: UpdateUserDto) -> DomainResult<User>;

    /// Delete the user together with its pivot rows and refresh tokens
    async fn delete(&self, id: i32) -> DomainResult<()>;

    /// Services attached to the user, each with its group
    async fn services(&self, user_id: i32) -> DomainResult<Vec<Service>>;
    async fn servers(&self, user_id: i32) -> DomainResult<Vec<Server>>;
    async fn storage_centers(&self, user_id: i32) -> DomainResult<Vec<StorageCenter>>;
}
