//! Domain layer: users, the catalog they attach to, and tokens

pub mod catalog;
pub mod repositories;
pub mod token;
pub mod user;

pub use catalog::{RelationKind, Server, Service, ServiceGroup, ServiceRepository, StorageCenter};
pub use repositories::{DomainResult, RepositoryProvider};
pub use token::{BlacklistRepository, RefreshToken, TokenRepository};
pub use user::{CreateUserDto, UpdateUserDto, User, UserRelations, UserRepository};

pub use crate::shared::errors::DomainError;
