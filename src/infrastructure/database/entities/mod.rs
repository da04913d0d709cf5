//! Database entities module

pub mod blacklisted_token;
pub mod refresh_token;
pub mod server;
pub mod service;
pub mod service_group;
pub mod storage_center;
pub mod user;
pub mod user_server;
pub mod user_service;
pub mod user_storage_center;

pub use blacklisted_token::Entity as BlacklistedToken;
pub use refresh_token::Entity as RefreshToken;
pub use server::Entity as Server;
pub use service::Entity as Service;
pub use service_group::Entity as ServiceGroup;
pub use storage_center::Entity as StorageCenter;
pub use user::Entity as User;
pub use user_server::Entity as UserServer;
pub use user_service::Entity as UserService;
pub use user_storage_center::Entity as UserStorageCenter;
