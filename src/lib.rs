//! # Account Service
//!
//! REST backend for user accounts: JWT login / refresh / logout, user CRUD
//! and the many-to-many assignment of users to services, servers and
//! storage centers.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: entities, DTOs and repository traits
//! - **application**: use cases (`AuthService`, `UserService`)
//! - **infrastructure**: SeaORM persistence, migrations, crypto
//! - **interfaces**: HTTP router, middleware, handlers, `ApiError`
//! - **shared**: domain errors and shutdown coordination
//! - **server**: runtime bootstrap used by the binary

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use interfaces::http::{create_api_router, ApiError, ApiState};
