//! Catalog aggregate
//!
//! Resources a user can be attached to: services (grouped), servers and
//! storage centers.

pub mod model;
pub mod repository;

pub use model::{RelationKind, Server, Service, ServiceGroup, StorageCenter};
pub use repository::ServiceRepository;
