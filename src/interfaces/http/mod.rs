//! HTTP REST API interfaces
//!
//! - `middleware`: bearer authentication and `{id}` resolution
//! - `modules`: per-resource DTOs and handlers
//! - `error`: `ApiError`, the single HTTP error type
//! - `router`: API router with OpenAPI documentation

pub mod common;
pub mod error;
pub mod middleware;
pub mod modules;
pub mod router;

pub use error::ApiError;
pub use router::{create_api_router, ApiDoc, ApiState};
