//! Application layer - use-case orchestration

pub mod identity;

pub use identity::{AuthService, IdentityError, UserService};
