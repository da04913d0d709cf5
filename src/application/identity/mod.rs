//! Identity module: authentication & user management
//!
//! `AuthService` owns the token lifecycle (login, refresh, logout and
//! access-token checks). `UserService` orchestrates the user CRUD
//! use-cases and the relation sets attached to a user.

pub mod auth_service;
pub mod error;
pub mod user_service;

pub use auth_service::{AuthService, LoginResult, TokenPair};
pub use error::IdentityError;
pub use user_service::{NewUser, ProfileUpdate, UserProfile, UserService};
