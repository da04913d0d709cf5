//! Authentication module: login, token refresh, logout

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
