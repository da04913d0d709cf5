//! Token aggregate
//!
//! Refresh tokens issued alongside access tokens, and the blacklist of
//! access tokens revoked by logout.

pub mod model;
pub mod repository;

pub use model::RefreshToken;
pub use repository::{BlacklistRepository, TokenRepository};
