//! Token signing, refresh token generation and password hashing

pub mod jwt;
pub mod password;
pub mod refresh_token;

pub use jwt::{create_token, verify_token, AuthError, JwtConfig, TokenClaims};
pub use password::{hash_password, verify_password};
pub use refresh_token::{generate_refresh_token, hash_refresh_token};
