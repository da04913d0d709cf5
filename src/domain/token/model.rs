use chrono::{DateTime, Utc};

/// Stored refresh token. Only the SHA-256 digest of the token is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshToken {
    pub id: i32,
    pub user_id: i32,
    pub token_hash: String,
    pub is_revoked: bool,
    pub created_at: DateTime<Utc>,
}
