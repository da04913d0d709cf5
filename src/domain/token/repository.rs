use async_trait::async_trait;

use super::RefreshToken;
use crate::domain::DomainResult;

#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn store_refresh_token(&self, user_id: i32, token_hash: &str) -> DomainResult<()>;

    async fn find_refresh_token(&self, token_hash: &str) -> DomainResult<Option<RefreshToken>>;

    /// Revoke one token. Returns `false` if it was already revoked.
    async fn revoke_refresh_token(&self, id: i32) -> DomainResult<bool>;

    /// Revoke every active refresh token of a user, returning the count
    async fn revoke_tokens_for_user(&self, user_id: i32) -> DomainResult<u64>;
}

#[async_trait]
pub trait BlacklistRepository: Send + Sync {
    /// Record an access token. Returns `false` if it was already blacklisted.
    async fn blacklist(&self, token: &str) -> DomainResult<bool>;

    async fn is_blacklisted(&self, token: &str) -> DomainResult<bool>;
}
