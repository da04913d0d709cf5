//! Token lifecycle: application-layer orchestration
//!
//! Access tokens are short-lived JWTs; refresh tokens are opaque random
//! strings stored as SHA-256 digests and rotated on every use.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::IdentityResult;
use crate::domain::{RepositoryProvider, User};
use crate::infrastructure::crypto::{
    create_token, generate_refresh_token, hash_refresh_token, verify_password, verify_token,
    AuthError, JwtConfig, TokenClaims,
};

/// Token pair handed to the client on login, registration and refresh
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Always `"bearer"`
    pub token_type: &'static str,
    pub token: String,
    pub refresh_token: String,
}

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: TokenPair,
    pub user: User,
}

pub struct AuthService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl AuthService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    /// Check credentials and issue a token pair.
    ///
    /// Unknown email and wrong password fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> IdentityResult<LoginResult> {
        let Some(user) = self.repos.users().find_by_email(email).await? else {
            debug!("Login rejected: unknown email");
            metrics::counter!("auth_logins_total", "outcome" => "rejected").increment(1);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash).unwrap_or(false) {
            debug!(user_id = user.id, "Login rejected: wrong password");
            metrics::counter!("auth_logins_total", "outcome" => "rejected").increment(1);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.issue_token_pair(&user).await?;
        metrics::counter!("auth_logins_total", "outcome" => "success").increment(1);
        info!(user_id = user.id, "User logged in");

        Ok(LoginResult { token, user })
    }

    /// Mint an access token and persist a fresh refresh token for `user`
    pub async fn issue_token_pair(&self, user: &User) -> IdentityResult<TokenPair> {
        let token = create_token(user.id, &user.email, &self.jwt_config)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))?;

        let refresh_token = generate_refresh_token();
        self.repos
            .tokens()
            .store_refresh_token(user.id, &hash_refresh_token(&refresh_token))
            .await?;

        Ok(TokenPair {
            token_type: "bearer",
            token,
            refresh_token,
        })
    }

    /// Exchange a refresh token for a new pair. The presented token is
    /// revoked, so it works exactly once.
    pub async fn refresh(&self, refresh_token: Option<&str>) -> IdentityResult<TokenPair> {
        let presented = refresh_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingRefreshToken)?;

        let stored = self
            .repos
            .tokens()
            .find_refresh_token(&hash_refresh_token(presented))
            .await?
            .filter(|t| !t.is_revoked)
            .ok_or(AuthError::InvalidRefreshToken)?;

        if !self.repos.tokens().revoke_refresh_token(stored.id).await? {
            warn!(user_id = stored.user_id, "Refresh token reused concurrently");
            return Err(AuthError::InvalidRefreshToken.into());
        }

        let user = self
            .repos
            .users()
            .find_by_id(stored.user_id)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        let pair = self.issue_token_pair(&user).await?;
        info!(user_id = user.id, "Token pair refreshed");
        Ok(pair)
    }

    /// Revoke every refresh token of the user and blacklist the access
    /// token the request was made with.
    pub async fn logout(&self, user_id: i32, access_token: &str) -> IdentityResult<()> {
        let revoked = self.repos.tokens().revoke_tokens_for_user(user_id).await?;

        if !self.repos.blacklist().blacklist(access_token).await? {
            return Err(AuthError::RevokedToken.into());
        }

        info!(user_id, revoked_refresh_tokens = revoked, "User logged out");
        Ok(())
    }

    /// Validate an access token: signature, expiry, issuer and blacklist
    pub async fn authenticate(&self, access_token: &str) -> IdentityResult<TokenClaims> {
        let claims = verify_token(access_token, &self.jwt_config)?;

        if self.repos.blacklist().is_blacklisted(access_token).await? {
            return Err(AuthError::RevokedToken.into());
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::identity::IdentityError;
    use crate::domain::CreateUserDto;
    use crate::infrastructure::crypto::hash_password;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::test_support::{test_db, TestDb};

    async fn setup() -> (AuthService, User, TestDb) {
        let db = test_db().await;
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.conn.clone()));
        let user = repos
            .users()
            .create(CreateUserDto {
                first_name: None,
                last_name: None,
                email: "ada@example.com".to_string(),
                password_hash: hash_password("secret-pw", 4).unwrap(),
            })
            .await
            .unwrap();

        (AuthService::new(repos, JwtConfig::default()), user, db)
    }

    fn auth_err(err: IdentityError) -> AuthError {
        match err {
            IdentityError::Auth(e) => e,
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_checks_credentials() {
        let (auth, user, _db) = setup().await;

        let result = auth.login("ada@example.com", "secret-pw").await.unwrap();
        assert_eq!(result.user.id, user.id);
        assert_eq!(result.token.token_type, "bearer");
        assert_eq!(result.token.refresh_token.len(), 64);

        let wrong = auth.login("ada@example.com", "nope").await.unwrap_err();
        assert!(matches!(auth_err(wrong), AuthError::InvalidCredentials));
        let unknown = auth.login("bob@example.com", "secret-pw").await.unwrap_err();
        assert!(matches!(auth_err(unknown), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn refresh_rotates_the_token() {
        let (auth, user, _db) = setup().await;
        let pair = auth.issue_token_pair(&user).await.unwrap();

        let next = auth.refresh(Some(&pair.refresh_token)).await.unwrap();
        assert_ne!(next.refresh_token, pair.refresh_token);

        let reused = auth.refresh(Some(&pair.refresh_token)).await.unwrap_err();
        assert!(matches!(auth_err(reused), AuthError::InvalidRefreshToken));
        assert!(auth.refresh(Some(&next.refresh_token)).await.is_ok());
    }

    #[tokio::test]
    async fn refresh_requires_a_token() {
        let (auth, _, _db) = setup().await;

        let missing = auth.refresh(None).await.unwrap_err();
        assert!(matches!(auth_err(missing), AuthError::MissingRefreshToken));
        let blank = auth.refresh(Some("  ")).await.unwrap_err();
        assert!(matches!(auth_err(blank), AuthError::MissingRefreshToken));
        let bogus = auth.refresh(Some("deadbeef")).await.unwrap_err();
        assert!(matches!(auth_err(bogus), AuthError::InvalidRefreshToken));
    }

    #[tokio::test]
    async fn logout_blacklists_access_token_and_revokes_refresh_tokens() {
        let (auth, user, _db) = setup().await;
        let pair = auth.issue_token_pair(&user).await.unwrap();

        let claims = auth.authenticate(&pair.token).await.unwrap();
        assert_eq!(claims.user_id(), Some(user.id));

        auth.logout(user.id, &pair.token).await.unwrap();

        let revoked = auth.authenticate(&pair.token).await.unwrap_err();
        assert!(matches!(auth_err(revoked), AuthError::RevokedToken));
        let refresh = auth.refresh(Some(&pair.refresh_token)).await.unwrap_err();
        assert!(matches!(auth_err(refresh), AuthError::InvalidRefreshToken));

        let again = auth.logout(user.id, &pair.token).await.unwrap_err();
        assert!(matches!(auth_err(again), AuthError::RevokedToken));
    }
}
