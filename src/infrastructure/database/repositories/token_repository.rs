//! SeaORM implementations of TokenRepository and BlacklistRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::debug;

use super::{db_err, is_unique_violation};
use crate::domain::{BlacklistRepository, DomainResult, RefreshToken, TokenRepository};
use crate::infrastructure::database::entities::{blacklisted_token, refresh_token};

pub struct SeaOrmTokenRepository {
    db: DatabaseConnection,
}

impl SeaOrmTokenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn refresh_token_model_to_domain(model: refresh_token::Model) -> RefreshToken {
    RefreshToken {
        id: model.id,
        user_id: model.user_id,
        token_hash: model.token_hash,
        is_revoked: model.is_revoked,
        created_at: model.created_at,
    }
}

#[async_trait]
impl TokenRepository for SeaOrmTokenRepository {
    async fn store_refresh_token(&self, user_id: i32, token_hash: &str) -> DomainResult<()> {
        let now = Utc::now();
        let model = refresh_token::ActiveModel {
            user_id: Set(user_id),
            token_hash: Set(token_hash.to_string()),
            is_revoked: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_refresh_token(&self, token_hash: &str) -> DomainResult<Option<RefreshToken>> {
        let model = refresh_token::Entity::find()
            .filter(refresh_token::Column::TokenHash.eq(token_hash))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(refresh_token_model_to_domain))
    }

    async fn revoke_refresh_token(&self, id: i32) -> DomainResult<bool> {
        // Only an active token flips; a concurrent second revoke affects 0 rows
        let result = refresh_token::Entity::update_many()
            .col_expr(refresh_token::Column::IsRevoked, Expr::value(true))
            .col_expr(refresh_token::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(refresh_token::Column::Id.eq(id))
            .filter(refresh_token::Column::IsRevoked.eq(false))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn revoke_tokens_for_user(&self, user_id: i32) -> DomainResult<u64> {
        let result = refresh_token::Entity::update_many()
            .col_expr(refresh_token::Column::IsRevoked, Expr::value(true))
            .col_expr(refresh_token::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(refresh_token::Column::UserId.eq(user_id))
            .filter(refresh_token::Column::IsRevoked.eq(false))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        debug!(user_id, revoked = result.rows_affected, "Refresh tokens revoked");
        Ok(result.rows_affected)
    }
}

pub struct SeaOrmBlacklistRepository {
    db: DatabaseConnection,
}

impl SeaOrmBlacklistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlacklistRepository for SeaOrmBlacklistRepository {
    async fn blacklist(&self, token: &str) -> DomainResult<bool> {
        let model = blacklisted_token::ActiveModel {
            token: Set(token.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(_) => Ok(true),
            Err(e) if is_unique_violation(&e) => Ok(false),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn is_blacklisted(&self, token: &str) -> DomainResult<bool> {
        let found = blacklisted_token::Entity::find()
            .filter(blacklisted_token::Column::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(found.is_some())
    }
}
