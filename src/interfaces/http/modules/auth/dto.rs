//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::identity::{LoginResult, TokenPair};
use crate::interfaces::http::modules::users::UserDto;

/// Login credentials. Absent fields are empty strings, which no stored
/// user matches.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `{type, token, refresh-token}`
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenDto {
    /// Always `bearer`
    #[serde(rename = "type")]
    pub token_type: String,
    pub token: String,
    #[serde(rename = "refresh-token")]
    pub refresh_token: String,
}

impl From<TokenPair> for TokenDto {
    fn from(pair: TokenPair) -> Self {
        Self {
            token_type: pair.token_type.to_string(),
            token: pair.token,
            refresh_token: pair.refresh_token,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: TokenDto,
    pub user: UserDto,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token.into(),
            user: result.user.into(),
        }
    }
}

/// Refresh token, accepted in the JSON body or as a query parameter
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RefreshTokenRequest {
    #[serde(rename = "refresh-token")]
    pub refresh_token: Option<String>,
}
