//! Authentication API handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    Extension, Json,
};
use tracing::debug;

use super::dto::{LoginRequest, LoginResponse, RefreshTokenRequest, TokenDto};
use crate::application::AuthService;
use crate::infrastructure::crypto::AuthError;
use crate::interfaces::http::common::{ApiResponse, MessageResponse};
use crate::interfaces::http::error::ApiError;
use crate::interfaces::http::middleware::AuthenticatedUser;

#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid email or password, or an unreadable body")
    )
)]
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    body: Bytes,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    // The decoder error may quote the password; only its category is logged
    let request: LoginRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(category = ?e.classify(), "Unreadable login body");
        AuthError::InvalidCredentials
    })?;

    let result = auth.login(&request.email, &request.password).await?;
    Ok(Json(ApiResponse::success(result.into())))
}

#[utoipa::path(
    post,
    path = "/refresh-token",
    tag = "Authentication",
    params(RefreshTokenRequest),
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "New token pair", body = ApiResponse<TokenDto>),
        (status = 401, description = "Missing, unknown or already used refresh token")
    )
)]
pub async fn refresh_token(
    State(auth): State<Arc<AuthService>>,
    Query(query): Query<RefreshTokenRequest>,
    body: Bytes,
) -> Result<Json<ApiResponse<TokenDto>>, ApiError> {
    // The body wins over the query string; an empty body is allowed
    let from_body = if body.iter().all(u8::is_ascii_whitespace) {
        RefreshTokenRequest::default()
    } else {
        serde_json::from_slice::<RefreshTokenRequest>(&body).map_err(|e| {
            debug!(category = ?e.classify(), "Unreadable refresh token body");
            AuthError::InvalidRefreshToken
        })?
    };

    let presented = from_body.refresh_token.or(query.refresh_token);
    let pair = auth.refresh(presented.as_deref()).await?;
    Ok(Json(ApiResponse::success(pair.into())))
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<MessageResponse>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn logout(
    State(auth): State<Arc<AuthService>>,
    Extension(current): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    auth.logout(current.user_id, &current.token).await?;
    Ok(Json(ApiResponse::success(MessageResponse {
        message: "Logout successfully".to_string(),
    })))
}
