//! User API handlers
//!
//! Thin wrappers over `UserService`. The `{id}` routes receive the user
//! already resolved by `find_user`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{StoreUserRequest, StoreUserResponse, UpdateUserRequest, UserProfileDto};
use crate::application::{AuthService, UserService};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::interfaces::http::error::ApiError;
use crate::interfaces::http::middleware::FoundUser;

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = StoreUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<StoreUserResponse>),
        (status = 409, description = "Email already exists"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn store(
    State(users): State<Arc<UserService>>,
    State(auth): State<Arc<AuthService>>,
    ValidatedJson(request): ValidatedJson<StoreUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StoreUserResponse>>), ApiError> {
    let user = users.register(request.into()).await?;
    let token = auth.issue_token_pair(&user).await?;

    let response = StoreUserResponse {
        user: user.into(),
        token: token.into(),
    };
    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User with relations", body = ApiResponse<UserProfileDto>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User not found")
    )
)]
pub async fn show(
    State(users): State<Arc<UserService>>,
    Extension(FoundUser(user)): Extension<FoundUser>,
) -> Result<Json<ApiResponse<UserProfileDto>>, ApiError> {
    let profile = users.show(user).await?;
    Ok(Json(ApiResponse::success(profile.into())))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated user with fresh relations", body = ApiResponse<UserProfileDto>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User or related resource not found"),
        (status = 409, description = "Email already exists"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update(
    State(users): State<Arc<UserService>>,
    Extension(FoundUser(user)): Extension<FoundUser>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserProfileDto>>, ApiError> {
    let profile = users.update(user.id, request.into()).await?;
    Ok(Json(ApiResponse::success(profile.into())))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Deleted user as it was before deletion", body = ApiResponse<UserProfileDto>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User not found")
    )
)]
pub async fn destroy(
    State(users): State<Arc<UserService>>,
    Extension(FoundUser(user)): Extension<FoundUser>,
) -> Result<Json<ApiResponse<UserProfileDto>>, ApiError> {
    let snapshot = users.destroy(user).await?;
    Ok(Json(ApiResponse::success(snapshot.into())))
}
