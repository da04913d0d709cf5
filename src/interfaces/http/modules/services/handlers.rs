//! Service API handlers

use axum::{Extension, Json};

use super::dto::ServiceDto;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::FoundService;

#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = "Services",
    params(("id" = i32, Path, description = "Service ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Service with its group", body = ApiResponse<ServiceDto>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Service not found")
    )
)]
pub async fn show(
    Extension(FoundService(service)): Extension<FoundService>,
) -> Json<ApiResponse<ServiceDto>> {
    Json(ApiResponse::success(service.into()))
}
