//! HTTP error type
//!
//! Every failure leaving a handler or middleware is an `ApiError`. It maps
//! to a status code and renders the `{successful: false, errors, data: null}`
//! envelope; `report` logs it on the way out.

use axum::extract::OriginalUri;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};

use super::common::ApiResponse;
use crate::application::IdentityError;
use crate::infrastructure::crypto::AuthError;
use crate::shared::errors::DomainError;

/// Sent for every undecodable body
pub const MALFORMED_BODY: &str = "Malformed JSON body";

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    NotAuthenticated(String),
    MethodNotAllowed { method: Method, path: String },
    /// One message per failed field
    Validation(Vec<String>),
    /// Undecodable request body. The decoder detail may quote the payload,
    /// so it is logged, never sent.
    BadRequest(String),
    Conflict(String),
    /// Details are logged, never sent
    Internal(String),
    /// Status and message taken over as-is from an extractor rejection
    Status { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotAuthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Status { status, .. } => *status,
        }
    }

    /// Messages placed in the `errors` array
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::NotFound(m) | Self::NotAuthenticated(m) | Self::Conflict(m) => vec![m.clone()],
            Self::MethodNotAllowed { method, path } => {
                vec![format!("You cannot send {} to {}", method, path)]
            }
            Self::Validation(messages) => messages.clone(),
            Self::BadRequest(_) => vec![MALFORMED_BODY.to_string()],
            Self::Internal(_) => vec!["Internal server error".to_string()],
            Self::Status { message, .. } => vec![message.clone()],
        }
    }

    /// Log the error before it is rendered
    pub fn report(&self) {
        let status = self.status();
        match self {
            Self::Internal(detail) => error!(status = status.as_u16(), %detail, "Request failed"),
            Self::BadRequest(detail) => debug!(status = status.as_u16(), %detail, "Request rejected"),
            _ if status.is_server_error() => {
                error!(status = status.as_u16(), errors = ?self.messages(), "Request failed")
            }
            _ => debug!(status = status.as_u16(), errors = ?self.messages(), "Request rejected"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.report();
        let body = ApiResponse::<()>::error(self.messages());
        (self.status(), Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } | DomainError::RelationNotFound { .. } => {
                Self::NotFound(err.to_string())
            }
            DomainError::Validation(m) => Self::Validation(vec![m]),
            DomainError::Conflict(m) => Self::Conflict(m),
            DomainError::Database(m) => Self::Internal(m),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenCreation(detail) => Self::Internal(detail),
            other => Self::NotAuthenticated(other.to_string()),
        }
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Auth(e) => e.into(),
            IdentityError::Domain(e) => e.into(),
        }
    }
}

/// Router fallback for a known path hit with an unsupported method
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}

/// Router fallback for unknown paths
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("Route not found {} {}", method, uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn domain_not_found_renders_404_envelope() {
        let (status, body) = body_json(DomainError::not_found("User", "7").into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["successful"], false);
        assert_eq!(body["errors"][0], "User with id - 7 not found");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn internal_details_are_hidden() {
        let err: ApiError = DomainError::Database("disk I/O error".into()).into();
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["errors"][0], "Internal server error");
    }

    #[tokio::test]
    async fn method_not_allowed_message() {
        let err = ApiError::MethodNotAllowed {
            method: Method::DELETE,
            path: "/login".into(),
        };
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["errors"][0], "You cannot send DELETE to /login");
    }

    #[test]
    fn auth_errors_are_401() {
        let err: ApiError = AuthError::MissingRefreshToken.into();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            err.messages(),
            vec!["Please specify the refresh-token sent back when you logged in"]
        );
    }

    #[tokio::test]
    async fn bad_request_hides_decoder_detail() {
        let err = ApiError::BadRequest(
            "invalid type: integer `918273645`, expected a string".into(),
        );
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"], serde_json::json!([MALFORMED_BODY]));
        assert!(!body.to_string().contains("918273645"));
    }
}
