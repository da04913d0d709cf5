//! Request-context middleware for Axum
//!
//! - `auth_middleware`: bearer JWT check (signature, expiry, blacklist)
//! - `find_user` / `find_service`: resolve the `{id}` route parameter into
//!   a typed request extension before the handler runs

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::application::AuthService;
use crate::domain::{DomainError, RepositoryProvider, Service, User};
use crate::infrastructure::crypto::AuthError;
use crate::interfaces::http::error::ApiError;

/// Caller identity, inserted by `auth_middleware`
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    /// The raw access token the request carried
    pub token: String,
}

/// User resolved from `{id}` by `find_user`
#[derive(Clone, Debug)]
pub struct FoundUser(pub User);

/// Service (with group) resolved from `{id}` by `find_service`
#[derive(Clone, Debug)]
pub struct FoundService(pub Service);

fn extract_bearer(auth_header: &str) -> Option<&str> {
    let (scheme, token) = auth_header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// JWT authentication middleware
pub async fn auth_middleware(
    State(auth): State<Arc<AuthService>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = extract_bearer(auth_header)
        .ok_or(AuthError::InvalidToken)?
        .to_string();

    let claims = auth.authenticate(&token).await?;
    let user_id = claims.user_id().ok_or(AuthError::InvalidToken)?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id, token });

    Ok(next.run(request).await)
}

/// `None` for anything that is not an integer key
fn resolve_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok()
}

/// Resolve `{id}` into a `FoundUser` extension.
///
/// A malformed id, a missing row and a failed lookup all end as the same
/// 404.
pub async fn find_user(
    State(repos): State<Arc<dyn RepositoryProvider>>,
    Path(id): Path<String>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let user = match resolve_id(&id) {
        Some(key) => repos.users().find_by_id(key).await.ok().flatten(),
        None => None,
    };
    let user = user.ok_or_else(|| DomainError::not_found("User", &id))?;

    request.extensions_mut().insert(FoundUser(user));
    Ok(next.run(request).await)
}

/// Resolve `{id}` into a `FoundService` extension, group included
pub async fn find_service(
    State(repos): State<Arc<dyn RepositoryProvider>>,
    Path(id): Path<String>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let service = match resolve_id(&id) {
        Some(key) => repos.services().find_with_group(key).await.ok().flatten(),
        None => None,
    };
    let service = service.ok_or_else(|| DomainError::not_found("Service", &id))?;

    request.extensions_mut().insert(FoundService(service));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        assert_eq!(extract_bearer("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer("bearer abc"), Some("abc"));
        assert_eq!(extract_bearer("Basic abc"), None);
        assert_eq!(extract_bearer("Bearer "), None);
        assert_eq!(extract_bearer("Bearer"), None);
    }

    #[test]
    fn only_integer_ids_resolve() {
        assert_eq!(resolve_id("12"), Some(12));
        assert_eq!(resolve_id("abc"), None);
        assert_eq!(resolve_id(""), None);
    }
}
