//! API router and OpenAPI document

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::application::{AuthService, UserService};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::JwtConfig;
use crate::interfaces::http::common::{ApiResponse, MessageResponse};
use crate::interfaces::http::error::{method_not_allowed, route_not_found};
use crate::interfaces::http::middleware::{auth_middleware, find_service, find_user};

use super::modules::health::{self, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::{auth, services, users};

/// Shared handler state. Handlers extract the piece they need via `FromRef`.
#[derive(Clone, FromRef)]
pub struct ApiState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub repos: Arc<dyn RepositoryProvider>,
}

impl ApiState {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig, bcrypt_cost: u32) -> Self {
        Self {
            auth: Arc::new(AuthService::new(repos.clone(), jwt_config)),
            users: Arc::new(UserService::new(repos.clone(), bcrypt_cost)),
            repos,
        }
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token returned by /login"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::refresh_token,
        auth::logout,
        users::store,
        users::show,
        users::update,
        users::destroy,
        services::show,
    ),
    components(
        schemas(
            ApiResponse<MessageResponse>,
            MessageResponse,
            health::HealthResponse,
            health::ComponentHealth,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::TokenDto,
            auth::RefreshTokenRequest,
            users::UserDto,
            users::UserProfileDto,
            users::StoreUserRequest,
            users::StoreUserResponse,
            users::UpdateUserRequest,
            services::ServiceDto,
            services::ServiceGroupDto,
            services::ServerDto,
            services::StorageCenterDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Authentication", description = "Login, token refresh and logout"),
        (name = "Users", description = "Registration and user management, including attached services, servers and storage centers"),
        (name = "Services", description = "Service catalog lookups"),
    ),
    info(
        title = "Account Service API",
        version = "0.1.0",
        description = "User accounts, JWT authentication and resource assignments"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `/metrics` is mounted only when a Prometheus handle is given.
pub fn create_api_router(
    state: ApiState,
    db: DatabaseConnection,
    metrics: Option<PrometheusHandle>,
) -> Router {
    let public_routes = Router::<ApiState>::new()
        .route("/login", post(auth::login))
        .route("/refresh-token", post(auth::refresh_token))
        .route("/users", post(users::store));

    let user_routes = Router::<ApiState>::new()
        .route(
            "/users/{id}",
            get(users::show)
                .post(users::update)
                .put(users::update)
                .patch(users::update)
                .delete(users::destroy),
        )
        .route_layer(middleware::from_fn_with_state(
            state.repos.clone(),
            find_user,
        ));

    let service_routes = Router::<ApiState>::new()
        .route("/services/{id}", get(services::show))
        .route_layer(middleware::from_fn_with_state(
            state.repos.clone(),
            find_service,
        ));

    // auth runs before the id resolvers
    let protected_routes = Router::<ApiState>::new()
        .route("/logout", post(auth::logout))
        .merge(user_routes)
        .merge(service_routes)
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            auth_middleware,
        ));

    let health_state = HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let mut router = Router::<ApiState>::new()
        .merge(public_routes)
        .merge(protected_routes)
        .route("/health", get(health::health_check).with_state(health_state))
        .route(
            "/api-doc/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );

    if let Some(handle) = metrics {
        router = router.route(
            "/metrics",
            get(prometheus_metrics).with_state(MetricsState { handle }),
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}
