//! User DTOs
//!
//! Request bodies carry only whitelisted keys; anything else in the JSON
//! (`role`, `id`, ...) is ignored by deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::identity::{NewUser, ProfileUpdate, UserProfile};
use crate::domain::User;
use crate::interfaces::http::modules::auth::TokenDto;
use crate::interfaces::http::modules::services::{ServerDto, ServiceDto, StorageCenterDto};

/// User API representation. The password hash is never exposed.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub struct UserDto {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub charge_per_month: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            charge_per_month: u.charge_per_month,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// User plus its relation sets
#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfileDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub services: Vec<ServiceDto>,
    pub servers: Vec<ServerDto>,
    #[serde(rename = "data-storage")]
    pub data_storage: Vec<StorageCenterDto>,
}

impl From<UserProfile> for UserProfileDto {
    fn from(p: UserProfile) -> Self {
        Self {
            user: p.user.into(),
            services: p.relations.services.into_iter().map(Into::into).collect(),
            servers: p.relations.servers.into_iter().map(Into::into).collect(),
            data_storage: p
                .relations
                .storage_centers
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub struct StoreUserRequest {
    #[validate(length(max = 255, message = "first-name must be at most 255 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 255, message = "last-name must be at most 255 characters"))]
    pub last_name: Option<String>,
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, max = 128, message = "password must be 6-128 characters"))]
    pub password: String,
}

impl From<StoreUserRequest> for NewUser {
    fn from(r: StoreUserRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            password: r.password,
        }
    }
}

/// Registration response
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreUserResponse {
    pub user: UserDto,
    pub token: TokenDto,
}

/// Partial update. Relation lists, when present, replace the whole set.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateUserRequest {
    #[validate(length(max = 255, message = "first-name must be at most 255 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 255, message = "last-name must be at most 255 characters"))]
    pub last_name: Option<String>,
    #[validate(email(message = "invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 6, max = 128, message = "password must be 6-128 characters"))]
    pub password: Option<String>,
    #[validate(range(min = 0.0, message = "charge-per-month must not be negative"))]
    pub charge_per_month: Option<f64>,
    /// Service IDs
    pub services: Option<Vec<i32>>,
    /// Server IDs
    pub servers: Option<Vec<i32>>,
    /// Storage center IDs
    pub storage: Option<Vec<i32>>,
}

impl From<UpdateUserRequest> for ProfileUpdate {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            password: r.password,
            charge_per_month: r.charge_per_month,
            services: r.services,
            servers: r.servers,
            storage: r.storage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_ignores_non_whitelisted_keys() {
        let req: UpdateUserRequest = serde_json::from_value(serde_json::json!({
            "first-name": "Ada",
            "charge-per-month": 9.5,
            "role": "admin",
            "storage": [1, 2]
        }))
        .unwrap();

        assert_eq!(req.first_name.as_deref(), Some("Ada"));
        assert_eq!(req.charge_per_month, Some(9.5));
        assert_eq!(req.storage, Some(vec![1, 2]));
        assert!(req.services.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn negative_charge_fails_validation() {
        let req = UpdateUserRequest {
            charge_per_month: Some(-1.0),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
