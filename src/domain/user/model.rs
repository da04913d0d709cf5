use chrono::{DateTime, Utc};

use crate::domain::catalog::{Server, Service, StorageCenter};

/// User model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub charge_per_month: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The three relation sets of a user, read at one point in time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRelations {
    pub services: Vec<Service>,
    pub servers: Vec<Server>,
    pub storage_centers: Vec<StorageCenter>,
}
