//! Catalog domain entities

use chrono::{DateTime, Utc};

/// Group a service belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceGroup {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Service with its group eager-loaded
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub group_id: Option<i32>,
    pub group: Option<ServiceGroup>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorageCenter {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Many-to-many relation kinds between a user and the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Services,
    Servers,
    StorageCenters,
}

impl RelationKind {
    /// Resource name used in "not found" messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Services => "Service",
            Self::Servers => "Server",
            Self::StorageCenters => "Storage center",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_resource_names() {
        assert_eq!(RelationKind::Services.label(), "Service");
        assert_eq!(RelationKind::Servers.label(), "Server");
        assert_eq!(RelationKind::StorageCenters.label(), "Storage center");
    }
}
