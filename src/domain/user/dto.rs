use crate::domain::catalog::RelationKind;

/// Fields accepted on self-registration. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password_hash: String,
}

/// Partial update. `None` leaves the field (or relation set) untouched;
/// `Some(ids)` replaces the whole relation set.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub charge_per_month: Option<f64>,
    pub services: Option<Vec<i32>>,
    pub servers: Option<Vec<i32>>,
    pub storage_centers: Option<Vec<i32>>,
}

impl UpdateUserDto {
    /// Relation replacements in the order they are applied
    pub fn relation_replacements(&self) -> [(RelationKind, Option<&[i32]>); 3] {
        [
            (RelationKind::Services, self.services.as_deref()),
            (RelationKind::Servers, self.servers.as_deref()),
            (RelationKind::StorageCenters, self.storage_centers.as_deref()),
        ]
    }
}
