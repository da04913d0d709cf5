use thiserror::Error;

/// Errors produced by the domain and application layers.
///
/// Carries structured fields only; the HTTP layer decides how each one
/// is rendered.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} with id - {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// An ID in a relation list does not reference an existing row
    #[error("{relation} not found")]
    RelationNotFound { relation: &'static str },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = DomainError::not_found("User", 42);
        assert_eq!(err.to_string(), "User with id - 42 not found");
    }

    #[test]
    fn relation_not_found_message() {
        let err = DomainError::RelationNotFound {
            relation: "Storage center",
        };
        assert_eq!(err.to_string(), "Storage center not found");
    }
}
