//! User management service: application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate here.

use std::sync::Arc;

use tracing::info;

use super::error::IdentityResult;
use crate::domain::{
    CreateUserDto, DomainError, RepositoryProvider, UpdateUserDto, User, UserRelations,
};
use crate::infrastructure::crypto::hash_password;

/// Self-registration input. `password` is plain text.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Update input. `password` is plain text; relation lists replace the
/// whole set when present.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub charge_per_month: Option<f64>,
    pub services: Option<Vec<i32>>,
    pub servers: Option<Vec<i32>>,
    pub storage: Option<Vec<i32>>,
}

/// A user together with its relation sets
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub relations: UserRelations,
}

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, bcrypt_cost: u32) -> Self {
        Self { repos, bcrypt_cost }
    }

    fn hash(&self, password: &str) -> IdentityResult<String> {
        hash_password(password, self.bcrypt_cost).map_err(|e| {
            DomainError::Validation(format!("Failed to hash password: {}", e)).into()
        })
    }

    /// Create a user. Only names, email and password are taken.
    pub async fn register(&self, input: NewUser) -> IdentityResult<User> {
        let password_hash = self.hash(&input.password)?;

        let user = self
            .repos
            .users()
            .create(CreateUserDto {
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, email = %user.email, "New user registered");
        Ok(user)
    }

    /// Current relation sets, read concurrently
    pub async fn relations(&self, user_id: i32) -> IdentityResult<UserRelations> {
        let users = self.repos.users();
        let (services, servers, storage_centers) = tokio::try_join!(
            users.services(user_id),
            users.servers(user_id),
            users.storage_centers(user_id),
        )?;

        Ok(UserRelations {
            services,
            servers,
            storage_centers,
        })
    }

    pub async fn show(&self, user: User) -> IdentityResult<UserProfile> {
        let relations = self.relations(user.id).await?;
        Ok(UserProfile { user, relations })
    }

    /// Replace the supplied relation sets, merge scalar fields and return
    /// the user with its relations as stored afterwards
    pub async fn update(&self, user_id: i32, changes: ProfileUpdate) -> IdentityResult<UserProfile> {
        let password_hash = match changes.password.as_deref() {
            Some(password) => Some(self.hash(password)?),
            None => None,
        };

        let user = self
            .repos
            .users()
            .update(
                user_id,
                UpdateUserDto {
                    first_name: changes.first_name,
                    last_name: changes.last_name,
                    email: changes.email,
                    password_hash,
                    charge_per_month: changes.charge_per_month,
                    services: changes.services,
                    servers: changes.servers,
                    storage_centers: changes.storage,
                },
            )
            .await?;

        let relations = self.relations(user.id).await?;
        info!(user_id, "User updated");
        Ok(UserProfile { user, relations })
    }

    /// Delete the user; the returned profile is the state just before
    /// deletion
    pub async fn destroy(&self, user: User) -> IdentityResult<UserProfile> {
        let relations = self.relations(user.id).await?;
        self.repos.users().delete(user.id).await?;

        info!(user_id = user.id, email = %user.email, "User deleted");
        Ok(UserProfile { user, relations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::identity::IdentityError;
    use crate::infrastructure::crypto::verify_password;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::test_support::{seed_catalog, test_db, Catalog, TestDb};

    async fn setup() -> (UserService, Catalog, TestDb) {
        let db = test_db().await;
        let catalog = seed_catalog(&db).await;
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.conn.clone()));
        (UserService::new(repos, 4), catalog, db)
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            first_name: Some("Ada".to_string()),
            last_name: None,
            email: email.to_string(),
            password: "secret-pw".to_string(),
        }
    }

    #[tokio::test]
    async fn register_hashes_the_password() {
        let (service, _, _db) = setup().await;
        let user = service.register(new_user("ada@example.com")).await.unwrap();

        assert_ne!(user.password_hash, "secret-pw");
        assert!(verify_password("secret-pw", &user.password_hash).unwrap());
        assert_eq!(user.charge_per_month, None);
    }

    #[tokio::test]
    async fn update_returns_fresh_relations() {
        let (service, catalog, _db) = setup().await;
        let user = service.register(new_user("ada@example.com")).await.unwrap();

        let profile = service
            .update(
                user.id,
                ProfileUpdate {
                    last_name: Some("Lovelace".to_string()),
                    password: Some("another-pw".to_string()),
                    services: Some(vec![catalog.services[1]]),
                    storage: Some(catalog.storage_centers.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.user.last_name.as_deref(), Some("Lovelace"));
        assert!(verify_password("another-pw", &profile.user.password_hash).unwrap());
        assert_eq!(profile.relations.services.len(), 1);
        assert_eq!(profile.relations.services[0].id, catalog.services[1]);
        assert!(profile.relations.servers.is_empty());
        assert_eq!(profile.relations.storage_centers.len(), 2);
    }

    #[tokio::test]
    async fn update_with_unknown_server_fails_with_relation_label() {
        let (service, _, _db) = setup().await;
        let user = service.register(new_user("ada@example.com")).await.unwrap();

        let err = service
            .update(
                user.id,
                ProfileUpdate {
                    servers: Some(vec![4242]),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            IdentityError::Domain(DomainError::RelationNotFound { relation: "Server" })
        ));
    }

    #[tokio::test]
    async fn destroy_returns_snapshot() {
        let (service, catalog, _db) = setup().await;
        let user = service.register(new_user("ada@example.com")).await.unwrap();
        service
            .update(
                user.id,
                ProfileUpdate {
                    servers: Some(catalog.servers.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let snapshot = service.destroy(user.clone()).await.unwrap();
        assert_eq!(snapshot.user.id, user.id);
        assert_eq!(snapshot.relations.servers.len(), 2);

        let after = service.relations(user.id).await.unwrap();
        assert!(after.servers.is_empty());
    }
}
