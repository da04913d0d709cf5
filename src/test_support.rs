//! Helpers shared by the unit tests: a migrated throw-away SQLite
//! database and a small seeded catalog.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;

use crate::infrastructure::database::entities::{server, service, service_group, storage_center};
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::{init_database, DatabaseConfig};

/// SQLite file under the temp dir, removed on drop
pub struct TempDbFile {
    path: PathBuf,
}

impl TempDbFile {
    pub fn new(prefix: &str) -> Self {
        let path = std::env::temp_dir().join(format!("{}-{}.db", prefix, uuid::Uuid::new_v4()));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `sqlite://` URL that creates the file on first connect
    pub fn url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path.display())
    }
}

impl Drop for TempDbFile {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

/// Migrated test database. Derefs to the connection; the file goes away
/// with the value.
pub struct TestDb {
    pub conn: DatabaseConnection,
    file: TempDbFile,
}

impl TestDb {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Deref for TestDb {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

/// File-backed so every pooled connection sees the same schema
pub async fn test_db() -> TestDb {
    let file = TempDbFile::new("account-service");
    let config = DatabaseConfig::sqlite(&file.path().to_string_lossy());
    let conn = init_database(&config).await.expect("connect test database");
    Migrator::up(&conn, None).await.expect("run migrations");
    TestDb { conn, file }
}

/// IDs of the seeded catalog rows
#[derive(Debug, Clone)]
pub struct Catalog {
    pub services: Vec<i32>,
    pub servers: Vec<i32>,
    pub storage_centers: Vec<i32>,
}

pub async fn seed_catalog(db: &DatabaseConnection) -> Catalog {
    let now = Utc::now();

    let group = service_group::ActiveModel {
        name: Set("Hosting".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert service group");

    let mut services = Vec::new();
    for name in ["Web hosting", "Mail"] {
        let model = service::ActiveModel {
            name: Set(name.to_string()),
            description: Set(Some(format!("{} service", name))),
            group_id: Set(Some(group.id)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("insert service");
        services.push(model.id);
    }

    let mut servers = Vec::new();
    for name in ["srv-01", "srv-02"] {
        let model = server::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("insert server");
        servers.push(model.id);
    }

    let mut storage_centers = Vec::new();
    for name in ["Frankfurt", "Dublin"] {
        let model = storage_center::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("insert storage center");
        storage_centers.push(model.id);
    }

    Catalog {
        services,
        servers,
        storage_centers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn database_file_is_removed_on_drop() {
        let db = test_db().await;
        let path = db.path().to_path_buf();
        seed_catalog(&db).await;
        assert!(path.exists());

        drop(db);
        assert!(!path.exists());
    }
}
