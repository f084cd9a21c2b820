//! Database connection and schema creation.

use std::time::Duration;

use scribe_config::{DatabaseBackend, ScribeConfig};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr};

use crate::error::StoreError;

pub async fn connect(config: &ScribeConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);
    Database::connect(opt).await
}

/// Dialect used to render DDL for a live connection.
pub fn backend_of(db: &impl ConnectionTrait) -> DatabaseBackend {
    match db.get_database_backend() {
        DbBackend::Postgres => DatabaseBackend::Postgres,
        DbBackend::MySql => DatabaseBackend::MySql,
        _ => DatabaseBackend::Sqlite,
    }
}

/// Create any missing table or index. Every statement is `IF NOT EXISTS`,
/// so running this against an up-to-date database changes nothing.
pub async fn migrate(db: &DatabaseConnection) -> Result<usize, StoreError> {
    let backend = backend_of(db);
    let statements = scribe_schema::schema_sql(backend)?;
    for sql in &statements {
        tracing::debug!(%sql, "applying");
        db.execute_unprepared(sql).await?;
    }
    tracing::info!(?backend, statements = statements.len(), "schema up to date");
    Ok(statements.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{comment, follow, group, post, user};
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScribeConfig {
            database_url: format!("sqlite://{}?mode=rwc", dir.path().join("m.db").display()),
            ..Default::default()
        };
        let db = connect(&config).await.unwrap();

        let first = migrate(&db).await.unwrap();
        let second = migrate(&db).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(backend_of(&db), DatabaseBackend::Sqlite);

        assert_eq!(user::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(group::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(post::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(comment::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(follow::Entity::find().count(&db).await.unwrap(), 0);
    }
}
