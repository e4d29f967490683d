//! Database migrations infrastructure

use sqlx::postgres::PgPool;

use crate::domain::DomainError;

/// PostgreSQL migrator tracking applied migrations in a ledger table
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
}

impl PostgresMigrator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the migrations table if it doesn't exist
    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                success BOOLEAN NOT NULL DEFAULT TRUE
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    /// Runs a single migration
    pub async fn run_migration(&self, migration: &Migration) -> Result<(), DomainError> {
        self.ensure_migrations_table().await?;

        // Check if already applied
        let applied: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)",
        )
        .bind(migration.version)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to check migration status: {}", e)))?;

        if applied {
            return Ok(());
        }

        sqlx::query(&migration.up)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to run migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query(
            "INSERT INTO _migrations (version, description) VALUES ($1, $2)",
        )
        .bind(migration.version)
        .bind(&migration.description)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::storage(format!("Failed to record migration {}: {}", migration.version, e))
        })?;

        Ok(())
    }

    /// Reverts a single migration
    pub async fn revert_migration(&self, migration: &Migration) -> Result<(), DomainError> {
        self.ensure_migrations_table().await?;

        let applied: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)",
        )
        .bind(migration.version)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to check migration status: {}", e)))?;

        if !applied {
            return Ok(());
        }

        sqlx::query(&migration.down)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to revert migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("DELETE FROM _migrations WHERE version = $1")
            .bind(migration.version)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to remove migration record {}: {}",
                    migration.version, e
                ))
            })?;

        Ok(())
    }

    /// Returns the latest applied migration version
    pub async fn current_version(&self) -> Result<Option<i64>, DomainError> {
        self.ensure_migrations_table().await?;

        let version: Option<i64> = sqlx::query_scalar(
            "SELECT MAX(version) FROM _migrations WHERE success = TRUE",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get migration version: {}", e)))?;

        Ok(version)
    }
}

/// Represents a database migration
#[derive(Debug, Clone)]
pub struct Migration {
    /// Migration version
    pub version: i64,
    /// Human-readable description
    pub description: String,
    /// SQL to run when applying the migration
    pub up: String,
    /// SQL to run when reverting the migration
    pub down: String,
}

impl Migration {
    pub fn new(
        version: i64,
        description: impl Into<String>,
        up: impl Into<String>,
        down: impl Into<String>,
    ) -> Self {
        Self {
            version,
            description: description.into(),
            up: up.into(),
            down: down.into(),
        }
    }
}

/// Collection of migrations for the content schema
pub fn content_migrations() -> Vec<Migration> {
    vec![
        Migration::new(
            1,
            "Create languages table",
            r#"
            CREATE TABLE IF NOT EXISTS languages (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL UNIQUE,
                background_image_url TEXT,
                country_code VARCHAR(2),
                language_presentation TEXT
            );
            "#,
            r#"
            DROP TABLE IF EXISTS languages;
            "#,
        ),
        Migration::new(
            2,
            "Create modules table",
            r#"
            CREATE TABLE IF NOT EXISTS modules (
                id BIGSERIAL PRIMARY KEY,
                language_id BIGINT NOT NULL REFERENCES languages(id) ON DELETE CASCADE,
                name VARCHAR(255) NOT NULL,
                description TEXT,
                module_presentation TEXT,
                material_icon_name VARCHAR(100)
            );
            CREATE INDEX IF NOT EXISTS idx_modules_language_id ON modules(language_id);
            "#,
            r#"
            DROP TABLE IF EXISTS modules;
            "#,
        ),
        Migration::new(
            3,
            "Create sentences table",
            r#"
            CREATE TABLE IF NOT EXISTS sentences (
                id BIGSERIAL PRIMARY KEY,
                module_id BIGINT NOT NULL REFERENCES modules(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                learning_text TEXT NOT NULL,
                translation_text TEXT NOT NULL,
                speaker INTEGER NOT NULL DEFAULT 0
            );
            CREATE INDEX IF NOT EXISTS idx_sentences_module_id ON sentences(module_id);
            "#,
            r#"
            DROP TABLE IF EXISTS sentences;
            "#,
        ),
        Migration::new(
            4,
            "Create items table",
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id BIGSERIAL PRIMARY KEY,
                tagalog TEXT NOT NULL,
                english TEXT NOT NULL
            );
            "#,
            r#"
            DROP TABLE IF EXISTS items;
            "#,
        ),
    ]
}

/// Runs all pending content migrations
pub async fn run_content_migrations(pool: &PgPool) -> Result<(), DomainError> {
    let migrator = PostgresMigrator::new(pool.clone());

    for migration in content_migrations() {
        migrator.run_migration(&migration).await?;
    }

    Ok(())
}
