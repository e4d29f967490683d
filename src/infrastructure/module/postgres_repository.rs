//! PostgreSQL module repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::module::{Module, ModuleRepository, NewModule};
use crate::domain::DomainError;

/// PostgreSQL implementation of ModuleRepository
#[derive(Debug, Clone)]
pub struct PostgresModuleRepository {
    pool: PgPool,
}

impl PostgresModuleRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ModuleRepository for PostgresModuleRepository {
    async fn get(&self, id: i64) -> Result<Option<Module>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, language_id, name, description, module_presentation, material_icon_name
            FROM modules
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get module: {}", e)))?;

        Ok(row.map(|row| row_to_module(&row)))
    }

    async fn list_by_language(&self, language_id: i64) -> Result<Vec<Module>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, language_id, name, description, module_presentation, material_icon_name
            FROM modules
            WHERE language_id = $1
            ORDER BY id
            "#,
        )
        .bind(language_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list modules: {}", e)))?;

        Ok(rows.iter().map(row_to_module).collect())
    }

    async fn create(&self, module: NewModule) -> Result<Module, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO modules (language_id, name, description, module_presentation,
                                 material_icon_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(module.language_id)
        .bind(&module.name)
        .bind(&module.description)
        .bind(&module.module_presentation)
        .bind(&module.material_icon_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("foreign key") {
                DomainError::validation(format!(
                    "Language '{}' does not exist",
                    module.language_id
                ))
            } else {
                DomainError::storage(format!("Failed to create module: {}", e))
            }
        })?;

        Ok(module.into_module(id))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM modules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete module: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_module(row: &sqlx::postgres::PgRow) -> Module {
    Module {
        id: row.get("id"),
        language_id: row.get("language_id"),
        name: row.get("name"),
        description: row.get("description"),
        module_presentation: row.get("module_presentation"),
        material_icon_name: row.get("material_icon_name"),
    }
}
