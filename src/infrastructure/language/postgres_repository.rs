//! PostgreSQL language repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::language::{Language, LanguageRepository, NewLanguage};
use crate::domain::DomainError;

/// PostgreSQL implementation of LanguageRepository
#[derive(Debug, Clone)]
pub struct PostgresLanguageRepository {
    pool: PgPool,
}

impl PostgresLanguageRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LanguageRepository for PostgresLanguageRepository {
    async fn get(&self, id: i64) -> Result<Option<Language>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, background_image_url, country_code, language_presentation
            FROM languages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get language: {}", e)))?;

        Ok(row.map(|row| row_to_language(&row)))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Language>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, background_image_url, country_code, language_presentation
            FROM languages
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get language by name: {}", e)))?;

        Ok(row.map(|row| row_to_language(&row)))
    }

    async fn list(&self) -> Result<Vec<Language>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, background_image_url, country_code, language_presentation
            FROM languages
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list languages: {}", e)))?;

        Ok(rows.iter().map(row_to_language).collect())
    }

    async fn create(&self, language: NewLanguage) -> Result<Language, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO languages (name, background_image_url, country_code, language_presentation)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&language.name)
        .bind(&language.background_image_url)
        .bind(&language.country_code)
        .bind(&language.language_presentation)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!("Language '{}' already exists", language.name))
            } else {
                DomainError::storage(format!("Failed to create language: {}", e))
            }
        })?;

        Ok(language.into_language(id))
    }

    async fn update(&self, language: Language) -> Result<Language, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE languages
            SET name = $2, background_image_url = $3, country_code = $4,
                language_presentation = $5
            WHERE id = $1
            "#,
        )
        .bind(language.id)
        .bind(&language.name)
        .bind(&language.background_image_url)
        .bind(&language.country_code)
        .bind(&language.language_presentation)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!("Language '{}' already exists", language.name))
            } else {
                DomainError::storage(format!("Failed to update language: {}", e))
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Language '{}' not found",
                language.id
            )));
        }

        Ok(language)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM languages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete language: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_language(row: &sqlx::postgres::PgRow) -> Language {
    Language {
        id: row.get("id"),
        name: row.get("name"),
        background_image_url: row.get("background_image_url"),
        country_code: row.get("country_code"),
        language_presentation: row.get("language_presentation"),
    }
}
