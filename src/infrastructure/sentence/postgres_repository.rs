//! PostgreSQL sentence repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::sentence::{NewSentence, Sentence, SentenceRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of SentenceRepository
#[derive(Debug, Clone)]
pub struct PostgresSentenceRepository {
    pool: PgPool,
}

impl PostgresSentenceRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SentenceRepository for PostgresSentenceRepository {
    async fn list_by_module(&self, module_id: i64) -> Result<Vec<Sentence>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, module_id, position, learning_text, translation_text, speaker
            FROM sentences
            WHERE module_id = $1
            ORDER BY position, id
            "#,
        )
        .bind(module_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list sentences: {}", e)))?;

        Ok(rows.iter().map(row_to_sentence).collect())
    }

    async fn list_by_modules(&self, module_ids: &[i64]) -> Result<Vec<Sentence>, DomainError> {
        if module_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT id, module_id, position, learning_text, translation_text, speaker
            FROM sentences
            WHERE module_id = ANY($1)
            ORDER BY module_id, position, id
            "#,
        )
        .bind(module_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list sentences: {}", e)))?;

        Ok(rows.iter().map(row_to_sentence).collect())
    }

    async fn create(&self, sentence: NewSentence) -> Result<Sentence, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO sentences (module_id, position, learning_text, translation_text, speaker)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(sentence.module_id)
        .bind(sentence.position)
        .bind(&sentence.learning_text)
        .bind(&sentence.translation_text)
        .bind(sentence.speaker)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("foreign key") {
                DomainError::validation(format!(
                    "Module '{}' does not exist",
                    sentence.module_id
                ))
            } else {
                DomainError::storage(format!("Failed to create sentence: {}", e))
            }
        })?;

        Ok(sentence.into_sentence(id))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sentences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete sentence: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_sentence(row: &sqlx::postgres::PgRow) -> Sentence {
    Sentence {
        id: row.get("id"),
        module_id: row.get("module_id"),
        position: row.get("position"),
        learning_text: row.get("learning_text"),
        translation_text: row.get("translation_text"),
        speaker: row.get("speaker"),
    }
}
