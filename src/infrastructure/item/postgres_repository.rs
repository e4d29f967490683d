//! PostgreSQL item repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::item::{Item, ItemRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of ItemRepository
///
/// The items table is seeded externally, so only reads are supported.
#[derive(Debug, Clone)]
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn list(&self) -> Result<Vec<Item>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, tagalog, english
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list items: {}", e)))?;

        Ok(rows
            .iter()
            .map(|row| Item {
                id: row.get("id"),
                tagalog: row.get("tagalog"),
                english: row.get("english"),
            })
            .collect())
    }
}
