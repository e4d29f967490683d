//! Item repository trait

use async_trait::async_trait;

use super::Item;
use crate::domain::DomainError;

/// Repository trait for Item reads
///
/// Items are read-only from this service's point of view.
#[async_trait]
pub trait ItemRepository: Send + Sync + std::fmt::Debug {
    /// Get all items, ordered by ID
    async fn list(&self) -> Result<Vec<Item>, DomainError>;
}

/// In-memory implementation of ItemRepository
pub mod in_memory {
    use super::*;
    use std::sync::RwLock;

    /// In-memory implementation of ItemRepository for testing and development
    #[derive(Debug, Default)]
    pub struct InMemoryItemRepository {
        items: RwLock<Vec<Item>>,
    }

    impl InMemoryItemRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_item(self, item: Item) -> Self {
            // Exclusively owned at this point, the lock cannot be poisoned
            self.items.write().unwrap().push(item);
            self
        }
    }

    #[async_trait]
    impl ItemRepository for InMemoryItemRepository {
        async fn list(&self) -> Result<Vec<Item>, DomainError> {
            let items = self
                .items
                .read()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            let mut items = items.clone();
            items.sort_by_key(|i| i.id);
            Ok(items)
        }
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock implementation of ItemRepository for testing
    #[derive(Debug, Default)]
    pub struct MockItemRepository {
        items: Mutex<Vec<Item>>,
        error: Mutex<Option<String>>,
        list_calls: AtomicUsize,
    }

    impl MockItemRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_item(self, item: Item) -> Self {
            self.items.lock().unwrap().push(item);
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        pub fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ItemRepository for MockItemRepository {
        async fn list(&self) -> Result<Vec<Item>, DomainError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);

            if let Some(err) = self.error.lock().unwrap().as_ref() {
                return Err(DomainError::storage(err.clone()));
            }

            let mut items = self.items.lock().unwrap().clone();
            items.sort_by_key(|i| i.id);
            Ok(items)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_repository_list() {
            let repo = MockItemRepository::new()
                .with_item(Item::new(2, "salamat", "thank you"))
                .with_item(Item::new(1, "kamusta", "hello"));

            let items = repo.list().await.unwrap();

            assert_eq!(items.len(), 2);
            assert_eq!(items[0].id, 1);
            assert_eq!(repo.list_calls(), 1);
        }
    }
}
