//! Sentence repository trait

use async_trait::async_trait;

use super::{NewSentence, Sentence};
use crate::domain::DomainError;

/// Repository trait for Sentence persistence
#[async_trait]
pub trait SentenceRepository: Send + Sync + std::fmt::Debug {
    /// Get all sentences for a module, ordered by position
    async fn list_by_module(&self, module_id: i64) -> Result<Vec<Sentence>, DomainError>;

    /// Get all sentences for a set of modules, ordered by module then position
    async fn list_by_modules(&self, module_ids: &[i64]) -> Result<Vec<Sentence>, DomainError>;

    /// Insert a new sentence, assigning its ID
    async fn create(&self, sentence: NewSentence) -> Result<Sentence, DomainError>;

    /// Delete a sentence by ID
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

fn sort_for_module(sentences: &mut [Sentence]) {
    sentences.sort_by_key(|s| (s.position, s.id));
}

fn sort_for_modules(sentences: &mut [Sentence]) {
    sentences.sort_by_key(|s| (s.module_id, s.position, s.id));
}

/// In-memory implementation of SentenceRepository
pub mod in_memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::RwLock;

    /// In-memory implementation of SentenceRepository for testing and development
    #[derive(Debug, Default)]
    pub struct InMemorySentenceRepository {
        sentences: RwLock<HashMap<i64, Sentence>>,
        next_id: AtomicI64,
    }

    impl InMemorySentenceRepository {
        pub fn new() -> Self {
            Self {
                sentences: RwLock::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    #[async_trait]
    impl SentenceRepository for InMemorySentenceRepository {
        async fn list_by_module(&self, module_id: i64) -> Result<Vec<Sentence>, DomainError> {
            let sentences = self
                .sentences
                .read()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            let mut sentences: Vec<Sentence> = sentences
                .values()
                .filter(|s| s.module_id == module_id)
                .cloned()
                .collect();
            sort_for_module(&mut sentences);
            Ok(sentences)
        }

        async fn list_by_modules(&self, module_ids: &[i64]) -> Result<Vec<Sentence>, DomainError> {
            let sentences = self
                .sentences
                .read()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            let mut sentences: Vec<Sentence> = sentences
                .values()
                .filter(|s| module_ids.contains(&s.module_id))
                .cloned()
                .collect();
            sort_for_modules(&mut sentences);
            Ok(sentences)
        }

        async fn create(&self, sentence: NewSentence) -> Result<Sentence, DomainError> {
            let mut sentences = self
                .sentences
                .write()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let sentence = sentence.into_sentence(id);
            sentences.insert(sentence.id, sentence.clone());
            Ok(sentence)
        }

        async fn delete(&self, id: i64) -> Result<bool, DomainError> {
            let mut sentences = self
                .sentences
                .write()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

            Ok(sentences.remove(&id).is_some())
        }
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock implementation of SentenceRepository for testing
    #[derive(Debug, Default)]
    pub struct MockSentenceRepository {
        sentences: Mutex<HashMap<i64, Sentence>>,
        next_id: AtomicI64,
        error: Mutex<Option<String>>,
        list_by_module_calls: AtomicUsize,
        list_by_modules_calls: AtomicUsize,
    }

    impl MockSentenceRepository {
        pub fn new() -> Self {
            Self {
                sentences: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
                error: Mutex::new(None),
                list_by_module_calls: AtomicUsize::new(0),
                list_by_modules_calls: AtomicUsize::new(0),
            }
        }

        pub fn with_sentence(self, sentence: Sentence) -> Self {
            let next = self.next_id.load(Ordering::SeqCst).max(sentence.id + 1);
            self.next_id.store(next, Ordering::SeqCst);
            self.sentences
                .lock()
                .unwrap()
                .insert(sentence.id, sentence);
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        pub fn list_by_module_calls(&self) -> usize {
            self.list_by_module_calls.load(Ordering::SeqCst)
        }

        pub fn list_by_modules_calls(&self) -> usize {
            self.list_by_modules_calls.load(Ordering::SeqCst)
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if let Some(err) = self.error.lock().unwrap().as_ref() {
                return Err(DomainError::storage(err.clone()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl SentenceRepository for MockSentenceRepository {
        async fn list_by_module(&self, module_id: i64) -> Result<Vec<Sentence>, DomainError> {
            self.list_by_module_calls.fetch_add(1, Ordering::SeqCst);
            self.check_error()?;
            let mut sentences: Vec<Sentence> = self
                .sentences
                .lock()
                .unwrap()
                .values()
                .filter(|s| s.module_id == module_id)
                .cloned()
                .collect();
            sort_for_module(&mut sentences);
            Ok(sentences)
        }

        async fn list_by_modules(&self, module_ids: &[i64]) -> Result<Vec<Sentence>, DomainError> {
            self.list_by_modules_calls.fetch_add(1, Ordering::SeqCst);
            self.check_error()?;
            let mut sentences: Vec<Sentence> = self
                .sentences
                .lock()
                .unwrap()
                .values()
                .filter(|s| module_ids.contains(&s.module_id))
                .cloned()
                .collect();
            sort_for_modules(&mut sentences);
            Ok(sentences)
        }

        async fn create(&self, sentence: NewSentence) -> Result<Sentence, DomainError> {
            self.check_error()?;
            let id = self.next_id.fetch_add(1, Ordering::SeqCst).max(1);
            let sentence = sentence.into_sentence(id);
            self.sentences
                .lock()
                .unwrap()
                .insert(sentence.id, sentence.clone());
            Ok(sentence)
        }

        async fn delete(&self, id: i64) -> Result<bool, DomainError> {
            self.check_error()?;
            Ok(self.sentences.lock().unwrap().remove(&id).is_some())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_repository_list_by_module_sorted() {
            let repo = MockSentenceRepository::new()
                .with_sentence(Sentence::new(1, 1, 2, "b", "b"))
                .with_sentence(Sentence::new(2, 1, 0, "a", "a"))
                .with_sentence(Sentence::new(3, 2, 1, "c", "c"));

            let sentences = repo.list_by_module(1).await.unwrap();

            assert_eq!(sentences.len(), 2);
            assert_eq!(sentences[0].position, 0);
            assert_eq!(sentences[1].position, 2);
        }

        #[tokio::test]
        async fn test_mock_repository_list_by_modules() {
            let repo = MockSentenceRepository::new()
                .with_sentence(Sentence::new(1, 1, 0, "a", "a"))
                .with_sentence(Sentence::new(2, 2, 0, "b", "b"))
                .with_sentence(Sentence::new(3, 3, 0, "c", "c"));

            let sentences = repo.list_by_modules(&[1, 3]).await.unwrap();

            assert_eq!(sentences.len(), 2);
            assert_eq!(sentences[0].module_id, 1);
            assert_eq!(sentences[1].module_id, 3);
        }

        #[tokio::test]
        async fn test_mock_repository_create_delete() {
            let repo = MockSentenceRepository::new();

            let created = repo
                .create(NewSentence::new(1, 0, "Kumusta", "Hello"))
                .await
                .unwrap();

            assert!(repo.delete(created.id).await.unwrap());
            assert!(!repo.delete(created.id).await.unwrap());
        }
    }
}
