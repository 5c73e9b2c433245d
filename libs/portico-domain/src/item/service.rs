//! Item service - validation and orchestration
//!
//! The service holds a repository and applies the business rules for items
//! before anything reaches storage. Which repository it holds is decided by
//! whoever builds the service.

use super::{Item, ItemError};
use crate::ports::ItemRepository;

/// Configuration for the item service
#[derive(Debug, Clone)]
pub struct ItemConfig {
    /// Maximum allowed text length in bytes (default: 4096)
    pub max_text_len: usize,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self { max_text_len: 4096 }
    }
}

/// Service for storing and listing items
///
/// This service encapsulates the business rules for items:
/// - Rejects empty or whitespace-only text
/// - Enforces the maximum text length
/// - Delegates persistence to the repository port
///
/// ## Static Dispatch
///
/// The service is generic over any `ItemRepository` implementation.
/// Swapping the backend means building the service with a different
/// repository value; nothing else changes.
pub struct ItemService<R> {
    repository: R,
    config: ItemConfig,
}

impl<R> ItemService<R>
where
    R: ItemRepository,
{
    /// Create a new ItemService with the given repository and configuration
    pub fn new(repository: R, config: ItemConfig) -> Self {
        Self { repository, config }
    }

    /// Create a new ItemService with default configuration
    pub fn with_repository(repository: R) -> Self {
        Self::new(repository, ItemConfig::default())
    }

    /// Validate and store a new item, returning it
    ///
    /// # Errors
    ///
    /// - `ItemError::EmptyText` if the text is empty after trimming
    /// - `ItemError::TextTooLong` if the text exceeds `max_text_len`
    /// - `ItemError::StorageFailure` if the repository write fails
    pub async fn add_item(
        &self,
        user_id: i64,
        text: impl Into<String>,
    ) -> Result<Item, ItemError> {
        let text = text.into();

        if text.trim().is_empty() {
            return Err(ItemError::EmptyText);
        }

        if text.len() > self.config.max_text_len {
            return Err(ItemError::text_too_long(
                text.len(),
                self.config.max_text_len,
            ));
        }

        let item = Item::new(user_id, text);
        self.repository.save(&item).await?;

        Ok(item)
    }

    /// Retrieve every stored item
    ///
    /// # Errors
    ///
    /// Returns `ItemError::StorageFailure` if the repository read fails
    pub async fn list_items(&self) -> Result<Vec<Item>, ItemError> {
        self.repository.find_all().await
    }

    /// Get the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Get the service configuration
    pub fn config(&self) -> &ItemConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // Vec-backed storage for testing
    #[derive(Clone, Default)]
    struct VecStorage {
        items: Arc<Mutex<Vec<Item>>>,
    }

    impl ItemRepository for VecStorage {
        fn find_all(
            &self,
        ) -> impl std::future::Future<Output = Result<Vec<Item>, ItemError>> + Send {
            let items = self.items.clone();
            async move { Ok(items.lock().unwrap().clone()) }
        }

        fn save(
            &self,
            item: &Item,
        ) -> impl std::future::Future<Output = Result<(), ItemError>> + Send {
            let items = self.items.clone();
            let item = item.clone();
            async move {
                items.lock().unwrap().push(item);
                Ok(())
            }
        }
    }

    // Storage whose every call fails
    struct BrokenStorage;

    impl ItemRepository for BrokenStorage {
        fn find_all(
            &self,
        ) -> impl std::future::Future<Output = Result<Vec<Item>, ItemError>> + Send {
            async { Err(ItemError::storage_failure("backend offline")) }
        }

        fn save(
            &self,
            _item: &Item,
        ) -> impl std::future::Future<Output = Result<(), ItemError>> + Send {
            async { Err(ItemError::storage_failure("backend offline")) }
        }
    }

    #[tokio::test]
    async fn test_add_then_list_round_trip() {
        let service = ItemService::with_repository(VecStorage::default());

        let saved = service.add_item(1, "hello").await.unwrap();
        let items = service.list_items().await.unwrap();

        assert_eq!(items, vec![saved]);
        assert_eq!(items[0].text(), "hello");
    }

    #[tokio::test]
    async fn test_list_empty_repository() {
        let service = ItemService::with_repository(VecStorage::default());

        assert!(service.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_empty_text_fails() {
        let storage = VecStorage::default();
        let service = ItemService::with_repository(storage.clone());

        let result = service.add_item(1, "   ").await;

        assert!(matches!(result.unwrap_err(), ItemError::EmptyText));
        assert!(storage.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_too_long_text_fails() {
        let config = ItemConfig { max_text_len: 4 };
        let service = ItemService::new(VecStorage::default(), config);

        let result = service.add_item(1, "hello").await;

        assert!(matches!(
            result.unwrap_err(),
            ItemError::TextTooLong { len: 5, max: 4 }
        ));
    }

    #[tokio::test]
    async fn test_text_at_limit_is_accepted() {
        let config = ItemConfig { max_text_len: 5 };
        let service = ItemService::new(VecStorage::default(), config);

        assert!(service.add_item(1, "hello").await.is_ok());
    }

    #[tokio::test]
    async fn test_multiple_items_keep_order() {
        let service = ItemService::with_repository(VecStorage::default());

        service.add_item(1, "first").await.unwrap();
        service.add_item(2, "second").await.unwrap();

        let texts: Vec<_> = service
            .list_items()
            .await
            .unwrap()
            .iter()
            .map(|item| item.text().to_string())
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_storage_failure_is_propagated() {
        let service = ItemService::with_repository(BrokenStorage);

        assert!(matches!(
            service.add_item(1, "hello").await.unwrap_err(),
            ItemError::StorageFailure(_)
        ));
        assert!(matches!(
            service.list_items().await.unwrap_err(),
            ItemError::StorageFailure(_)
        ));
    }
}
