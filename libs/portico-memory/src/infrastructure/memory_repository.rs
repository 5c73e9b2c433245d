//! In-Memory Item Repository Implementation
//!
//! This module implements the `ItemRepository` trait with a `Vec` guarded by a
//! read-write lock. `save` appends and `find_all` returns a snapshot copy.
//! Both touch the lock only when their future is polled.

use std::sync::Arc;

use parking_lot::RwLock;
use portico_domain::{
    item::{Item, ItemError},
    ports::ItemRepository,
};
use tracing::{debug, instrument};

/// Vec-based implementation of the ItemRepository port
///
/// Items are kept in insertion order. Each operation takes the lock once, so
/// concurrent `save` calls are serialized but never lost.
///
/// ## Cloning
///
/// `InMemoryItemRepository` is cheaply cloneable via [`Arc`]. All clones share
/// the same underlying sequence.
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with items
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items.into_iter().collect())),
        }
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether the repository holds no items
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self))]
    fn find_all(&self) -> impl std::future::Future<Output = Result<Vec<Item>, ItemError>> + Send {
        let items = Arc::clone(&self.items);

        async move {
            let snapshot = items.read().clone();
            debug!(count = snapshot.len(), "Listed items from memory");
            Ok(snapshot)
        }
    }

    #[instrument(skip(self, item), fields(user_id = %item.user_id()))]
    fn save(&self, item: &Item) -> impl std::future::Future<Output = Result<(), ItemError>> + Send {
        let items = Arc::clone(&self.items);
        let item = item.clone();

        async move {
            let count = {
                let mut items = items.write();
                items.push(item);
                items.len()
            };
            debug!(count, "Appended item to memory");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_find_all() {
        let repo = InMemoryItemRepository::new();

        repo.save(&Item::new(1, "hello")).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![Item::new(1, "hello")]);
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = InMemoryItemRepository::new();

        assert!(repo.is_empty());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryItemRepository::new();
        let clone = repo.clone();

        clone.save(&Item::new(2, "shared")).await.unwrap();

        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let repo = InMemoryItemRepository::with_items([Item::new(1, "a")]);

        let snapshot = repo.find_all().await.unwrap();
        repo.save(&Item::new(2, "b")).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_unpolled_save_writes_nothing() {
        let repo = InMemoryItemRepository::new();

        let item = Item::new(1, "never awaited");
        let pending = repo.save(&item);
        drop(pending);

        assert_eq!(repo.len(), 0);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_reads_when_polled() {
        let repo = InMemoryItemRepository::new();

        let listing = repo.find_all();
        repo.save(&Item::new(1, "late")).await.unwrap();

        assert_eq!(listing.await.unwrap(), vec![Item::new(1, "late")]);
    }
}
