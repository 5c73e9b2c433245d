//! Integration tests for the in-memory repository
//!
//! These tests verify that:
//! 1. The repository works behind the `ItemService`
//! 2. Concurrent writers never lose items

use std::collections::HashSet;

use portico_domain::{ItemRepository, ItemService};
use portico_memory::infrastructure::InMemoryItemRepository;

#[tokio::test]
async fn test_service_round_trip() {
    let service = ItemService::with_repository(InMemoryItemRepository::new());

    let saved = service.add_item(1, "hello").await.expect("save failed");
    let items = service.list_items().await.expect("list failed");

    assert_eq!(items, vec![saved]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_are_not_lost() {
    let repo = InMemoryItemRepository::new();

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.save(&portico_domain::Item::new(i, format!("item-{i}")))
                    .await
                    .expect("save failed");
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("task panicked");
    }

    let items = repo.find_all().await.expect("list failed");
    assert_eq!(items.len(), 64);

    let ids: HashSet<i64> = items.iter().map(|item| item.user_id().get()).collect();
    assert_eq!(ids.len(), 64, "Every writer should be represented once");
}
