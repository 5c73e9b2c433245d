//! # Portico Domain Layer
//!
//! This crate contains the domain model and the repository contract for Portico.
//! It follows hexagonal architecture principles:
//!
//! - **Entities**: The `Item` data transfer object
//! - **Ports**: Trait definitions for external dependencies (`ItemRepository`)
//! - **Services**: Validation and orchestration on top of a repository
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (SQL, gRPC, HTTP, etc.).
//! Storage backends implement the `ItemRepository` port in their own crates and
//! are handed to `ItemService` when the application is composed.
//!
//! ## Example
//!
//! ```rust
//! use portico_domain::item::ItemService;
//! use portico_domain::ports::ItemRepository;
//!
//! // The service is generic over any ItemRepository implementation
//! async fn example<R: ItemRepository>(service: ItemService<R>) {
//!     let item = service.add_item(1, "hello").await.unwrap();
//!     let items = service.list_items().await.unwrap();
//!     assert!(items.contains(&item));
//! }
//! ```

pub mod item;
pub mod ports;

// Re-export commonly used types
pub use item::{Item, ItemConfig, ItemError, ItemService, UserId};
pub use ports::ItemRepository;
