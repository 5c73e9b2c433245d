//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contract that storage adapters must implement.
//! The domain states what it needs and the infrastructure crates provide it.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait`, so every adapter is monomorphized into its callers.

use std::future::Future;

use crate::item::{Item, ItemError};

/// Port for item storage
///
/// This trait abstracts away the storage backend (in-memory sequence, SQLite, etc.).
/// It is deliberately small: one read of everything and one write of a single item.
/// Implementations must:
/// - Persist every saved item so that a later `find_all` returns it
/// - Convert infrastructure errors to `ItemError::StorageFailure`
///
/// The contract makes no ordering promise. Both adapters shipped with Portico
/// return items in insertion order.
pub trait ItemRepository: Send + Sync {
    /// Retrieve every stored item
    ///
    /// # Errors
    ///
    /// Returns `ItemError::StorageFailure` if the backend cannot be read
    fn find_all(&self) -> impl Future<Output = Result<Vec<Item>, ItemError>> + Send;

    /// Persist one new item
    ///
    /// The repository does not validate the item; that is the service's job.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::StorageFailure` if the write fails
    fn save(&self, item: &Item) -> impl Future<Output = Result<(), ItemError>> + Send;
}
