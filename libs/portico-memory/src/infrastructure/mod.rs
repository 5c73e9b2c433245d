//! Infrastructure adapters backed by process memory

mod memory_repository;

pub use memory_repository::InMemoryItemRepository;
