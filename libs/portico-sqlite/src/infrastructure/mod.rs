//! Infrastructure adapters backed by SQLite

mod schema;
mod sqlite_repository;

pub use sqlite_repository::SqliteItemRepository;
