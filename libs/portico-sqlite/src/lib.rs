//! # Portico SQLite Adapter
//!
//! Implements the `ItemRepository` port on top of a SQLite database through
//! `sqlx`. Every query binds its values; nothing is spliced into SQL text.

mod error;
pub mod infrastructure;

pub use error::{Result, SqliteError};
