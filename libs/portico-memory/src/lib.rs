//! # Portico In-Memory Adapter
//!
//! Implements the `ItemRepository` port on top of a plain in-memory sequence.
//! Nothing is persisted; all items are lost when the process exits.

pub mod infrastructure;
