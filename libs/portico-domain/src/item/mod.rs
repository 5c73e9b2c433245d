//! Item domain module
//!
//! This module contains the `Item` DTO, its identifier type, the domain errors
//! and the service that validates items before handing them to a repository.

pub mod entity;
pub mod error;
pub mod ids;
pub mod service;

pub use entity::Item;
pub use error::{ItemError, Result};
pub use ids::UserId;
pub use service::{ItemConfig, ItemService};
